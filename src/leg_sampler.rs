use rand::Rng;

use crate::error::{GenerationError, Result};
use crate::journey_plan::{JourneyLeg, SamplingPolicy};

/* Per-leg randomized series. A leg of `duration_minutes` sampled at a nominal
gap of `average_seconds` yields a fixed number of samples; each sample then
gets an independently drawn time gap, a distance derived from it, and a
cumulative bearing. The three series always have equal length. */

/// Number of samples a leg contributes: floor of duration over the nominal
/// gap. The randomized gaps do not feed back into this count.
pub fn sample_count(duration_minutes: f64, average_seconds: f64) -> usize {
    ((duration_minutes * 60.0) / average_seconds).floor() as usize
}

/// Draws `sample_count` time gaps uniformly from the inclusive range
/// `[lower_bound_seconds, upper_bound_seconds]`. Both bounds are hit.
pub fn generate_time_diffs(
    rng: &mut impl Rng,
    sample_count: usize,
    lower_bound_seconds: i64,
    upper_bound_seconds: i64,
) -> Result<Vec<i64>> {
    if lower_bound_seconds > upper_bound_seconds {
        return Err(GenerationError::InvalidConfiguration(format!(
            "sampling bounds are inverted: lower {} > upper {}",
            lower_bound_seconds, upper_bound_seconds
        )));
    }
    Ok((0..sample_count)
        .map(|_| rng.random_range(lower_bound_seconds..=upper_bound_seconds))
        .collect())
}

/// Distance covered within each time gap at the leg's constant speed, in
/// meters. Longer gaps yield proportionally longer hops.
pub fn generate_distances(time_diffs: &[i64], speed_mps: f64) -> Vec<f64> {
    time_diffs
        .iter()
        .map(|seconds| *seconds as f64 * speed_mps)
        .collect()
}

/// Bearing of each sample, in degrees clockwise from north. A random turn in
/// the inclusive range `[-turn_range_deg, turn_range_deg]` is drawn per
/// sample and accumulated, so consecutive bearings drift instead of jumping.
/// The walk starts at zero for every leg.
pub fn generate_orientations(
    rng: &mut impl Rng,
    sample_count: usize,
    turn_range_deg: i32,
) -> Result<Vec<i64>> {
    if turn_range_deg < 0 {
        return Err(GenerationError::InvalidConfiguration(format!(
            "leg turn range must be non-negative, got {}",
            turn_range_deg
        )));
    }
    let range = turn_range_deg as i64;
    Ok((0..sample_count)
        .map(|_| rng.random_range(-range..=range))
        .scan(0_i64, |bearing, turn| {
            *bearing += turn;
            Some(*bearing)
        })
        .collect())
}

/// The three parallel series backing one leg of a journey.
#[derive(Clone, Debug, PartialEq)]
pub struct LegSeries {
    pub time_diffs: Vec<i64>,
    pub distances: Vec<f64>,
    pub orientations: Vec<i64>,
}

impl LegSeries {
    pub fn generate(
        rng: &mut impl Rng,
        leg: &JourneyLeg,
        policy: &SamplingPolicy,
    ) -> Result<LegSeries> {
        leg.validate()?;
        policy.validate()?;
        let count = sample_count(leg.duration_minutes, policy.average_seconds);
        let time_diffs = generate_time_diffs(
            rng,
            count,
            policy.lower_bound_seconds,
            policy.upper_bound_seconds,
        )?;
        let distances = generate_distances(&time_diffs, leg.speed_mps);
        let orientations = generate_orientations(rng, count, leg.turn_range_deg)?;
        Ok(LegSeries {
            time_diffs,
            distances,
            orientations,
        })
    }

    pub fn len(&self) -> usize {
        self.time_diffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_diffs.is_empty()
    }
}
