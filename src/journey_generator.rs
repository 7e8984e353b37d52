use chrono::TimeDelta;
use itertools::izip;
use rand::Rng;

use crate::error::Result;
use crate::journey_plan::{JourneyLeg, Origin, SamplingPolicy};
use crate::leg_sampler::LegSeries;
use crate::projection::{DestinationProjector, GeodesicProjector};
use crate::trajectory::{Trajectory, TrajectoryPoint};

/* Turns a journey plan into a trajectory. Legs are sampled in order into
three parallel series (time gaps, hop distances, bearings), then folded into
points: each sample projects from the previous point, so the whole path hangs
off the origin. Generation is all-or-nothing; any error leaves no output. */

pub struct JourneyGenerator {
    legs: Vec<JourneyLeg>,
    policy: SamplingPolicy,
    origin: Origin,
}

impl JourneyGenerator {
    pub fn new(legs: Vec<JourneyLeg>, policy: SamplingPolicy, origin: Origin) -> Self {
        JourneyGenerator {
            legs,
            policy,
            origin,
        }
    }

    /// Runs one generation pass with a caller-supplied rng. Seed the rng to
    /// make the run reproducible.
    pub fn generate_with_rng(&self, rng: &mut impl Rng) -> Result<Trajectory> {
        // reject a bad plan before the first draw, even if the bad leg is the
        // last one
        self.policy.validate()?;
        for leg in &self.legs {
            leg.validate()?;
        }

        let mut time_diffs: Vec<i64> = Vec::new();
        let mut distances: Vec<f64> = Vec::new();
        let mut orientations: Vec<i64> = Vec::new();
        for (i, leg) in self.legs.iter().enumerate() {
            let series = LegSeries::generate(rng, leg, &self.policy)?;
            debug!("leg {}: {} samples", i, series.len());
            time_diffs.extend_from_slice(&series.time_diffs);
            distances.extend_from_slice(&series.distances);
            orientations.extend_from_slice(&series.orientations);
        }

        let trajectory = integrate(
            &self.origin,
            &time_diffs,
            &distances,
            &orientations,
            &GeodesicProjector,
        )?;
        info!(
            "trajectory generated: {} legs, {} points",
            self.legs.len(),
            trajectory.len()
        );
        Ok(trajectory)
    }

    pub fn generate(&self) -> Result<Trajectory> {
        self.generate_with_rng(&mut rand::rng())
    }
}

/// Folds the sampled series into points, starting from the origin. Sampler
/// distances are in meters, the projector takes kilometers.
fn integrate(
    origin: &Origin,
    time_diffs: &[i64],
    distances: &[f64],
    orientations: &[i64],
    projector: &impl DestinationProjector,
) -> Result<Trajectory> {
    let mut points = Vec::with_capacity(time_diffs.len() + 1);
    points.push(TrajectoryPoint {
        time: origin.time,
        point: origin.point,
    });
    let mut elapsed_seconds = 0_i64;
    let mut position = origin.point;
    for (diff, distance_m, bearing) in izip!(time_diffs, distances, orientations) {
        elapsed_seconds += *diff;
        position = projector.destination(position, *distance_m / 1000.0, *bearing as f64)?;
        points.push(TrajectoryPoint {
            time: origin.time + TimeDelta::seconds(elapsed_seconds),
            point: position,
        });
    }
    Ok(Trajectory { points })
}
