use chrono::{DateTime, Utc};

use crate::error::{GenerationError, Result};
use crate::trajectory::TrackPoint;

/// One segment of a journey with a fixed movement profile.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct JourneyLeg {
    pub duration_minutes: f64,
    /// Constant travel speed in meters per second.
    pub speed_mps: f64,
    /// Max bearing change per sample, in whole degrees. Zero locks the
    /// bearing for the entire leg.
    pub turn_range_deg: i32,
}

/// Bounds for the randomized gap between consecutive samples.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SamplingPolicy {
    /// Nominal gap used to derive the sample count of a leg.
    pub average_seconds: f64,
    pub lower_bound_seconds: i64,
    pub upper_bound_seconds: i64,
}

/// Where and when a journey starts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Origin {
    pub time: DateTime<Utc>,
    pub point: TrackPoint,
    /// Accepted for forward compatibility but not consumed yet: every leg
    /// currently starts its bearing walk at zero (due north).
    pub initial_bearing_deg: i32,
}

impl JourneyLeg {
    pub fn validate(&self) -> Result<()> {
        if !self.duration_minutes.is_finite() || self.duration_minutes < 0.0 {
            return Err(GenerationError::InvalidConfiguration(format!(
                "leg duration must be a non-negative number of minutes, got {}",
                self.duration_minutes
            )));
        }
        if !self.speed_mps.is_finite() || self.speed_mps < 0.0 {
            return Err(GenerationError::InvalidConfiguration(format!(
                "leg speed must be a non-negative number of m/s, got {}",
                self.speed_mps
            )));
        }
        if self.turn_range_deg < 0 {
            return Err(GenerationError::InvalidConfiguration(format!(
                "leg turn range must be non-negative, got {}",
                self.turn_range_deg
            )));
        }
        Ok(())
    }
}

impl SamplingPolicy {
    pub fn validate(&self) -> Result<()> {
        if !self.average_seconds.is_finite() || self.average_seconds <= 0.0 {
            return Err(GenerationError::InvalidConfiguration(format!(
                "sampling average must be a positive number of seconds, got {}",
                self.average_seconds
            )));
        }
        if self.lower_bound_seconds < 0 {
            return Err(GenerationError::InvalidConfiguration(format!(
                "sampling lower bound must be non-negative, got {}",
                self.lower_bound_seconds
            )));
        }
        if self.upper_bound_seconds < self.lower_bound_seconds {
            return Err(GenerationError::InvalidConfiguration(format!(
                "sampling bounds are inverted: lower {} > upper {}",
                self.lower_bound_seconds, self.upper_bound_seconds
            )));
        }
        Ok(())
    }
}
