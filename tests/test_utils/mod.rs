use chrono::{TimeZone, Utc};
use tracksim_core::journey_plan::{Origin, SamplingPolicy};
use tracksim_core::trajectory::TrackPoint;

pub fn origin_at(latitude: f64, longitude: f64) -> Origin {
    Origin {
        time: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        point: TrackPoint {
            latitude,
            longitude,
        },
        initial_bearing_deg: 0,
    }
}

/// Policy whose average and both bounds collapse to one value, pinning every
/// sampled gap and making counts and timestamps exact.
pub fn fixed_gap_policy(seconds: i64) -> SamplingPolicy {
    SamplingPolicy {
        average_seconds: seconds as f64,
        lower_bound_seconds: seconds,
        upper_bound_seconds: seconds,
    }
}
