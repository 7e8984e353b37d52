use chrono::{DateTime, Utc};

/// Render format for record timestamps: second precision, no UTC offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrajectoryPoint {
    pub time: DateTime<Utc>,
    pub point: TrackPoint,
}

/// Finished product of a generation run. `points[0]` is always the journey
/// origin; every later point carries the cumulative time and position after
/// one more sampled movement.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    pub points: Vec<TrajectoryPoint>,
}

/// Flat per-sample view of a trajectory, timestamps already rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct GpsRecord {
    pub timestamp: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn records(&self) -> Vec<GpsRecord> {
        self.points
            .iter()
            .map(|p| GpsRecord {
                timestamp: p.time.format(TIMESTAMP_FORMAT).to_string(),
                latitude: p.point.latitude,
                longitude: p.point.longitude,
            })
            .collect()
    }
}
