use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::trajectory::Trajectory;

/* Shapes a trajectory into the JSON document downstream GPS consumers read:

    {"gps-coordinates": {"dataset": [{"d": ..., "lat": ..., "long": ...}]}}

The field names and the 4-space indentation are part of the format. */

#[derive(Serialize, Debug)]
pub struct DatasetRecord {
    #[serde(rename = "d")]
    pub timestamp: String,
    pub lat: f64,
    pub long: f64,
}

#[derive(Serialize, Debug)]
pub struct CoordinateSet {
    pub dataset: Vec<DatasetRecord>,
}

#[derive(Serialize, Debug)]
pub struct GpsDocument {
    #[serde(rename = "gps-coordinates")]
    pub gps_coordinates: CoordinateSet,
}

pub fn trajectory_to_document(trajectory: &Trajectory) -> GpsDocument {
    let dataset = trajectory
        .records()
        .into_iter()
        .map(|record| DatasetRecord {
            timestamp: record.timestamp,
            lat: record.latitude,
            long: record.longitude,
        })
        .collect();
    GpsDocument {
        gps_coordinates: CoordinateSet { dataset },
    }
}

pub fn write_json<T: Write>(trajectory: &Trajectory, writer: T) -> Result<()> {
    let document = trajectory_to_document(trajectory);
    let mut serializer =
        serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"    "));
    document.serialize(&mut serializer)?;
    Ok(())
}

/// Writes the trajectory as `dir/file_name`, creating `dir` if needed.
pub fn write_json_file(trajectory: &Trajectory, dir: &str, file_name: &str) -> Result<()> {
    let full_path = Path::new(dir).join(file_name);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_json(trajectory, File::create(&full_path)?)?;
    info!(
        "trajectory written: {} ({} records)",
        full_path.display(),
        trajectory.len()
    );
    Ok(())
}
