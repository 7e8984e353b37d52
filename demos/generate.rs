use anyhow::Result;
use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracksim_core::export_data;
use tracksim_core::journey_generator::JourneyGenerator;
use tracksim_core::journey_plan::{JourneyLeg, Origin, SamplingPolicy};
use tracksim_core::trajectory::TrackPoint;

const START_LAT: f64 = 47.3769;
const START_LNG: f64 = 8.5417;
const OUTPUT_DIR: &str = "./output";
const OUTPUT_FILE: &str = "trajectory.json";

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    let legs = vec![
        // stroll to the station
        JourneyLeg {
            duration_minutes: 5.0,
            speed_mps: 1.4,
            turn_range_deg: 25,
        },
        // tram ride across town
        JourneyLeg {
            duration_minutes: 20.0,
            speed_mps: 8.0,
            turn_range_deg: 10,
        },
        // winding walk along the river
        JourneyLeg {
            duration_minutes: 10.0,
            speed_mps: 1.2,
            turn_range_deg: 60,
        },
    ];
    let policy = SamplingPolicy {
        average_seconds: 30.0,
        lower_bound_seconds: 20,
        upper_bound_seconds: 40,
    };
    let origin = Origin {
        time: Utc.with_ymd_and_hms(2024, 5, 1, 6, 30, 0).unwrap(),
        point: TrackPoint {
            latitude: START_LAT,
            longitude: START_LNG,
        },
        initial_bearing_deg: 0,
    };

    let generator = JourneyGenerator::new(legs, policy, origin);
    let trajectory = generator.generate_with_rng(&mut StdRng::seed_from_u64(42))?;

    for record in trajectory.records().iter().take(5) {
        println!(
            "{} ({:.6}, {:.6})",
            record.timestamp, record.latitude, record.longitude
        );
    }
    println!("... {} points total", trajectory.len());

    export_data::write_json_file(&trajectory, OUTPUT_DIR, OUTPUT_FILE)?;
    println!("written to {OUTPUT_DIR}/{OUTPUT_FILE}");
    Ok(())
}
