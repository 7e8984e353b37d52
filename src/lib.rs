#[macro_use]
extern crate log;

pub mod error;
pub mod export_data;
pub mod journey_generator;
pub mod journey_plan;
pub mod leg_sampler;
pub mod projection;
pub mod trajectory;
