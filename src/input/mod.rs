mod config;

pub mod json_input;
pub mod toml_input;

pub use config::*;
pub use json_input::{Activity, ActivityType, DayPlan, TripPlan};
