//! Constants and tuning configuration shared by the simulation and front-ends.

pub mod config;
pub mod constants;

pub use config::{ConfigError, FlightConfig};
pub use constants::*;
