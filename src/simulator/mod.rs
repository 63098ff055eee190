//! Headless autopilot simulator.
//!
//! Plays seeded sessions through the same `process_tick`/`process_tap` calls
//! the terminal game uses, with a simple bot doing the tapping, and
//! aggregates score and survival statistics.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
