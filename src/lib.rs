//! Flappy - terminal Flappy Bird on a deterministic flight simulation.
//!
//! This module exposes the simulation and helpers for testing, the headless
//! simulator and the terminal front-end.

pub mod build_info;
pub mod clock;
pub mod core;
pub mod flight;
pub mod input;
pub mod simulator;
pub mod ui;
pub mod utils;

pub use crate::core::{FlightConfig, GRAVITY, JUMP_FORCE};
pub use crate::flight::{
    process_tap, process_tick, CrashCause, FlightEvent, FlightSession, GamePhase, TickResult,
};
