//! Flight simulation core.
//!
//! A bird falls under gravity, taps kick it upward, and a single pipe pair
//! scrolls in from the right with a randomized gap. Passing the pair scores
//! a point; touching a pipe, the ceiling or the ground ends the round. The
//! presentation layer drives it with [`process_tick`] and [`process_tap`]
//! and only reads the session back.

pub mod collision;
pub mod logic;
pub mod obstacles;
pub mod physics;
pub mod scoring;
pub mod types;

pub use logic::*;
pub use types::*;
