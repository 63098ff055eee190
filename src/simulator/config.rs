//! Simulation configuration.

use crate::core::config::FlightConfig;
use crate::core::constants::REALTIME_FRAME_MS;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to play
    pub num_runs: u32,

    /// Seed of the first run; run `i` uses `seed + i` (None = random)
    pub seed: Option<u64>,

    /// Frames per run before giving up
    pub max_ticks_per_run: u64,

    /// Simulated frame length in ms
    pub frame_ms: f64,

    /// How far above the bottom pipe's hitbox the bot lets the bird sink
    /// before it taps
    pub tap_margin: f64,

    /// Physics and viewport tuning shared with the game
    pub flight: FlightConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_ticks_per_run: 60 * 60 * 10, // ten minutes at 60 fps
            frame_ms: REALTIME_FRAME_MS as f64,
            tap_margin: 30.0,
            flight: FlightConfig::default(),
        }
    }
}

impl SimConfig {
    /// Small, seeded config for quick checks
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 10,
            seed: Some(seed),
            max_ticks_per_run: 60 * 60,
            ..Default::default()
        }
    }
}
