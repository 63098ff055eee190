//! A bot that keeps the bird near the bottom of the current gap.

use crate::core::constants::HITBOX_NEAR_PAD;
use crate::flight::{FlightSession, GamePhase};

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Distance above the bottom pipe's padded edge at which to flap.
    pub tap_margin: f64,
}

impl Autopilot {
    pub fn new(tap_margin: f64) -> Self {
        Self { tap_margin }
    }

    /// Decide whether to tap this frame. Starts idle sessions, never restarts
    /// a crashed one.
    pub fn wants_tap(&self, session: &FlightSession) -> bool {
        match session.phase {
            GamePhase::Idle => true,
            GamePhase::GameOver => false,
            GamePhase::Playing => {
                let floor = session.pipes.bottom_y(&session.viewport)
                    - HITBOX_NEAR_PAD
                    - self.tap_margin;
                session.bird.velocity > 0.0 && session.bird.center().y >= floor
            }
        }
    }
}
