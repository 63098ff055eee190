//! Frame clock feeding elapsed milliseconds into the simulation.

use crate::core::constants::MAX_FRAME_GAP_MS;
use std::time::Instant;

/// Measures the time between frames.
///
/// Yields `None` for the first frame and for any gap longer than
/// `max_gap_ms` (terminal suspended, window dragged, debugger pause), so the
/// simulation skips instead of integrating one huge step.
#[derive(Debug)]
pub struct FrameClock {
    last_frame: Option<Instant>,
    max_gap_ms: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_GAP_MS)
    }
}

impl FrameClock {
    pub fn new(max_gap_ms: f64) -> Self {
        Self {
            last_frame: None,
            max_gap_ms,
        }
    }

    pub fn tick(&mut self) -> Option<f64> {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Option<f64> {
        let previous = self.last_frame.replace(now)?;
        let dt_ms = now.saturating_duration_since(previous).as_secs_f64() * 1000.0;
        if dt_ms > self.max_gap_ms {
            None
        } else {
            Some(dt_ms)
        }
    }

    /// Forget the previous frame; the next tick is treated as a first frame.
    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}
