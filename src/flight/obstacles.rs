//! Pipe traversal: kinematic scrolling, exit detection and recycling.

use super::physics::interpolate_clamped;
use super::types::{PipePair, Viewport};
use crate::core::constants::*;
use rand::Rng;

/// Pipe position before and after one advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeStep {
    pub previous_x: f64,
    pub current_x: f64,
}

/// Score-driven speed-up, 1x at score 0 up to 2x at score 20 and beyond.
pub fn speed_multiplier(score: u32) -> f64 {
    interpolate_clamped(score as f64, SPEED_SCORE_DOMAIN, SPEED_MULTIPLIER_RANGE)
}

/// Leftward speed in px/s for a traversal from the right edge to the exit
/// point lasting `base_traversal_ms / multiplier`.
pub fn traversal_speed(viewport: &Viewport, base_traversal_ms: f64, multiplier: f64) -> f64 {
    let distance = viewport.width - PIPE_EXIT_X;
    let duration_s = base_traversal_ms / multiplier / MS_PER_SECOND;
    distance / duration_s
}

/// Place the pair at the right edge and start it moving.
pub fn start_traversal(
    pipes: &mut PipePair,
    viewport: &Viewport,
    base_traversal_ms: f64,
    score: u32,
) {
    pipes.x = viewport.width;
    pipes.speed = traversal_speed(viewport, base_traversal_ms, speed_multiplier(score));
    pipes.in_flight = true;
}

/// Freeze the pair where it is.
pub fn cancel_traversal(pipes: &mut PipePair) {
    pipes.in_flight = false;
}

/// Move the pair left by `speed * dt`. Returns `None` when no traversal is
/// in flight.
pub fn advance(pipes: &mut PipePair, dt_ms: f64) -> Option<PipeStep> {
    if !pipes.in_flight {
        return None;
    }
    let previous_x = pipes.x;
    pipes.x -= pipes.speed * dt_ms / MS_PER_SECOND;
    Some(PipeStep {
        previous_x,
        current_x: pipes.x,
    })
}

/// True on the one step where the pair crosses the "just exited" line.
pub fn has_exited(step: PipeStep) -> bool {
    step.previous_x > PIPE_EXIT_THRESHOLD_X && step.current_x <= PIPE_EXIT_THRESHOLD_X
}

/// Draw a fresh gap offset in `[-range, range)`.
pub fn random_gap_offset<R: Rng>(rng: &mut R, range: f64) -> f64 {
    if range <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-range..range)
}

/// Re-randomize the gap and send the pair back to the right edge.
pub fn recycle<R: Rng>(
    pipes: &mut PipePair,
    viewport: &Viewport,
    base_traversal_ms: f64,
    gap_offset_range: f64,
    score: u32,
    rng: &mut R,
) {
    pipes.gap_offset = random_gap_offset(rng, gap_offset_range);
    cancel_traversal(pipes);
    start_traversal(pipes, viewport, base_traversal_ms, score);
}
