//! Vertical motion of the bird.

use super::types::Bird;
use crate::core::constants::{MS_PER_SECOND, ROTATION_ANGLE_RANGE, ROTATION_VELOCITY_DOMAIN};

/// Map `value` linearly from `domain` onto `range`, clamping at the ends.
pub fn interpolate_clamped(value: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    if d1 == d0 {
        return r0;
    }
    let t = ((value - d0) / (d1 - d0)).clamp(0.0, 1.0);
    r0 + (r1 - r0) * t
}

/// Explicit Euler step. Position advances with the velocity from before
/// gravity is applied.
pub fn integrate(bird: &mut Bird, gravity: f64, dt_ms: f64) {
    bird.y += bird.velocity * dt_ms / MS_PER_SECOND;
    bird.velocity += gravity * dt_ms / MS_PER_SECOND;
}

/// Instantaneous flap. Overrides whatever velocity the bird had.
pub fn apply_impulse(bird: &mut Bird, jump_force: f64) {
    bird.velocity = jump_force;
}

/// Sprite tilt in radians, nose-up while rising and nose-down while falling.
pub fn rotation_angle(velocity: f64) -> f64 {
    interpolate_clamped(velocity, ROTATION_VELOCITY_DOMAIN, ROTATION_ANGLE_RANGE)
}
