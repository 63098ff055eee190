//! Flight state machine: tap handling and the per-frame tick.
//!
//! Idle --tap--> Playing --crash--> GameOver --tap--> Playing. Every
//! transition reports a [`FlightEvent`] exactly once, returned from the call
//! that caused it.

use super::collision;
use super::obstacles;
use super::physics;
use super::scoring;
use super::types::{Bird, CrashCause, FlightSession, GamePhase};
use rand::Rng;

/// Something that happened during a tap or tick.
#[derive(Debug, Clone, PartialEq)]
pub enum FlightEvent {
    /// First tap of the session.
    Started,
    /// Jump impulse applied.
    Flapped { velocity: f64 },
    /// The pipe pair crossed the bird.
    PipePassed { score: u32 },
    /// The pipe pair left the screen and came back with a new gap.
    PipeRecycled {
        gap_offset: f64,
        speed_multiplier: f64,
    },
    /// Entered GameOver.
    Crashed { cause: CrashCause, score: u32 },
    /// Left GameOver for a fresh round.
    Restarted,
}

/// Outcome of [`process_tick`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    pub events: Vec<FlightEvent>,
    /// False when the tick was skipped (not playing, or no usable dt).
    pub advanced: bool,
}

/// Handle a tap in whatever phase the session is in.
pub fn process_tap(session: &mut FlightSession) -> Vec<FlightEvent> {
    match session.phase {
        GamePhase::Idle => {
            session.phase = GamePhase::Playing;
            start_obstacles(session);
            let flap = flap(session);
            vec![FlightEvent::Started, flap]
        }
        GamePhase::Playing => vec![flap(session)],
        GamePhase::GameOver => {
            restart(session);
            vec![FlightEvent::Restarted]
        }
    }
}

/// Advance the simulation by `dt_ms`.
///
/// `None`, zero, negative or non-finite dt skips the tick entirely; that is
/// how the clock signals a first frame or a frame after a suspension.
pub fn process_tick<R: Rng>(
    session: &mut FlightSession,
    dt_ms: Option<f64>,
    rng: &mut R,
) -> TickResult {
    let mut result = TickResult::default();

    if !session.is_playing() {
        return result;
    }
    let dt_ms = match dt_ms {
        Some(dt) if dt.is_finite() && dt > 0.0 => dt,
        _ => return result,
    };

    result.advanced = true;
    session.tick_count += 1;
    session.elapsed_ms += dt_ms;

    physics::integrate(&mut session.bird, session.config.gravity, dt_ms);

    if let Some(step) = obstacles::advance(&mut session.pipes, dt_ms) {
        if scoring::crossed(step, session.bird.x) {
            let score = scoring::record_pass(&mut session.score);
            result.events.push(FlightEvent::PipePassed { score });
        }

        if obstacles::has_exited(step) {
            obstacles::recycle(
                &mut session.pipes,
                &session.viewport,
                session.config.base_traversal_ms,
                session.config.gap_offset_range,
                session.score,
                rng,
            );
            session.traversals += 1;
            result.events.push(FlightEvent::PipeRecycled {
                gap_offset: session.pipes.gap_offset,
                speed_multiplier: obstacles::speed_multiplier(session.score),
            });
        }
    }

    if let Some(cause) = collision::detect(&session.bird, &session.pipes, &session.viewport) {
        if let Some(event) = crash(session, cause) {
            result.events.push(event);
        }
    }

    result
}

/// Playing -> GameOver. Returns `None` if the session was not playing, so
/// repeated detections have no effect.
pub fn crash(session: &mut FlightSession, cause: CrashCause) -> Option<FlightEvent> {
    if !session.is_playing() {
        return None;
    }
    session.phase = GamePhase::GameOver;
    session.crash = Some(cause);
    obstacles::cancel_traversal(&mut session.pipes);
    Some(FlightEvent::Crashed {
        cause,
        score: session.score,
    })
}

/// Bird tilt for rendering.
pub fn bird_rotation(session: &FlightSession) -> f64 {
    physics::rotation_angle(session.bird.velocity)
}

/// Current pipe speed-up for rendering.
pub fn current_speed_multiplier(session: &FlightSession) -> f64 {
    obstacles::speed_multiplier(session.score)
}

fn flap(session: &mut FlightSession) -> FlightEvent {
    physics::apply_impulse(&mut session.bird, session.config.jump_force);
    FlightEvent::Flapped {
        velocity: session.bird.velocity,
    }
}

fn start_obstacles(session: &mut FlightSession) {
    obstacles::start_traversal(
        &mut session.pipes,
        &session.viewport,
        session.config.base_traversal_ms,
        session.score,
    );
}

/// GameOver -> Playing. The gap offset carries over; everything else resets.
fn restart(session: &mut FlightSession) {
    session.bird = Bird::new(&session.viewport);
    session.score = 0;
    session.crash = None;
    session.tick_count = 0;
    session.elapsed_ms = 0.0;
    session.phase = GamePhase::Playing;
    start_obstacles(session);
}
