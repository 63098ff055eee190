//! Flight session data structures.
//!
//! All coordinates are device-independent pixels with the origin at the
//! top-left of the viewport; y grows downward.

use crate::core::config::FlightConfig;
use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// Screen size, read once when a session is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Bird y at session start and after a restart.
    pub fn bird_start_y(&self) -> f64 {
        self.height / 3.0
    }

    /// The bird's fixed column.
    pub fn bird_x(&self) -> f64 {
        self.width / 4.0
    }

    /// Lowest bird y before it counts as hitting the ground.
    pub fn ground_line(&self) -> f64 {
        self.height - BASE_HEIGHT + BIRD_HEIGHT / 2.0
    }

    /// Top edge of the drawn ground band.
    pub fn ground_top(&self) -> f64 {
        self.height - BASE_VISIBLE_HEIGHT
    }
}

/// Game phase. Only the transitions in `logic` move between these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first tap.
    Idle,
    Playing,
    /// Crashed; the next tap restarts.
    GameOver,
}

/// What the bird hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrashCause {
    Ceiling,
    Ground,
    Pipe,
}

impl CrashCause {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Ceiling => "flew into the sky",
            Self::Ground => "hit the ground",
            Self::Pipe => "smacked into a pipe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned rectangle, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// The player's bird. `x` never changes within a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Top edge of the sprite.
    pub y: f64,
    /// Vertical velocity in px/s (positive = downward).
    pub velocity: f64,
    /// Left edge of the sprite.
    pub x: f64,
}

impl Bird {
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            y: viewport.bird_start_y(),
            velocity: 0.0,
            x: viewport.bird_x(),
        }
    }

    /// Visual center, used as the collision point.
    pub fn center(&self) -> Point {
        Point {
            x: self.x + BIRD_WIDTH / 2.0,
            y: self.y + BIRD_HEIGHT / 2.0,
        }
    }
}

/// A top/bottom pipe pair sharing one horizontal position.
#[derive(Debug, Clone, PartialEq)]
pub struct PipePair {
    /// Left edge of both pipes.
    pub x: f64,
    /// Vertical displacement of the gap, in `[-range, range)`.
    pub gap_offset: f64,
    /// Leftward speed in px/s, fixed when the traversal starts.
    pub speed: f64,
    /// False when the traversal has not started or was cancelled.
    pub in_flight: bool,
}

impl PipePair {
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            x: viewport.width,
            gap_offset: 0.0,
            speed: 0.0,
            in_flight: false,
        }
    }

    pub fn top_y(&self) -> f64 {
        self.gap_offset - PIPE_GAP_DISTANCE
    }

    pub fn bottom_y(&self, viewport: &Viewport) -> f64 {
        viewport.height - PIPE_GAP_DISTANCE + self.gap_offset
    }

    /// Vertical middle of the opening between the two pipes.
    pub fn gap_center(&self, viewport: &Viewport) -> f64 {
        (self.top_y() + PIPE_HEIGHT + self.bottom_y(viewport)) / 2.0
    }

    /// Collision rectangles, bottom pipe first. Always derived, never stored.
    pub fn obstacles(&self, viewport: &Viewport) -> [Rect; 2] {
        [
            Rect {
                x: self.x,
                y: self.bottom_y(viewport),
                w: PIPE_WIDTH,
                h: PIPE_HEIGHT,
            },
            Rect {
                x: self.x,
                y: self.top_y(),
                w: PIPE_WIDTH,
                h: PIPE_HEIGHT,
            },
        ]
    }
}

/// One play session: everything the simulation mutates.
#[derive(Debug, Clone)]
pub struct FlightSession {
    pub viewport: Viewport,
    pub config: FlightConfig,
    pub phase: GamePhase,
    pub bird: Bird,
    pub pipes: PipePair,
    /// Pipe pairs passed since the last (re)start.
    pub score: u32,
    /// Set on entering GameOver, cleared on restart.
    pub crash: Option<CrashCause>,
    /// Physics-bearing ticks since the last (re)start.
    pub tick_count: u64,
    /// Simulated ms since the last (re)start.
    pub elapsed_ms: f64,
    /// Completed traversals since the session was created.
    pub traversals: u64,
}

impl FlightSession {
    /// Create an idle session sized from the config's viewport.
    pub fn new(config: FlightConfig) -> Self {
        let viewport = Viewport::new(config.viewport_width, config.viewport_height);
        Self::with_viewport(config, viewport)
    }

    pub fn with_viewport(config: FlightConfig, viewport: Viewport) -> Self {
        Self {
            bird: Bird::new(&viewport),
            pipes: PipePair::new(&viewport),
            viewport,
            config,
            phase: GamePhase::Idle,
            score: 0,
            crash: None,
            tick_count: 0,
            elapsed_ms: 0.0,
            traversals: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn obstacles(&self) -> [Rect; 2] {
        self.pipes.obstacles(&self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(400.0, 850.0)
    }

    #[test]
    fn test_new_session_defaults() {
        let session = FlightSession::new(FlightConfig::default());
        assert_eq!(session.phase, GamePhase::Idle);
        assert_eq!(session.score, 0);
        assert!(session.crash.is_none());
        assert!(!session.pipes.in_flight);
        assert_eq!(session.bird.velocity, 0.0);
    }

    #[test]
    fn test_bird_seeded_from_viewport() {
        let bird = Bird::new(&Viewport::new(400.0, 900.0));
        assert_eq!(bird.x, 100.0);
        assert_eq!(bird.y, 300.0);
    }

    #[test]
    fn test_bird_center() {
        let bird = Bird {
            y: 100.0,
            velocity: 0.0,
            x: 100.0,
        };
        assert_eq!(bird.center(), Point { x: 132.0, y: 124.0 });
    }

    #[test]
    fn test_pipe_pair_offsets() {
        let vp = viewport();
        let mut pipes = PipePair::new(&vp);
        pipes.gap_offset = 50.0;
        assert_eq!(pipes.top_y(), -270.0);
        assert_eq!(pipes.bottom_y(&vp), 580.0);
    }

    #[test]
    fn test_obstacles_share_x() {
        let vp = viewport();
        let mut pipes = PipePair::new(&vp);
        pipes.x = 123.0;
        let [bottom, top] = pipes.obstacles(&vp);
        assert_eq!(bottom.x, top.x);
        assert_eq!(bottom.x, 123.0);
        assert_eq!(bottom.w, PIPE_WIDTH);
        assert_eq!(top.h, PIPE_HEIGHT);
        assert!(top.y < bottom.y);
    }

    #[test]
    fn test_gap_center_tracks_offset() {
        let vp = viewport();
        let mut pipes = PipePair::new(&vp);
        assert_eq!(pipes.gap_center(&vp), vp.height / 2.0);
        pipes.gap_offset = -120.0;
        assert_eq!(pipes.gap_center(&vp), vp.height / 2.0 - 120.0);
    }

    #[test]
    fn test_ground_line() {
        assert_eq!(viewport().ground_line(), 850.0 - 150.0 + 24.0);
    }
}
