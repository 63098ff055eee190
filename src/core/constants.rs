// Physics (px, ms, px/s)
pub const GRAVITY: f64 = 1000.0;
pub const JUMP_FORCE: f64 = -500.0;
pub const MS_PER_SECOND: f64 = 1000.0;

// Bird rotation: velocity domain mapped onto a clamped angle range (radians)
pub const ROTATION_VELOCITY_DOMAIN: (f64, f64) = (-500.0, 500.0);
pub const ROTATION_ANGLE_RANGE: (f64, f64) = (-0.5, 0.5);

// Sprite sizes
pub const BIRD_WIDTH: f64 = 64.0;
pub const BIRD_HEIGHT: f64 = 48.0;
pub const PIPE_WIDTH: f64 = 104.0;
pub const PIPE_HEIGHT: f64 = 640.0;
pub const BASE_HEIGHT: f64 = 150.0;

/// Only the top half of the ground sprite is on screen.
pub const BASE_VISIBLE_HEIGHT: f64 = BASE_HEIGHT / 2.0;

// Pipe layout: top pipe y = offset - DISTANCE, bottom pipe y = height - DISTANCE + offset
pub const PIPE_GAP_DISTANCE: f64 = 320.0;
pub const GAP_OFFSET_RANGE: f64 = 200.0;

// Obstacle scheduling
pub const BASE_TRAVERSAL_MS: f64 = 3000.0;
pub const PIPE_EXIT_X: f64 = -150.0;
pub const PIPE_EXIT_THRESHOLD_X: f64 = -100.0;

// Difficulty ramp: score over [0, 20] speeds pipes up from 1x to 2x
pub const SPEED_SCORE_DOMAIN: (f64, f64) = (0.0, 20.0);
pub const SPEED_MULTIPLIER_RANGE: (f64, f64) = (1.0, 2.0);

// Collision forgiveness around obstacle rectangles
pub const HITBOX_NEAR_PAD: f64 = BIRD_HEIGHT / 2.0;
pub const HITBOX_BOTTOM_PAD: f64 = BIRD_HEIGHT / 3.0;

// Default viewport (portrait phone-ish)
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 400.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 850.0;

// Frame loop
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS
/// Frame gaps longer than this are treated as a suspension and skipped.
pub const MAX_FRAME_GAP_MS: f64 = 250.0;

// Files under ~/.flappy/
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "flappy.log";
