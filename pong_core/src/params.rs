use std::f32::consts::{FRAC_PI_3, FRAC_PI_4};

/// Default tuning for the Pong simulation.
///
/// Distances are arena pixels, speeds are pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 75.0;
    pub const PADDLE_SPEED: f32 = 5.0;
    pub const PADDLE_WALL_MARGIN: f32 = 5.0; // Gap between paddle and side wall

    // Ball
    pub const BALL_RADIUS: f32 = 7.5;
    pub const BALL_SPEED_START: f32 = 1.0;
    pub const BALL_SPEED_INCREASE: f32 = 0.5; // Added on every paddle hit
    pub const BALL_SPEED_MAX: f32 = 10.0;

    // Angles (radians)
    pub const MAX_BOUNCE_ANGLE: f32 = FRAC_PI_3; // 60° off horizontal at the paddle tips
    pub const SERVE_HALF_ANGLE: f32 = FRAC_PI_4; // Serves fan out ±45°

    // Score
    pub const WIN_SCORE: u8 = 10;

    // Timing
    pub const TICK_PERIOD_MS: u64 = 10;

    // Below this horizontal travel per tick the predictor treats motion as vertical
    pub const PREDICTOR_MIN_DX: f32 = 1e-4;
}
