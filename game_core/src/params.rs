/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 24.0; // Gap between goal line and paddle face
    pub const PADDLE_SPEED: f32 = 520.0; // pixels per second, shared by player and AI

    // Ball
    pub const BALL_RADIUS: f32 = 6.0;
    pub const BALL_SPEED_INITIAL: f32 = 420.0;
    pub const BALL_SERVE_ANGLE: f32 = 0.35; // vy = speed * U(-angle, angle)
    pub const BALL_SPIN: f32 = 220.0;
    pub const BALL_MAX_VY: f32 = 520.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.04; // Multiply vx on paddle hit
    pub const BALL_MAX_VX: f32 = 720.0;

    // AI
    pub const AI_REACTION_DELAY: f32 = 0.14; // seconds between target resamples
    pub const AI_ERROR_MARGIN: f32 = 32.0;
    pub const AI_DEADZONE: f32 = 1.0;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
