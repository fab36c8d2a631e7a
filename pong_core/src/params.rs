/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels)
    pub const ARENA_WIDTH: f32 = 750.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_BASE_SPEED: f32 = 5.0; // pixels per tick
    pub const BALL_MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    // Predictor
    pub const MAX_FORECAST_STEPS: u32 = 10_000; // Guard for near-vertical trajectories

    // Frame clock
    pub const TICK_HZ: f32 = 60.0;
    pub const FIXED_DT: f32 = 1.0 / Self::TICK_HZ;
    pub const MAX_DT: f32 = 0.25; // Clamp to prevent large jumps
    pub const MAX_SUBSTEPS: u32 = 8;

    // Center guide line
    pub const GUIDE_DASH: f32 = 5.0;
    pub const GUIDE_GAP: f32 = 15.0;

    pub const DEFAULT_SEED: u64 = 12345;
}
