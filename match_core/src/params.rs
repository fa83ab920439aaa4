use glam::Vec2;

/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Ball
    pub const BALL_RADIUS: f32 = 25.0;
    pub const BALL_SPEED_INITIAL: f32 = 5.0;
    pub const BALL_SPEED_INCREMENT: f32 = 1.0;
    pub const BALL_VELOCITY_INITIAL: Vec2 = Vec2::new(5.0, 5.0);

    // Computer paddle tracking (proportional control constant)
    pub const TRACKING_DAMPING: f32 = 0.2;

    // Reflection
    pub const MAX_DEFLECTION_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    // Match
    pub const WIN_SCORE: u8 = 3;

    // Scheduling contract: hosts invoke one tick per period
    pub const TICK_PERIOD_MS: u64 = 25;
}
