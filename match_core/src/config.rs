use glam::Vec2;

use crate::error::GameError;
use crate::params::Params;

/// Rule and physics constants for one match
#[derive(Debug, Clone)]
pub struct Config {
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increment: f32,
    pub ball_velocity_initial: Vec2,
    pub tracking_damping: f32,
    pub max_deflection_angle: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            ball_velocity_initial: Params::BALL_VELOCITY_INITIAL,
            tracking_damping: Params::TRACKING_DAMPING,
            max_deflection_angle: Params::MAX_DEFLECTION_ANGLE,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if !self.ball_radius.is_finite() || self.ball_radius <= 0.0 {
            return Err(GameError::config("ball radius must be positive"));
        }
        if !self.ball_speed_initial.is_finite() || self.ball_speed_initial <= 0.0 {
            return Err(GameError::config("initial ball speed must be positive"));
        }
        if !self.ball_speed_increment.is_finite() || self.ball_speed_increment < 0.0 {
            return Err(GameError::config("speed increment must be non-negative"));
        }
        if !self.tracking_damping.is_finite()
            || self.tracking_damping <= 0.0
            || self.tracking_damping > 1.0
        {
            return Err(GameError::config("tracking damping must be in (0, 1]"));
        }
        if self.win_score == 0 {
            return Err(GameError::config("win score must be at least 1"));
        }
        Ok(())
    }
}
