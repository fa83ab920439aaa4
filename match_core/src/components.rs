use glam::Vec2;

use crate::config::Config;
use crate::geometry::Geometry;

/// Which player a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Name used in score displays and the game-over message
    pub fn label(&self) -> &'static str {
        match self {
            Side::Human => "player",
            Side::Computer => "computer",
        }
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32,
    pub radius: f32,
}

impl Ball {
    /// Spawn centered in the viewport with the initial serve velocity
    pub fn new(geometry: &Geometry, config: &Config) -> Self {
        Self {
            pos: Self::center(geometry, config.ball_radius),
            vel: config.ball_velocity_initial,
            speed: config.ball_speed_initial,
            radius: config.ball_radius,
        }
    }

    fn center(geometry: &Geometry, radius: f32) -> Vec2 {
        Vec2::new(
            geometry.viewport.width / 2.0 - radius,
            geometry.viewport.height / 2.0 - radius,
        )
    }

    /// Advance one tick worth of travel
    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    /// Bounce off the top/bottom of the viewport. Call exactly once per
    /// tick, after `update`.
    pub fn edges(&mut self, viewport_height: f32) {
        if self.pos.y < 0.0 || self.pos.y > viewport_height - self.radius {
            self.vel.y = -self.vel.y;
        }
    }

    /// Recenter after a score. Serves toward the side that did not just
    /// score by negating the pre-reset horizontal velocity; the vertical
    /// velocity is left alone.
    pub fn reset(&mut self, geometry: &Geometry, config: &Config) {
        let prior_vx = self.vel.x;
        self.pos = Self::center(geometry, self.radius);
        self.speed = config.ball_speed_initial;
        self.vel.x = -prior_vx;
    }
}

/// Paddle component. The x coordinate is set once at construction and
/// never changes; only y moves.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
}

impl Paddle {
    pub fn new(side: Side, geometry: &Geometry) -> Self {
        let size = geometry.paddle_size(side);
        let x = match side {
            Side::Human => 0.0,
            Side::Computer => geometry.viewport.width - size.width,
        };
        let y = geometry.viewport.height / 2.0 - size.height / 2.0;
        Self {
            side,
            pos: Vec2::new(x, y),
        }
    }
}

/// Marker for the paddle driven by pointer input
#[derive(Debug, Clone, Copy)]
pub struct PointerControlled;

/// Marker for the paddle that tracks the ball each tick
#[derive(Debug, Clone, Copy)]
pub struct Tracking;
