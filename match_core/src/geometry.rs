use glam::Vec2;

use crate::components::Side;
use crate::error::GameError;

/// Width/height pair in viewport pixel units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn validate(&self, what: &str) -> Result<(), GameError> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(GameError::geometry(format!("{what} dimensions not finite")));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(GameError::geometry(format!(
                "{what} dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Position-and-size description handed to the render sink
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Axis-aligned bounding box used for overlap testing
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Aabb {
    /// Paddle box: (x, y) is the top-left corner
    pub fn for_paddle(pos: Vec2, size: Size) -> Self {
        Self {
            top: pos.y,
            bottom: pos.y + size.height,
            left: pos.x,
            right: pos.x + size.width,
        }
    }

    /// Ball box: radius extends from (x, y) in all four directions
    pub fn for_ball(pos: Vec2, radius: f32) -> Self {
        Self {
            top: pos.y - radius,
            bottom: pos.y + radius,
            left: pos.x - radius,
            right: pos.x + radius,
        }
    }

    /// Strict overlap test. Boxes that merely share a boundary do not
    /// overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right > other.left
            && self.top < other.bottom
            && self.left < other.right
            && self.bottom > other.top
    }
}

/// Current viewport and element dimensions, supplied by the host. Hosts
/// pass the current values into every tick, so a resized viewport takes
/// effect on the next step. Paddle x offsets are fixed from the geometry
/// given at construction and never move afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub viewport: Size,
    pub human_paddle: Size,
    pub computer_paddle: Size,
}

impl Geometry {
    pub fn new(viewport: Size, human_paddle: Size, computer_paddle: Size) -> Self {
        Self {
            viewport,
            human_paddle,
            computer_paddle,
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        self.viewport.validate("viewport")?;
        self.human_paddle.validate("human paddle")?;
        self.computer_paddle.validate("computer paddle")?;
        Ok(())
    }

    /// Vertical midline separating the two halves of the court
    pub fn midpoint_x(&self) -> f32 {
        self.viewport.width / 2.0
    }

    pub fn paddle_size(&self, side: Side) -> Size {
        match side {
            Side::Human => self.human_paddle,
            Side::Computer => self.computer_paddle,
        }
    }
}
