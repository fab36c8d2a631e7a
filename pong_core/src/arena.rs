use glam::Vec2;

use crate::components::Side;
use crate::error::{PongError, Result};
use crate::params::Params;

/// Playfield geometry, fixed for the whole session.
///
/// Fields are private so an `Arena` can only be built through
/// [`Arena::new`], which rejects degenerate geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    width: f32,
    height: f32,
    paddle_width: f32,
    paddle_height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32, paddle_width: f32, paddle_height: f32) -> Result<Self> {
        for (name, value) in [
            ("width", width),
            ("height", height),
            ("paddle width", paddle_width),
            ("paddle height", paddle_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PongError::arena(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if paddle_height > height {
            return Err(PongError::arena(format!(
                "paddle height {paddle_height} exceeds arena height {height}"
            )));
        }
        if 2.0 * paddle_width >= width {
            return Err(PongError::arena(format!(
                "paddles of width {paddle_width} leave no room in arena width {width}"
            )));
        }

        Ok(Self {
            width,
            height,
            paddle_width,
            paddle_height,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn paddle_width(&self) -> f32 {
        self.paddle_width
    }

    pub fn paddle_height(&self) -> f32 {
        self.paddle_height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Largest valid paddle top edge
    pub fn max_paddle_y(&self) -> f32 {
        self.height - self.paddle_height
    }

    /// Paddle top edge that centers the paddle vertically
    pub fn centered_paddle_y(&self) -> f32 {
        self.height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp a paddle top edge to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    /// Left edge of the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => 0.0,
            Side::Opponent => self.width - self.paddle_width,
        }
    }

    /// X coordinate of the paddle face the ball bounces off
    pub fn paddle_face_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_width,
            Side::Opponent => self.width - self.paddle_width,
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: Params::ARENA_WIDTH,
            height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
        }
    }
}
