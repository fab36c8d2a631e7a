use glam::Vec2;
use serde::Deserialize;

use crate::arena::Arena;
use crate::components::Ball;
use crate::difficulty::Difficulty;
use crate::error::{PongError, Result};
use crate::params::Params;

/// Session configuration.
///
/// Every field has a default, so a partial JSON document is enough.
/// Unknown difficulty labels fail deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    pub ball_base_speed: f32,
    pub difficulty: Difficulty,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
            ball_base_speed: Params::BALL_BASE_SPEED,
            difficulty: Difficulty::default(),
            seed: Params::DEFAULT_SEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the arena, failing fast on degenerate geometry
    pub fn arena(&self) -> Result<Arena> {
        Arena::new(
            self.arena_width,
            self.arena_height,
            self.paddle_width,
            self.paddle_height,
        )
    }

    /// Ball at the arena center with the opening velocity `(speed, speed)`
    pub fn opening_ball(&self, arena: &Arena) -> Result<Ball> {
        if !self.ball_radius.is_finite() || self.ball_radius <= 0.0 {
            return Err(PongError::ball(format!(
                "radius must be a positive number, got {}",
                self.ball_radius
            )));
        }
        if !self.ball_base_speed.is_finite() || self.ball_base_speed <= 0.0 {
            return Err(PongError::ball(format!(
                "base speed must be a positive number, got {}",
                self.ball_base_speed
            )));
        }
        if self.ball_base_speed >= arena.width() / 2.0 {
            return Err(PongError::ball(format!(
                "base speed {} would cross half the arena in one tick",
                self.ball_base_speed
            )));
        }

        let speed = self.ball_base_speed;
        Ok(Ball::new(
            arena.center(),
            Vec2::new(speed, speed),
            self.ball_radius,
            speed,
        ))
    }

    /// Check everything a session needs from this config
    pub fn validate(&self) -> Result<()> {
        let arena = self.arena()?;
        self.opening_ball(&arena)?;
        Ok(())
    }
}
