//! Scripted stand-in for the human's pointer.

use pong_core::{Arena, Ball, Side};

/// Cursor that chases the ball at a limited speed.
///
/// While the ball approaches the player it tracks the ball's height;
/// otherwise it drifts back to the middle. The speed limit makes it miss
/// steep returns, so matches produce points on both sides.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedPlayer {
    cursor_y: f32,
    speed: f32,
    home_y: f32,
}

impl ScriptedPlayer {
    pub fn new(speed: f32, arena: &Arena) -> Self {
        Self {
            cursor_y: arena.height() / 2.0,
            speed: speed.max(0.0),
            home_y: arena.height() / 2.0,
        }
    }

    /// Move the cursor for one display frame and return the new sample
    pub fn follow(&mut self, ball: &Ball) -> f32 {
        let target = if ball.heading_toward(Side::Player) {
            ball.pos.y
        } else {
            self.home_y
        };
        self.cursor_y += (target - self.cursor_y).clamp(-self.speed, self.speed);
        self.cursor_y
    }
}
