use glam::Vec2;
use rand::Rng;

use crate::arena::Arena;
use crate::params::Params;
use crate::resources::GameRng;

/// Which end of the arena a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left paddle, driven by the cursor
    Player,
    /// Right paddle, driven by the AI controller
    Opponent,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Horizontal direction a ball travels when heading toward this side
    pub fn incoming_sign(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Opponent => 1.0,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge, always within [0, height - paddle_height]
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Paddle vertically centered in the arena
    pub fn centered(side: Side, arena: &Arena) -> Self {
        Self::new(side, arena.centered_paddle_y())
    }

    /// Center the paddle on a cursor sample, clamped to the arena
    pub fn follow_cursor(&mut self, cursor_y: f32, arena: &Arena) {
        self.y = arena.clamp_paddle_y(cursor_y - arena.paddle_height() / 2.0);
    }

    /// Whether a y coordinate lies along the paddle's face (edges inclusive)
    pub fn spans(&self, y: f32, arena: &Arena) -> bool {
        y >= self.y && y <= self.y + arena.paddle_height()
    }
}

/// Ball component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // Pixels per tick
    pub radius: f32,
    pub base_speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, base_speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            base_speed,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Whether the ball is travelling toward the given side
    pub fn heading_toward(&self, side: Side) -> bool {
        self.vel.x * side.incoming_sign() > 0.0
    }

    /// Apply one tick of motion
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Bounce off the top or bottom wall. Returns true on a hit.
    pub fn reflect_off_walls(&mut self, arena: &Arena) -> bool {
        if self.pos.y <= 0.0 || self.pos.y >= arena.height() {
            self.vel.y = -self.vel.y;
            // Keep the ball inside so it cannot stick behind a wall
            self.pos.y = self.pos.y.clamp(0.0, arena.height());
            true
        } else {
            false
        }
    }

    /// Whether the ball's leading edge has reached the paddle's face
    /// while the ball is level with the paddle.
    pub fn touches_paddle(&self, paddle: &Paddle, arena: &Arena) -> bool {
        if !self.heading_toward(paddle.side) {
            return false;
        }
        let face = arena.paddle_face_x(paddle.side);
        let crossed = match paddle.side {
            Side::Player => self.pos.x - self.radius <= face,
            Side::Opponent => self.pos.x + self.radius >= face,
        };
        crossed && paddle.spans(self.pos.y, arena)
    }

    /// Bounce off a paddle if the ball is touching it. Returns true on a hit.
    pub fn reflect_off_paddle(&mut self, paddle: &Paddle, arena: &Arena) -> bool {
        if !self.touches_paddle(paddle, arena) {
            return false;
        }

        self.deflect(paddle.y, arena);

        // Rest the leading edge on the paddle face
        let face = arena.paddle_face_x(paddle.side);
        self.pos.x = match paddle.side {
            Side::Player => face + self.radius,
            Side::Opponent => face - self.radius,
        };
        true
    }

    /// Redirect the ball according to where it struck the paddle.
    ///
    /// The offset from the paddle center maps linearly onto a bounce angle
    /// in `[-π/4, π/4]`; speed is preserved and the horizontal direction
    /// flips.
    pub fn deflect(&mut self, paddle_y: f32, arena: &Arena) {
        let half_height = arena.paddle_height() / 2.0;
        let relative_intersect = (paddle_y + half_height) - self.pos.y;
        let normalized = (relative_intersect / half_height).clamp(-1.0, 1.0);
        let bounce_angle = normalized * Params::BALL_MAX_BOUNCE_ANGLE;

        let speed = self.speed();
        let direction = if self.vel.x > 0.0 { -1.0 } else { 1.0 };

        self.vel = Vec2::new(
            direction * speed * bounce_angle.cos(),
            -speed * bounce_angle.sin(),
        );
    }

    /// Respawn at the arena center with a fresh random velocity
    pub fn reset(&mut self, arena: &Arena, rng: &mut GameRng) {
        self.pos = arena.center();

        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let vy = rng.0.gen_range(-self.base_speed..=self.base_speed);
        self.vel = Vec2::new(dir * self.base_speed, vy);
    }
}
