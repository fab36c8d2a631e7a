use rand::Rng;

use crate::accuracy::PredictionLog;
use crate::arena::Arena;
use crate::components::Ball;
use crate::difficulty::Difficulty;
use crate::params::Params;
use crate::resources::GameRng;

/// Result of one prediction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Noise-free arrival height from the forward simulation
    pub forecast_y: f32,
    /// Forecast with difficulty noise applied; what the AI acts on
    pub predicted_y: f32,
}

impl Prediction {
    pub fn noise(&self) -> f32 {
        self.predicted_y - self.forecast_y
    }
}

/// Forward-simulate a copy of the ball until it reaches the opponent's
/// paddle plane and return its height there.
///
/// Only wall bounces are modelled; paddles are ignored. The ball itself is
/// never touched. A ball that is not moving right is already as close as it
/// will get, so its current height is returned.
pub fn forecast_arrival_y(ball: &Ball, arena: &Arena) -> f32 {
    let target_x = arena.width() - arena.paddle_width();
    let mut x = ball.pos.x;
    let mut y = ball.pos.y;
    let mut dy = ball.vel.y;

    if ball.vel.x <= 0.0 {
        return y;
    }

    let mut steps = 0;
    while x < target_x && steps < Params::MAX_FORECAST_STEPS {
        x += ball.vel.x;
        y += dy;

        if y <= 0.0 || y >= arena.height() {
            dy = -dy;
        }
        steps += 1;
    }

    y
}

/// Forecast the arrival height and perturb it by difficulty-scaled noise
/// drawn uniformly from `[-0.5, 0.5) * height * uncertainty`.
pub fn predict(ball: &Ball, arena: &Arena, difficulty: Difficulty, rng: &mut GameRng) -> Prediction {
    let forecast_y = forecast_arrival_y(ball, arena);
    let uncertainty = difficulty.profile().uncertainty;
    let noise = (rng.0.gen::<f32>() - 0.5) * arena.height() * uncertainty;

    Prediction {
        forecast_y,
        predicted_y: forecast_y + noise,
    }
}

/// Predict, then log the prediction against the ball's current height.
///
/// The logged comparator is where the ball is now, not where it ends up,
/// so the running accuracy measures short-horizon tracking.
pub fn predict_and_record(
    ball: &Ball,
    arena: &Arena,
    difficulty: Difficulty,
    rng: &mut GameRng,
    log: &mut PredictionLog,
) -> Prediction {
    let prediction = predict(ball, arena, difficulty, rng);
    log.push(prediction.predicted_y, ball.pos.y);
    prediction
}
