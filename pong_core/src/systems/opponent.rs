use hecs::World;

use crate::ai::{predict_and_record, step_toward, Prediction};
use crate::{Arena, Ball, Difficulty, GameRng, Paddle, PredictionLog, Side};

/// Steer the opponent paddle toward the predicted arrival point.
///
/// Only acts while the ball travels toward the opponent; otherwise the
/// paddle holds position and no prediction is logged.
pub fn drive_opponent(
    world: &mut World,
    arena: &Arena,
    difficulty: Difficulty,
    rng: &mut GameRng,
    predictions: &mut PredictionLog,
) -> Option<Prediction> {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball)?;

    if !ball.heading_toward(Side::Opponent) {
        return None;
    }

    let prediction = predict_and_record(&ball, arena, difficulty, rng, predictions);
    let speed_cap = difficulty.profile().paddle_speed_cap;

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Opponent {
            paddle.y = step_toward(paddle.y, prediction.predicted_y, speed_cap, arena);
        }
    }

    Some(prediction)
}
