use crate::arena::Arena;

/// Move a paddle toward a predicted ball height.
///
/// The paddle aims to center itself on `predicted_y` and moves a full
/// `speed_cap` whenever it is off target, so it may overshoot and hover
/// around the target. Only the arena edges clamp the result.
pub fn step_toward(paddle_y: f32, predicted_y: f32, speed_cap: f32, arena: &Arena) -> f32 {
    let target_y = predicted_y - arena.paddle_height() / 2.0;
    let next = if paddle_y < target_y {
        paddle_y + speed_cap
    } else if paddle_y > target_y {
        paddle_y - speed_cap
    } else {
        paddle_y
    };
    arena.clamp_paddle_y(next)
}
