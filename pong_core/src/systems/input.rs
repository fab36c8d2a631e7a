use hecs::World;

use crate::{Arena, CursorInput, Paddle, Side};

/// Apply the latest cursor sample to the player's paddle
pub fn apply_cursor(world: &mut World, cursor: &CursorInput, arena: &Arena) {
    let Some(cursor_y) = cursor.latest() else {
        return; // No pointer movement yet
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.follow_cursor(cursor_y, arena);
        }
    }
}
