use crate::{Arena, Ball, Events, GameRng, Score, Side};
use hecs::World;

/// Check if ball left the arena (scoring)
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Side whose goal line the ball crossed
        let conceded = if ball.pos.x <= 0.0 {
            Some(Side::Player)
        } else if ball.pos.x >= arena.width() {
            Some(Side::Opponent)
        } else {
            None
        };

        if let Some(side) = conceded.map(Side::opposite) {
            score.increment(side);
            events.scored(side);
            ball.reset(arena, rng);
            log::debug!(
                "{side:?} scored ({} - {})",
                score.player,
                score.opponent
            );
        }
    }
}
