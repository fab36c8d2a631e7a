use crate::{Arena, Ball, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, arena: &Arena, events: &mut Events) {
    // Collect paddle data first so the ball can be borrowed mutably
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.reflect_off_walls(arena) {
            events.ball_hit_wall = true;
            log::trace!("Wall hit at ({:.1}, {:.1})", ball.pos.x, ball.pos.y);
        }

        // Player side first, then opponent
        for side in [Side::Player, Side::Opponent] {
            let Some(paddle) = paddles.iter().find(|p| p.side == side) else {
                continue;
            };
            if ball.reflect_off_paddle(paddle, arena) {
                events.paddle_hit(side);
                log::trace!(
                    "{side:?} paddle hit at y={:.1}, new velocity ({:.2}, {:.2})",
                    ball.pos.y,
                    ball.vel.x,
                    ball.vel.y
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup_world() -> (World, Arena, Events) {
        let mut world = World::new();
        let arena = Arena::default();
        create_paddle(&mut world, Paddle::new(Side::Player, 160.0));
        create_paddle(&mut world, Paddle::new(Side::Opponent, 160.0));
        (world, arena, Events::new())
    }

    fn spawn_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
        create_ball(world, Ball::new(pos, vel, 8.0, 5.0))
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, arena, mut events) = setup_world();
        let e = spawn_ball(&mut world, Vec2::new(300.0, -2.0), Vec2::new(5.0, -3.0));

        check_collisions(&mut world, &arena, &mut events);

        let ball = world.get::<&Ball>(e).unwrap();
        assert!(ball.vel.y > 0.0, "Ball should bounce down after hitting top wall");
        assert_eq!(ball.vel.x, 5.0, "X velocity should be unchanged");
        assert!(ball.pos.y >= 0.0, "Ball should be pushed out of wall");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_collides_with_player_paddle() {
        let (mut world, arena, mut events) = setup_world();
        let e = spawn_ball(&mut world, Vec2::new(16.0, 190.0), Vec2::new(-5.0, 1.0));

        check_collisions(&mut world, &arena, &mut events);

        let ball = world.get::<&Ball>(e).unwrap();
        assert!(ball.vel.x > 0.0, "Ball should bounce right off the player paddle");
        assert_eq!(ball.pos.x, 18.0);
        assert!(events.player_paddle_hit);
        assert!(!events.opponent_paddle_hit);
    }

    #[test]
    fn test_ball_collides_with_opponent_paddle() {
        let (mut world, arena, mut events) = setup_world();
        let e = spawn_ball(&mut world, Vec2::new(734.0, 200.0), Vec2::new(5.0, 5.0));
        let speed_before = world.get::<&Ball>(e).unwrap().speed();

        check_collisions(&mut world, &arena, &mut events);

        let ball = world.get::<&Ball>(e).unwrap();
        assert!(ball.vel.x < 0.0, "Ball should bounce left off the opponent paddle");
        assert_eq!(ball.vel.y, 0.0, "Center hit should flatten the trajectory");
        assert!((ball.speed() - speed_before).abs() < 1e-4);
        assert!(events.opponent_paddle_hit);
    }

    #[test]
    fn test_ball_misses_paddle() {
        let (mut world, arena, mut events) = setup_world();
        let e = spawn_ball(&mut world, Vec2::new(736.0, 300.0), Vec2::new(5.0, 1.0));

        check_collisions(&mut world, &arena, &mut events);

        let ball = world.get::<&Ball>(e).unwrap();
        assert_eq!(ball.vel, Vec2::new(5.0, 1.0));
        assert!(!events.opponent_paddle_hit);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, arena, mut events) = setup_world();

        check_collisions(&mut world, &arena, &mut events);

        assert_eq!(events, Events::default());
    }
}
