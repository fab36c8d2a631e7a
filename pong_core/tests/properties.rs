use std::f32::consts::FRAC_PI_4;

use glam::Vec2;
use pong_core::ai::{predict, step_toward};
use pong_core::*;
use proptest::prelude::*;

fn arena() -> Arena {
    Arena::default()
}

fn speed_close(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-4 * a.max(1.0)
}

proptest! {
    /// Property: wall and paddle reflections only change direction
    #[test]
    fn prop_reflections_conserve_speed(
        x in 0.0f32..750.0,
        y in -10.0f32..410.0,
        vx in prop_oneof![-12.0f32..-0.5, 0.5f32..12.0],
        vy in -12.0f32..12.0,
        paddle_y in 0.0f32..320.0,
    ) {
        let arena = arena();
        let mut ball = Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), 8.0, 5.0);
        let speed = ball.speed();

        ball.reflect_off_walls(&arena);
        prop_assert!(speed_close(ball.speed(), speed));

        for side in [Side::Player, Side::Opponent] {
            ball.reflect_off_paddle(&Paddle::new(side, paddle_y), &arena);
            prop_assert!(speed_close(ball.speed(), speed));
        }
    }

    /// Property: center hits fly flat, edge hits leave at 45 degrees
    #[test]
    fn prop_deflection_symmetry(
        paddle_y in 0.0f32..320.0,
        speed in 1.0f32..12.0,
    ) {
        let arena = arena();
        let paddle = Paddle::new(Side::Opponent, paddle_y);

        let mut center = Ball::new(Vec2::new(736.0, paddle_y + 40.0), Vec2::new(speed, 0.0), 8.0, 5.0);
        prop_assert!(center.reflect_off_paddle(&paddle, &arena));
        prop_assert!(center.vel.y.abs() < 1e-3);
        prop_assert!(center.vel.x < 0.0);

        let mut top = Ball::new(Vec2::new(736.0, paddle_y), Vec2::new(speed, 0.0), 8.0, 5.0);
        prop_assert!(top.reflect_off_paddle(&paddle, &arena));
        let angle = (top.vel.y / top.speed()).abs().asin();
        prop_assert!((angle - FRAC_PI_4).abs() < 1e-3);

        let mut bottom = Ball::new(Vec2::new(736.0, paddle_y + 80.0), Vec2::new(speed, 0.0), 8.0, 5.0);
        prop_assert!(bottom.reflect_off_paddle(&paddle, &arena));
        prop_assert!((top.vel.y + bottom.vel.y).abs() < 1e-3, "Edges should mirror each other");
    }

    /// Property: accuracy is a percentage no matter how wild the predictions
    #[test]
    fn prop_accuracy_bounded(
        pairs in prop::collection::vec((-1.0e6f32..1.0e6, -1.0e6f32..1.0e6), 0..64),
    ) {
        let mut log = PredictionLog::new();
        for (predicted, actual) in pairs {
            log.push(predicted, actual);
        }
        let accuracy = log.accuracy(400.0);
        prop_assert!((0.0..=100.0).contains(&accuracy));
        prop_assert!(log.accuracy_percent(400.0) <= 100);
    }

    /// Property: with the same seed, harder presets never add more noise
    #[test]
    fn prop_noise_monotonic_in_difficulty(
        seed in any::<u64>(),
        y in 0.0f32..400.0,
        vy in -6.0f32..6.0,
    ) {
        let arena = arena();
        let ball = Ball::new(Vec2::new(375.0, y), Vec2::new(5.0, vy), 8.0, 5.0);
        let noise = |difficulty| predict(&ball, &arena, difficulty, &mut GameRng::new(seed)).noise().abs();

        prop_assert!(noise(Difficulty::Hard) <= noise(Difficulty::Medium));
        prop_assert!(noise(Difficulty::Medium) <= noise(Difficulty::Easy));
    }

    /// Property: the controller never exceeds its cap or leaves the arena
    #[test]
    fn prop_controller_step_bounded(
        paddle_y in 0.0f32..320.0,
        predicted in -500.0f32..900.0,
        cap in prop::sample::select(vec![3.0f32, 5.0, 7.0]),
    ) {
        let arena = arena();
        let next = step_toward(paddle_y, predicted, cap, &arena);
        prop_assert!((next - paddle_y).abs() <= cap + 1e-4);
        prop_assert!((0.0..=arena.max_paddle_y()).contains(&next));
    }

    /// Property: paddles and ball stay inside the arena every tick
    #[test]
    fn prop_session_bounds(
        seed in any::<u64>(),
        cursors in prop::collection::vec(-200.0f32..600.0, 1..40),
        difficulty in prop::sample::select(Difficulty::ALL.to_vec()),
    ) {
        let config = Config { seed, ..Config::default() };
        let mut session = MatchSession::new(&config, Box::new(NullSink), Box::new(NullSink)).unwrap();
        session.set_difficulty_profile(difficulty);
        session.start();

        for tick in 0..600 {
            session.submit_cursor(cursors[tick % cursors.len()]);
            session.tick();

            let arena = *session.arena();
            let ball = session.ball();
            prop_assert!(ball.pos.x >= 0.0 && ball.pos.x <= arena.width());
            prop_assert!(ball.pos.y >= 0.0 && ball.pos.y <= arena.height());
            for side in [Side::Player, Side::Opponent] {
                let y = session.paddle(side).y;
                prop_assert!(y >= 0.0 && y <= arena.max_paddle_y());
            }
        }
    }
}
