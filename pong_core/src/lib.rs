pub mod accuracy;
pub mod ai;
pub mod arena;
pub mod clock;
pub mod components;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod fsm;
pub mod params;
pub mod resources;
pub mod session;
pub mod sink;
pub mod systems;

pub use accuracy::*;
pub use arena::*;
pub use clock::*;
pub use components::*;
pub use config::*;
pub use difficulty::*;
pub use error::{ErrorKind, PongError};
pub use fsm::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use sink::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    arena: &Arena,
    difficulty: Difficulty,
    cursor: &CursorInput,
    score: &mut Score,
    events: &mut Events,
    predictions: &mut PredictionLog,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Apply latest pointer sample to the player paddle
    apply_cursor(world, cursor, arena);

    // 2. Predict and steer the opponent (only while the ball approaches it)
    drive_opponent(world, arena, difficulty, rng, predictions);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (walls, then player paddle, then opponent paddle)
    check_collisions(world, arena, events);

    // 5. Check scoring (ball exited arena)
    check_scoring(world, arena, score, events, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle) -> hecs::Entity {
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
