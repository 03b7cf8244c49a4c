pub mod arena;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod host;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use host::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one deterministic simulation tick over every ball in roster order.
///
/// Paddles are driven inside the per-ball loop, so with N balls each paddle
/// may move up to N steps per tick.
pub fn step(
    world: &mut World,
    roster: &Roster,
    arena: &Arena,
    keys: &KeyBindings,
    input: &InputState,
    score: &mut Score,
) -> Events {
    let mut events = Events::new();

    for &ball in &roster.balls {
        // 1. Advance ball (top/bottom reflection included)
        move_ball(world, ball, arena, &mut events);

        // 2. Autonomous paddles chase the tracking ball
        if let Some(tracking) = roster.tracking_ball() {
            move_autonomous_paddles(world, tracking, arena);
        }

        // 3. Human paddles follow the key state
        apply_human_input(world, input, keys, arena);

        // 4. Paddle deflection, left then right
        check_paddle_collisions(world, ball, &mut events);

        // 5. Scoring (ball exited arena)
        check_scoring(world, ball, arena, score, &mut events);
    }

    events
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle, control: Control) -> hecs::Entity {
    world.spawn((paddle, control))
}

/// Helper to create a ball entity
pub fn create_ball(world: &mut World, id: BallId, ball: Ball) -> hecs::Entity {
    world.spawn((ball, id))
}
