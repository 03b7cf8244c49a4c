use hecs::World;

use crate::{Arena, Control, Direction, InputState, KeyBindings, Paddle};

/// Move human-controlled paddles from the current key state.
///
/// Up is applied before down, so holding both keys nets out to no motion
/// except where one of the steps is blocked by an edge.
pub fn apply_human_input(
    world: &mut World,
    input: &InputState,
    keys: &KeyBindings,
    arena: &Arena,
) {
    let up = input.is_pressed(&keys.up);
    let down = input.is_pressed(&keys.down);
    if !up && !down {
        return;
    }

    for (_entity, (paddle, control)) in world.query_mut::<(&mut Paddle, &Control)>() {
        if *control != Control::Human {
            continue;
        }
        if up {
            paddle.step(Direction::Up, arena);
        }
        if down {
            paddle.step(Direction::Down, arena);
        }
    }
}
