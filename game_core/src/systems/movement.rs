use crate::{Arena, Ball, Control, Events, Paddle};
use hecs::{Entity, World};

/// Advance one ball and reflect it off the top/bottom edge
pub fn move_ball(world: &mut World, entity: Entity, arena: &Arena, events: &mut Events) {
    if let Ok(mut ball) = world.get::<&mut Ball>(entity) {
        if ball.advance(arena) {
            events.wall_bounces += 1;
        }
    }
}

/// Steer every autonomous paddle one step towards the tracking ball
pub fn move_autonomous_paddles(world: &mut World, tracking: Entity, arena: &Arena) {
    let target = match world.get::<&Ball>(tracking) {
        Ok(ball) => *ball,
        Err(_) => return,
    };

    for (_entity, (paddle, control)) in world.query_mut::<(&mut Paddle, &Control)>() {
        if *control == Control::Autonomous {
            paddle.auto_move(&target, arena);
        }
    }
}
