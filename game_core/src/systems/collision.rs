use crate::{Ball, Events, Paddle, Side};
use hecs::{Entity, World};

/// Deflect a ball away from whichever paddle it overlaps.
///
/// The test is positional, not a rising edge: a ball that stays inside the
/// overlap region has its direction reasserted every tick. Only actual
/// reversals count as paddle hits.
pub fn check_paddle_collisions(world: &mut World, entity: Entity, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut left = None;
    let mut right = None;
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => left = Some(*paddle),
            Side::Right => right = Some(*paddle),
        }
    }

    let Ok(mut ball) = world.get::<&mut Ball>(entity) else {
        return;
    };

    if let Some(paddle) = left {
        if deflect_off_left(&mut ball, &paddle) {
            events.paddle_hits += 1;
        }
    }
    if let Some(paddle) = right {
        if deflect_off_right(&mut ball, &paddle) {
            events.paddle_hits += 1;
        }
    }
}

/// Force a rightward velocity if the ball overlaps the left paddle.
/// Returns true when the ball was heading left before.
pub fn deflect_off_left(ball: &mut Ball, paddle: &Paddle) -> bool {
    let overlaps = ball.pos.x - ball.radius() <= paddle.pos.x + paddle.width()
        && paddle.spans(ball.pos.y);
    if !overlaps {
        return false;
    }

    let reversed = ball.vel.x < 0.0;
    ball.vel.x = ball.vel.x.abs();
    reversed
}

/// Force a leftward velocity if the ball overlaps the right paddle.
/// Returns true when the ball was heading right before.
pub fn deflect_off_right(ball: &mut Ball, paddle: &Paddle) -> bool {
    let overlaps = ball.pos.x + ball.radius() >= paddle.pos.x && paddle.spans(ball.pos.y);
    if !overlaps {
        return false;
    }

    let reversed = ball.vel.x > 0.0;
    ball.vel.x = -ball.vel.x.abs();
    reversed
}
