use crate::{Arena, Ball, BallId, Events, Score};
use hecs::{Entity, World};

/// Check if the ball left the arena (scoring)
///
/// The left exit is checked before the right one, and a ball that scores is
/// sent back to its spawn point in the same tick.
pub fn check_scoring(
    world: &mut World,
    entity: Entity,
    arena: &Arena,
    score: &mut Score,
    events: &mut Events,
) {
    let Ok((ball, id)) = world.query_one_mut::<(&mut Ball, &BallId)>(entity) else {
        return;
    };

    if arena.exited_left(ball.pos.x, ball.radius()) {
        // Right player scores
        score.increment_right();
        events.right_points += 1;
        log::debug!("Ball {} out left, score {}-{}", id.0, score.left, score.right);
        ball.reset();
    }

    if arena.exited_right(ball.pos.x, ball.radius()) {
        // Left player scores
        score.increment_left();
        events.left_points += 1;
        log::debug!("Ball {} out right, score {}-{}", id.0, score.left, score.right);
        ball.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Arena, Score, Events) {
        (World::new(), Arena::new(480.0, 320.0), Score::new(), Events::new())
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, arena, mut score, mut events) = setup_world();
        let entity = create_ball(
            &mut world,
            BallId(0),
            Ball::new(Vec2::new(-15.0, 100.0), Vec2::new(-3.0, 1.0), 10.0),
        );

        check_scoring(&mut world, entity, &arena, &mut score, &mut events);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert_eq!(events.right_points, 1);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, arena, mut score, mut events) = setup_world();
        let entity = create_ball(
            &mut world,
            BallId(0),
            Ball::new(Vec2::new(240.0, 160.0), Vec2::new(4.0, 0.0), 10.0),
        );
        world.get::<&mut Ball>(entity).unwrap().pos.x = 491.0;

        check_scoring(&mut world, entity, &arena, &mut score, &mut events);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert_eq!(events.left_points, 1);
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, arena, mut score, mut events) = setup_world();
        let entity = create_ball(
            &mut world,
            BallId(3),
            Ball::new(Vec2::new(200.0, 100.0), Vec2::new(-4.0, 3.0), 10.0),
        );
        {
            let mut ball = world.get::<&mut Ball>(entity).unwrap();
            ball.pos = Vec2::new(-11.0, 40.0);
            ball.vel.y = -2.0;
        }

        check_scoring(&mut world, entity, &arena, &mut score, &mut events);

        let ball = *world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos, Vec2::new(200.0, 100.0), "Ball should reset to spawn");
        assert_eq!(ball.vel.x, 4.0, "Serve direction flips");
        assert_eq!(ball.vel.y, -2.0, "Vertical velocity kept");
    }

    #[test]
    fn test_no_scoring_while_ball_overlaps_edge() {
        let (mut world, arena, mut score, mut events) = setup_world();
        let entity = create_ball(
            &mut world,
            BallId(0),
            Ball::new(Vec2::new(-9.0, 160.0), Vec2::new(-8.0, 4.0), 10.0),
        );

        check_scoring(&mut world, entity, &arena, &mut score, &mut events);

        assert_eq!(score, Score::new(), "Ball still touches the arena");
        assert!(!events.scored(), "No scoring events");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, arena, mut score, mut events) = setup_world();

        for id in 0..3 {
            let entity = create_ball(
                &mut world,
                BallId(id),
                Ball::new(Vec2::new(500.0, 160.0), Vec2::new(8.0, 0.0), 10.0),
            );
            check_scoring(&mut world, entity, &arena, &mut score, &mut events);
        }

        assert_eq!(score.left, 3, "Scores should accumulate");
        assert_eq!(score.right, 0);
        assert_eq!(events.left_points, 3);
    }

    #[test]
    fn test_entity_without_ball_is_ignored() {
        let (mut world, arena, mut score, mut events) = setup_world();
        let entity = world.spawn((BallId(0),));

        check_scoring(&mut world, entity, &arena, &mut score, &mut events);

        assert_eq!(score, Score::new());
    }
}
