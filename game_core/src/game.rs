//! A running match: the world, the ball roster, both paddles and the score.

use glam::Vec2;
use hecs::{Entity, World};

use crate::{
    create_ball, create_paddle, step, Arena, Ball, BallId, BallView, Config, ConfigError, Control,
    Events, InputState, KeyBindings, Paddle, PaddleView, Roster, Score, Side, Snapshot,
};

pub struct Match {
    world: World,
    roster: Roster,
    left: Entity,
    right: Entity,
    arena: Arena,
    keys: KeyBindings,
    score: Score,
    ticks: u64,
}

impl Match {
    /// Build a match from a validated configuration. The left paddle is
    /// human-controlled, the right one autonomous.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let arena = config.arena();
        let mut world = World::new();
        let size = Vec2::new(config.paddle_width, config.paddle_height);
        let spawn_y = config.paddle_spawn_y();

        let left = create_paddle(
            &mut world,
            Paddle::new(
                Side::Left,
                Vec2::new(config.paddle_x(Side::Left), spawn_y),
                size,
                config.paddle_speed,
            ),
            Control::Human,
        );
        let right = create_paddle(
            &mut world,
            Paddle::new(
                Side::Right,
                Vec2::new(config.paddle_x(Side::Right), spawn_y),
                size,
                config.paddle_speed,
            ),
            Control::Autonomous,
        );

        let mut roster = Roster::new();
        for (index, spawn) in config.balls.iter().enumerate() {
            // validate() caps the roster at 256 so the index fits
            let id = BallId(index as u8);
            roster.push(create_ball(&mut world, id, spawn.to_ball()));
        }

        log::info!(
            "Match ready: {} balls in a {}x{} arena",
            roster.len(),
            arena.width,
            arena.height
        );

        Ok(Self {
            world,
            roster,
            left,
            right,
            arena,
            keys: config.keys,
            score: Score::new(),
            ticks: 0,
        })
    }

    /// Advance the simulation by one tick using the caller's key state
    pub fn tick(&mut self, input: &InputState) -> Events {
        let events = step(
            &mut self.world,
            &self.roster,
            &self.arena,
            &self.keys,
            input,
            &mut self.score,
        );
        self.ticks += 1;
        log::trace!("Tick {}: {:?}", self.ticks, events);
        events
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// Number of ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn ball_count(&self) -> usize {
        self.roster.len()
    }

    /// Ball at the given roster index
    pub fn ball(&self, index: usize) -> Option<Ball> {
        let entity = *self.roster.balls.get(index)?;
        self.world.get::<&Ball>(entity).ok().map(|ball| *ball)
    }

    /// Every ball with its identity, in roster order
    pub fn balls(&self) -> Vec<(BallId, Ball)> {
        self.roster
            .balls
            .iter()
            .filter_map(|&entity| {
                let id = *self.world.get::<&BallId>(entity).ok()?;
                let ball = *self.world.get::<&Ball>(entity).ok()?;
                Some((id, ball))
            })
            .collect()
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .get::<&Paddle>(self.paddle_entity(side))
            .ok()
            .map(|paddle| *paddle)
    }

    pub fn control(&self, side: Side) -> Option<Control> {
        self.world
            .get::<&Control>(self.paddle_entity(side))
            .ok()
            .map(|control| *control)
    }

    /// Read-only copy of everything a renderer draws
    pub fn snapshot(&self) -> Snapshot {
        let balls = self
            .balls()
            .into_iter()
            .map(|(id, ball)| BallView {
                id,
                pos: ball.pos,
                radius: ball.radius(),
            })
            .collect();

        let paddles = [Side::Left, Side::Right]
            .into_iter()
            .filter_map(|side| self.paddle(side))
            .map(|paddle| PaddleView {
                side: paddle.side,
                pos: paddle.pos,
                size: paddle.size(),
            })
            .collect();

        Snapshot {
            arena: self.arena,
            balls,
            paddles,
            score: self.score,
        }
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}
