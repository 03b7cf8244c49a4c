use glam::Vec2;

use crate::Arena;

/// Stable identity of a ball, its index in the match roster.
///
/// Colour is a presentation concern; see [`crate::render::ball_color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BallId(pub u8);

/// Ball component - one of the bouncing balls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
    spawn: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        assert!(radius > 0.0, "ball radius must be positive, got {radius}");
        Self {
            pos,
            vel,
            radius,
            spawn: pos,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Position the ball was constructed at
    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    /// Advance one tick, then reflect off the top/bottom edge.
    ///
    /// There is no positional clamp: a fast ball may overshoot the edge by up
    /// to its vertical speed before the reflected velocity brings it back.
    /// Returns true when the vertical velocity was reflected.
    pub fn advance(&mut self, arena: &Arena) -> bool {
        self.pos += self.vel;

        let hit_edge = arena.touches_horizontal_edge(self.pos.y, self.radius);
        if hit_edge {
            self.vel.y = -self.vel.y;
        }
        hit_edge
    }

    /// Return to the spawn point and serve the other way
    pub fn reset(&mut self) {
        self.pos = self.spawn;
        self.vel.x = -self.vel.x;
    }
}

/// Which side of the arena a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Who drives a paddle. Fixed for the paddle's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Human,
    Autonomous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Paddle component - a vertical bar on one side of the arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // top-left corner
    size: Vec2,
    speed: f32,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, speed: f32) -> Self {
        assert!(
            size.x > 0.0 && size.y > 0.0,
            "paddle size must be positive, got {size}"
        );
        assert!(speed > 0.0, "paddle speed must be positive, got {speed}");
        Self {
            side,
            pos,
            size,
            speed,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// True when `y` lies on the paddle's full vertical span (edges included)
    pub fn spans(&self, y: f32) -> bool {
        y >= self.pos.y && y <= self.pos.y + self.size.y
    }

    /// Move one step, never leaving `[0, arena.height - height]`.
    ///
    /// A paddle already resting on the edge it is pushed against stays put.
    pub fn step(&mut self, dir: Direction, arena: &Arena) {
        match dir {
            Direction::Up => {
                if self.pos.y > 0.0 {
                    self.pos.y = (self.pos.y - self.speed).max(0.0);
                }
            }
            Direction::Down => {
                let floor = arena.max_paddle_y(self.size.y);
                if self.pos.y + self.size.y < arena.height {
                    self.pos.y = (self.pos.y + self.speed).min(floor);
                }
            }
        }
    }

    /// Chase the target ball's centre one step at a time. No look-ahead and
    /// no dead zone.
    pub fn auto_move(&mut self, target: &Ball, arena: &Arena) {
        let center = self.center_y();
        if target.pos.y < center {
            self.step(Direction::Up, arena);
        } else if target.pos.y > center {
            self.step(Direction::Down, arena);
        }
    }
}
