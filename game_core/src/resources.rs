use std::collections::HashMap;
use std::ops::AddAssign;

use hecs::Entity;

/// Ball entities in stable roster order
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub balls: Vec<Entity>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ball: Entity) {
        self.balls.push(ball);
    }

    /// The ball autonomous paddles watch: always the first in the roster
    pub fn tracking_ball(&self) -> Option<Entity> {
        self.balls.first().copied()
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }
}

/// Match score tracking. Both counters only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Human player
    pub right: u32, // Autonomous opponent
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }
}

/// What happened during one tick, summed over every ball
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub left_points: u32,
    pub right_points: u32,
    pub paddle_hits: u32,
    pub wall_bounces: u32,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&self) -> bool {
        self.left_points > 0 || self.right_points > 0
    }
}

impl AddAssign for Events {
    fn add_assign(&mut self, rhs: Self) {
        self.left_points += rhs.left_points;
        self.right_points += rhs.right_points;
        self.paddle_hits += rhs.paddle_hits;
        self.wall_bounces += rhs.wall_bounces;
    }
}

/// Raw key notification from the host's input source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    Down(String),
    Up(String),
}

/// Pressed state of every key seen so far, keyed by key name ("ArrowUp").
///
/// No debouncing and no repeat suppression: the last notification wins.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, pressed: bool) {
        self.keys.insert(key.to_string(), pressed);
    }

    pub fn press(&mut self, key: &str) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: &str) {
        self.set(key, false);
    }

    pub fn apply(&mut self, event: &KeyEvent) {
        match event {
            KeyEvent::Down(key) => self.press(key),
            KeyEvent::Up(key) => self.release(key),
        }
    }

    /// Unknown keys read as released
    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
