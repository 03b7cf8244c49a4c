//! Renderer-facing view of a match
//!
//! The simulation never draws. Each frame the host hands a [`Snapshot`] to
//! whatever [`Renderer`] owns the drawing surface; colours are looked up here
//! from ball identity and paddle side.

use glam::Vec2;

use crate::{Arena, BallId, Score, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
    pub const PURPLE: Rgb = Rgb::new(128, 0, 128);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

const BALL_PALETTE: [Rgb; 5] = [Rgb::RED, Rgb::GREEN, Rgb::BLUE, Rgb::ORANGE, Rgb::PURPLE];

/// Fill colour for a ball; the palette repeats past five balls
pub fn ball_color(id: BallId) -> Rgb {
    BALL_PALETTE[id.0 as usize % BALL_PALETTE.len()]
}

pub fn paddle_color(side: Side) -> Rgb {
    match side {
        Side::Left => Rgb::BLUE,
        Side::Right => Rgb::YELLOW,
    }
}

/// Colour of the score text
pub const SCORE_COLOR: Rgb = Rgb::BLACK;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub id: BallId,
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleView {
    pub side: Side,
    pub pos: Vec2, // top-left corner
    pub size: Vec2,
}

/// One line of score text and its baseline anchor
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreLabel {
    pub text: String,
    pub pos: Vec2,
    pub color: Rgb,
}

/// Everything drawn in one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub arena: Arena,
    pub balls: Vec<BallView>,
    pub paddles: Vec<PaddleView>,
    pub score: Score,
}

impl Snapshot {
    /// Player score top-left, AI score top-right
    pub fn score_labels(&self) -> [ScoreLabel; 2] {
        [
            ScoreLabel {
                text: format!("Player: {}", self.score.left),
                pos: Vec2::new(20.0, 30.0),
                color: SCORE_COLOR,
            },
            ScoreLabel {
                text: format!("AI: {}", self.score.right),
                pos: Vec2::new(self.arena.width - 100.0, 30.0),
                color: SCORE_COLOR,
            },
        ]
    }
}

/// A drawing surface owned by the host
pub trait Renderer {
    fn draw(&mut self, frame: &Snapshot);
}
