//! Host-driven frame loop: tick, then render, then hand control back.

use crate::{Events, InputState, KeyEvent, Match, Renderer};

/// A match wired to its input state and drawing surface.
///
/// The session is the single owner of the key state, so key notifications
/// and tick reads are serialized through `&mut self`.
pub struct Session<R: Renderer> {
    game: Match,
    input: InputState,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    pub fn new(game: Match, renderer: R) -> Self {
        Self {
            game,
            input: InputState::new(),
            renderer,
        }
    }

    /// Record a key-down or key-up notification
    pub fn handle_key(&mut self, event: KeyEvent) {
        self.input.apply(&event);
    }

    /// Run one frame: a single tick followed by a single draw
    pub fn frame(&mut self) -> Events {
        let events = self.game.tick(&self.input);
        self.renderer.draw(&self.game.snapshot());
        events
    }

    /// Run `frames` frames back to back and sum their events
    pub fn run(&mut self, frames: u32) -> Events {
        let mut total = Events::new();
        for _ in 0..frames {
            total += self.frame();
        }
        total
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_parts(self) -> (Match, R) {
        (self.game, self.renderer)
    }
}
