use crate::params::Params;

/// Fixed rectangular bounds of the playfield.
///
/// Origin is the top-left corner; `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        assert!(width > 0.0 && height > 0.0, "arena must have positive size");
        Self { width, height }
    }

    /// True when a circle touches or crosses the top or bottom edge
    pub fn touches_horizontal_edge(&self, center_y: f32, radius: f32) -> bool {
        center_y - radius <= 0.0 || center_y + radius >= self.height
    }

    /// Ball fully past the left edge
    pub fn exited_left(&self, center_x: f32, radius: f32) -> bool {
        center_x + radius < 0.0
    }

    /// Ball fully past the right edge
    pub fn exited_right(&self, center_x: f32, radius: f32) -> bool {
        center_x - radius > self.width
    }

    /// Highest `y` a paddle of the given height may take
    pub fn max_paddle_y(&self, paddle_height: f32) -> f32 {
        (self.height - paddle_height).max(0.0)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(Params::ARENA_WIDTH, Params::ARENA_HEIGHT)
    }
}
