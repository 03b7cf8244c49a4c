/// Default tuning parameters for the arena
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 480.0;
    pub const ARENA_HEIGHT: f32 = 320.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 6.0; // units per tick

    // Input
    pub const KEY_UP: &'static str = "ArrowUp";
    pub const KEY_DOWN: &'static str = "ArrowDown";

    // Ball roster: (x, y, radius, vx, vy)
    pub const BALLS: [(f32, f32, f32, f32, f32); 5] = [
        (200.0, 100.0, 10.0, 4.0, 3.0),
        (300.0, 150.0, 12.0, -3.0, 2.5),
        (150.0, 200.0, 14.0, 2.5, -3.0),
        (400.0, 250.0, 16.0, -2.8, -3.5),
        (250.0, 120.0, 18.0, 3.2, 3.2),
    ];

    // Ids are u8
    pub const MAX_BALLS: usize = 256;
}
