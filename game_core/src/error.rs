use thiserror::Error;

/// Rejected match configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("Paddle height {paddle} exceeds arena height {arena}")]
    PaddleTallerThanArena { paddle: f32, arena: f32 },

    #[error("Too many balls: {count} (max {max})")]
    TooManyBalls { count: usize, max: usize },

    #[error("Key binding for {0} is empty")]
    EmptyKeyBinding(&'static str),
}
