use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::params::Params;
use crate::{Arena, Ball, ConfigError, Side};

/// Initial state of one ball in the roster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSpawn {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
}

impl BallSpawn {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, radius: f32) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            radius,
        }
    }

    pub fn to_ball(&self) -> Ball {
        Ball::new(
            Vec2::new(self.x, self.y),
            Vec2::new(self.vx, self.vy),
            self.radius,
        )
    }
}

/// Key names that drive the human paddle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub up: String,
    pub down: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: Params::KEY_UP.to_string(),
            down: Params::KEY_DOWN.to_string(),
        }
    }
}

/// Match configuration. Constant for the lifetime of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub keys: KeyBindings,
    pub balls: Vec<BallSpawn>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            keys: KeyBindings::default(),
            balls: Params::BALLS
                .iter()
                .map(|&(x, y, radius, vx, vy)| BallSpawn::new(x, y, vx, vy, radius))
                .collect(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text).inspect_err(|e| {
            log::warn!("Rejected config {}: {}", path.display(), e);
        })
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Get X position (left edge) for the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.arena_width - self.paddle_width,
        }
    }

    /// Starting Y (top edge) of both paddles: vertically centred
    pub fn paddle_spawn_y(&self) -> f32 {
        self.arena_height / 2.0 - self.paddle_height / 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
        ];
        for (field, value) in dims {
            positive(field, value)?;
        }

        if self.paddle_height > self.arena_height {
            return Err(ConfigError::PaddleTallerThanArena {
                paddle: self.paddle_height,
                arena: self.arena_height,
            });
        }

        if self.balls.len() > Params::MAX_BALLS {
            return Err(ConfigError::TooManyBalls {
                count: self.balls.len(),
                max: Params::MAX_BALLS,
            });
        }

        for ball in &self.balls {
            positive("ball radius", ball.radius)?;
            finite("ball position", ball.x)?;
            finite("ball position", ball.y)?;
            finite("ball velocity", ball.vx)?;
            finite("ball velocity", ball.vy)?;
        }

        if self.keys.up.is_empty() {
            return Err(ConfigError::EmptyKeyBinding("up"));
        }
        if self.keys.down.is_empty() {
            return Err(ConfigError::EmptyKeyBinding("down"));
        }

        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 0.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 470.0, "Right paddle X position");
    }

    #[test]
    fn test_config_paddle_spawn_y() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn_y(), 110.0);
    }

    #[test]
    fn test_default_roster() {
        let config = Config::new();
        assert_eq!(config.balls.len(), 5);
        assert_eq!(config.balls[0], BallSpawn::new(200.0, 100.0, 4.0, 3.0, 10.0));
        assert_eq!(config.balls[4].radius, 18.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            arena_width = 640.0

            [keys]
            up = "w"
            "#,
        )
        .unwrap();
        assert_eq!(config.arena_width, 640.0);
        assert_eq!(config.arena_height, Params::ARENA_HEIGHT);
        assert_eq!(config.keys.up, "w");
        assert_eq!(config.keys.down, "ArrowDown", "Unset binding keeps default");
        assert_eq!(config.balls.len(), 5, "Unset roster keeps default");
    }

    #[test]
    fn test_toml_roster() {
        let config = Config::from_toml_str(
            r#"
            [[balls]]
            x = 10.0
            y = 150.0
            vx = -3.0
            vy = 0.0
            radius = 10.0
            "#,
        )
        .unwrap();
        assert_eq!(config.balls, vec![BallSpawn::new(10.0, 150.0, -3.0, 0.0, 10.0)]);
    }

    #[test]
    fn test_serialized_config_parses_back() {
        let config = Config::new();
        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let config = Config {
            paddle_speed: 0.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "paddle_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_zero_radius_ball() {
        let mut config = Config::new();
        config.balls[2].radius = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "ball radius",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_tall_paddle() {
        let config = Config {
            paddle_height: 400.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTallerThanArena { .. })
        ));
    }

    #[test]
    fn test_rejects_nan_velocity() {
        let mut config = Config::new();
        config.balls[0].vx = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_roster() {
        let config = Config {
            balls: vec![BallSpawn::new(100.0, 100.0, 1.0, 1.0, 5.0); 257],
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyBalls { count: 257, .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            Config::from_toml_str("arena_width = \"wide\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(matches!(
            Config::load("/nonexistent/arena.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
