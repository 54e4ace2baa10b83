use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::map::AspectRatio;
use crate::params::Params;

/// Which side the ball is served toward after a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServeRule {
    /// Always toward player 1's side, whoever conceded
    #[default]
    TowardPlayer1,
    /// Toward the player who was just scored against
    TowardConceder,
}

/// Match configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub aspect_ratio: AspectRatio,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_edge_offset: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_initial_vy: f32,
    pub serve: ServeRule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            aspect_ratio: AspectRatio::new(Params::ASPECT_WIDTH, Params::ASPECT_HEIGHT),
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_edge_offset: Params::PADDLE_EDGE_OFFSET,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            ball_initial_vy: Params::BALL_INITIAL_VY,
            serve: ServeRule::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("aspect_ratio.width", self.aspect_ratio.width),
            ("aspect_ratio.height", self.aspect_ratio.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }

        if !self.paddle_edge_offset.is_finite() || self.paddle_edge_offset < 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "paddle_edge_offset must be non-negative and finite, got {}",
                self.paddle_edge_offset
            )));
        }
        if !self.ball_initial_vy.is_finite() {
            return Err(GameError::InvalidConfig(format!(
                "ball_initial_vy must be finite, got {}",
                self.ball_initial_vy
            )));
        }
        Ok(())
    }

    /// Paddle half extent along its movement axis
    pub fn paddle_half_extent(&self) -> f32 {
        self.paddle_height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_params() {
        let config = Config::new();
        assert_eq!(config.ball_speed, 500.0);
        assert_eq!(config.ball_initial_vy, 120.0);
        assert_eq!(config.paddle_half_extent(), 80.0);
        assert_eq!(config.aspect_ratio, AspectRatio::new(4.0, 3.0));
        assert_eq!(config.serve, ServeRule::TowardPlayer1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "ball_speed": 650.0, "serve": "toward_conceder" }"#)
            .expect("partial config should parse");
        assert_eq!(config.ball_speed, 650.0);
        assert_eq!(config.serve, ServeRule::TowardConceder);
        assert_eq!(config.paddle_height, Params::PADDLE_HEIGHT);
    }

    #[test]
    fn test_json_roundtrip_preserves_values() {
        let mut config = Config::new();
        config.aspect_ratio = AspectRatio::new(16.0, 9.0);
        let json = config.to_json().expect("serialize");
        let parsed = Config::from_json(&json).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        let err = Config::from_json(r#"{ "paddle_height": 0.0 }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)), "got {err:?}");

        let err = Config::from_json(r#"{ "aspect_ratio": { "width": -4.0, "height": 3.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)), "got {err:?}");
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Config::from_json("{ ball_speed: ").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse(_)), "got {err:?}");
    }
}
