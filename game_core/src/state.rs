use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::{Axis, Ball, Paddle};
use crate::config::Config;
use crate::error::{GameError, Result};
use crate::map::PlayableArea;
use crate::resources::{Player, Score};

/// Axis paddles slide along; the ball scores on the other one
pub const PADDLE_AXIS: Axis = Axis::Vertical;

/// Everything one match owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub surface: Vec2, // output surface (width, height)
    pub area: PlayableArea,
    pub player1: Paddle,
    pub player2: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl MatchState {
    /// Lay out a fresh match on an output surface of the given size
    pub fn new(output_width: f32, output_height: f32, config: &Config) -> Result<Self> {
        for (name, value) in [("width", output_width), ("height", output_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::invalid_argument(format!(
                    "output {name} must be positive and finite, got {value}"
                )));
            }
        }

        let area = PlayableArea::from_output(output_width, output_height, config.aspect_ratio);
        let center = area.center();
        let paddle_size = Vec2::new(config.paddle_width, config.paddle_height);

        let mut player1 = Paddle::new(
            Vec2::new(config.paddle_edge_offset, center.y),
            paddle_size,
            PADDLE_AXIS,
        );
        let mut player2 = Paddle::new(
            Vec2::new(output_width - config.paddle_edge_offset, center.y),
            paddle_size,
            PADDLE_AXIS,
        );
        for paddle in [&mut player1, &mut player2] {
            let clamped = area.clamp_on_axis(PADDLE_AXIS, paddle.axis_position(), paddle.half_extent());
            paddle.set_axis_position(clamped);
        }

        let ball = Ball::new(
            center,
            Vec2::new(config.ball_speed, config.ball_initial_vy),
            config.ball_radius,
        );

        Ok(Self {
            surface: Vec2::new(output_width, output_height),
            area,
            player1,
            player2,
            ball,
            score: Score::new(),
        })
    }

    pub fn paddle(&self, player: Player) -> &Paddle {
        match player {
            Player::One => &self.player1,
            Player::Two => &self.player2,
        }
    }

    pub fn paddle_mut(&mut self, player: Player) -> &mut Paddle {
        match player {
            Player::One => &mut self.player1,
            Player::Two => &mut self.player2,
        }
    }

    /// Move a paddle toward `axis_position`, clamped inside the playable area
    pub fn set_paddle_target(&mut self, player: Player, axis_position: f32) -> Result<f32> {
        if !axis_position.is_finite() {
            return Err(GameError::invalid_argument(format!(
                "paddle target must be finite, got {axis_position}"
            )));
        }
        let area = self.area;
        let paddle = self.paddle_mut(player);
        let clamped = area.clamp_on_axis(paddle.axis, axis_position, paddle.half_extent());
        paddle.set_axis_position(clamped);
        Ok(clamped)
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            ball_position: self.ball.pos,
            paddle1_position: self.player1.pos,
            paddle2_position: self.player2.pos,
            score1: self.score.player1,
            score2: self.score.player2,
        }
    }
}

/// Read-only copy of what the presentation layer draws
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub ball_position: Vec2,
    pub paddle1_position: Vec2,
    pub paddle2_position: Vec2,
    pub score1: u32,
    pub score2: u32,
}
