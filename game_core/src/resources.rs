use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::params::Params;

/// Player identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = GameError;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(GameError::invalid_argument(format!(
                "unknown player id {other}, expected 1 or 2"
            ))),
        }
    }
}

/// Match score; only ever counts up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player1: u32,
    pub player2: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, player: Player) {
        match player {
            Player::One => self.player1 += 1,
            Player::Two => self.player2 += 1,
        }
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }
}

/// Random number generator
#[derive(Debug, Clone)]
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Whole number in `[0, bound)`; 0 when the bound is below 1
    pub fn below(&mut self, bound: f32) -> f32 {
        use rand::Rng;
        if bound.is_nan() || bound < 1.0 {
            return 0.0;
        }
        self.0.gen_range(0..bound as u32) as f32
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(Params::DEFAULT_SEED)
    }
}

/// Events that occurred during the last advance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Events {
    pub player1_scored: bool,
    pub player2_scored: bool,
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&mut self, player: Player) {
        match player {
            Player::One => self.player1_scored = true,
            Player::Two => self.player2_scored = true,
        }
    }
}

/// Turns host timestamps into step durations
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<f64>, // seconds
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick; 0 on the first tick or if time ran backwards
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) => (now - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
