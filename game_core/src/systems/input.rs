//! Pointer drag handling
//!
//! Maps a drag gesture onto paddle targets: a drag only moves a paddle if
//! it started on that paddle, and moves it by the pointer's delta.

use glam::Vec2;

use crate::error::Result;
use crate::{MatchSimulator, MatchState, Player};

/// Tracks which paddle, if any, the active drag is holding
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTracker {
    only: Option<Player>, // restrict grabbing to one player
    held: Option<Player>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker that can only ever grab `player`'s paddle
    pub fn for_player(player: Player) -> Self {
        Self {
            only: Some(player),
            held: None,
        }
    }

    pub fn held(&self) -> Option<Player> {
        self.held
    }

    /// Pointer down: grab the paddle under `point`, if any
    pub fn begin(&mut self, state: &MatchState, point: Vec2) -> Option<Player> {
        self.held = Player::ALL.into_iter().find(|&player| {
            self.only.map_or(true, |only| only == player) && state.paddle(player).aabb().contains(point)
        });
        self.held
    }

    /// Pointer moved: shift the held paddle by the pointer delta along its axis.
    ///
    /// Returns the paddle's new (clamped) axis position, or `None` when no
    /// paddle is held.
    pub fn drag(
        &self,
        sim: &mut MatchSimulator,
        previous: Vec2,
        current: Vec2,
    ) -> Result<Option<f32>> {
        let Some(player) = self.held else {
            return Ok(None);
        };
        let paddle = sim.state().paddle(player);
        let delta = paddle.axis.component(current - previous);
        let target = paddle.axis_position() + delta;
        sim.set_paddle_target(player.id(), target).map(Some)
    }

    /// Pointer up or cancelled
    pub fn end(&mut self) {
        self.held = None;
    }
}
