//! Host boundary messages for the match core
//!
//! Uses postcard for efficient binary serialization

use game_core::{MatchSimulator, RenderSnapshot};
use postcard::{from_bytes, to_allocvec};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtoError {
    #[error("encode failed: {0}")]
    Encode(postcard::Error),
    #[error("decode failed: {0}")]
    Decode(postcard::Error),
}

// ============================================================================
// Host -> Core
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum HostInput {
    /// Paddle target along its movement axis; player is 1 or 2
    PaddleTarget { player: u8, position: f32 },

    /// Advance one frame by `dt` seconds
    Frame { dt: f32 },
}

// ============================================================================
// Core -> Host
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum FrameOutput {
    /// State to draw after a frame
    Snapshot {
        ball_x: f32,
        ball_y: f32,
        paddle1_x: f32,
        paddle1_y: f32,
        paddle2_x: f32,
        paddle2_y: f32,
        score1: u32,
        score2: u32,
    },

    /// Input refused by the core
    Rejected { reason: String },
}

impl From<RenderSnapshot> for FrameOutput {
    fn from(snap: RenderSnapshot) -> Self {
        FrameOutput::Snapshot {
            ball_x: snap.ball_position.x,
            ball_y: snap.ball_position.y,
            paddle1_x: snap.paddle1_position.x,
            paddle1_y: snap.paddle1_position.y,
            paddle2_x: snap.paddle2_position.x,
            paddle2_y: snap.paddle2_position.y,
            score1: snap.score1,
            score2: snap.score2,
        }
    }
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl HostInput {
    /// Serialize HostInput message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtoError> {
        to_allocvec(self).map_err(ProtoError::Encode)
    }

    /// Deserialize HostInput message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtoError> {
        from_bytes(bytes).map_err(ProtoError::Decode)
    }
}

impl FrameOutput {
    /// Serialize FrameOutput message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtoError> {
        to_allocvec(self).map_err(ProtoError::Encode)
    }

    /// Deserialize FrameOutput message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtoError> {
        from_bytes(bytes).map_err(ProtoError::Decode)
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Feed one input into the simulator.
///
/// Paddle targets produce no output unless rejected; frames always answer
/// with a snapshot or a rejection.
pub fn apply_input(sim: &mut MatchSimulator, input: &HostInput) -> Option<FrameOutput> {
    let result = match *input {
        HostInput::PaddleTarget { player, position } => {
            sim.set_paddle_target(player, position).map(|_| None)
        }
        HostInput::Frame { dt } => sim.advance(dt).map(|snap| Some(snap.into())),
    };
    result.unwrap_or_else(|err| {
        log::warn!("rejected {input:?}: {err}");
        Some(FrameOutput::Rejected {
            reason: err.to_string(),
        })
    })
}

/// Decode a host message, apply it, and encode any reply
pub fn apply_bytes(sim: &mut MatchSimulator, bytes: &[u8]) -> Result<Option<Vec<u8>>, ProtoError> {
    let input = HostInput::from_bytes(bytes)?;
    apply_input(sim, &input)
        .map(|output| output.to_bytes())
        .transpose()
}
