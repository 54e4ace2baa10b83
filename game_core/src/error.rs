use thiserror::Error;

/// Errors surfaced by the match core.
///
/// All of them are contract violations by the caller; nothing here is
/// retryable.
#[derive(Debug, Error)]
pub enum GameError {
    /// A call argument is outside its accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A configuration value is outside its accepted domain.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// Configuration document could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl GameError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
