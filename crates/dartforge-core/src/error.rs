//! Error types for DartForge

use thiserror::Error;

use crate::score::ScoreParseError;

/// Main error type for DartForge operations
#[derive(Debug, Error)]
pub enum DartForgeError {
    /// A throw could not be parsed or is not on the board
    #[error("invalid score: {0}")]
    InvalidScore(#[from] ScoreParseError),

    /// A turn was entered without any throw
    #[error("no points entered")]
    NoThrows,

    /// A turn holds more darts than a player may throw
    #[error("no more than three throws are allowed, got {0}")]
    TooManyThrows(usize),
}

/// Result type alias for DartForge operations
pub type Result<T> = std::result::Result<T, DartForgeError>;
