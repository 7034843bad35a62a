//! Error types for the simulation core.

use thiserror::Error;

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// Top-level error type for the simulation core.
///
/// Most in-game failures (rejected placements, unaffordable cards) are
/// normal control flow and do not appear here; this type covers the
/// persistence boundary and genuine programming errors.
#[derive(Debug, Error)]
pub enum GameError {
    /// Failed to read or write a save file.
    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize a save record.
    #[error("save record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The game was driven into a state it cannot act from.
    #[error("invalid game state: {0}")]
    InvalidState(String),
}
