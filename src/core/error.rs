//! Error taxonomy for the board model.
//!
//! Construction is the only place errors surface: once a `Card`, `Hand`,
//! `MiddleTheater` or `GameState` exists it is valid. The one deliberate
//! exception is `Card::encode`, which masks its inputs instead of rejecting.

use thiserror::Error;

/// Errors raised while building or decoding board values.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A raw theater value outside `0..=2` reached a typed accessor.
    #[error("invalid theater value {0} (expected 0..=2)")]
    InvalidTheater(u8),

    /// A validated card constructor received a rank outside `0..=7`.
    #[error("invalid rank {0} (expected 0..=7)")]
    InvalidRank(u8),

    /// A raw card byte uses bits above the six-bit card layout.
    #[error("invalid card byte {0:#010b} (only the low six bits are used)")]
    InvalidCard(u8),

    /// Configuration text could not be turned into a typed value.
    #[error("invalid configuration {input:?}: {reason}")]
    InvalidConfiguration {
        /// The text that was rejected.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A game-state snapshot failed to encode or decode.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl BoardError {
    pub(crate) fn configuration(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BoardError>;
