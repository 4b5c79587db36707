//! Engine error type.
//!
//! Every variant is a contract violation between the engine and whoever
//! drives it. A correctly integrated driver never observes one; they exist so
//! that mistakes fail fast instead of silently corrupting a match.

use derive_more::{Display, Error};

use super::tile::{Side, Tile};

/// Errors raised by match operations.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum DominoError {
    /// The match configuration (or a resumed position) cannot be played.
    #[display("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong.
        reason: String,
    },

    /// A tile was removed from a hand that does not hold it.
    #[display("tile {tile} is not in hand")]
    NotInHand {
        /// The missing tile.
        tile: Tile,
    },

    /// A hand would hold two physical copies of the same tile.
    #[display("tile {tile} is already in hand")]
    DuplicateTile {
        /// The duplicated tile.
        tile: Tile,
    },

    /// The open ends of the board were queried before the opening tile.
    #[display("board has no tiles")]
    EmptyBoard,

    /// A tile does not match the board end it was aimed at.
    #[display("tile {tile} cannot attach to the {side} end showing {end}")]
    IllegalMove {
        /// The offending tile.
        tile: Tile,
        /// The targeted end.
        side: Side,
        /// Pip value currently exposed at that end.
        end: u8,
    },

    /// The operation is not allowed in the match's current phase.
    #[display("operation not allowed while match is {phase}")]
    InvalidState {
        /// Name of the phase the match was in.
        phase: &'static str,
    },

    /// A match record could not be encoded or decoded.
    #[display("match record codec error: {reason}")]
    Codec {
        /// Underlying codec message.
        reason: String,
    },
}

impl DominoError {
    /// Shorthand for [`DominoError::InvalidConfiguration`].
    pub fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

impl From<bincode::Error> for DominoError {
    fn from(err: bincode::Error) -> Self {
        Self::Codec {
            reason: err.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DominoError>;
