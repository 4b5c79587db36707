//! Observable match events.
//!
//! The engine never prints or persists anything. Instead it appends an
//! `EventRecord` for every observable step; drivers poll the log after each
//! call and forward what they need to logs, storage or a UI.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Side, Tile};
use crate::rules::MatchResult;

/// Something that happened during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A player received their starting hand.
    Dealt {
        /// Receiving seat.
        player: PlayerId,
        /// Tiles dealt.
        tiles: usize,
    },

    /// The opening tile was placed.
    Opened {
        /// Seat that held the opening tile.
        player: PlayerId,
        /// The opening tile.
        tile: Tile,
    },

    /// A tile was attached to the board.
    Played {
        /// Seat that played.
        player: PlayerId,
        /// The tile in its placed orientation.
        tile: Tile,
        /// End it was attached to.
        side: Side,
        /// True if the player had to draw before this play.
        after_draw: bool,
        /// Board after the play, left to right.
        board: Vector<Tile>,
    },

    /// A tile was drawn from the boneyard.
    Drew {
        /// Drawing seat.
        player: PlayerId,
        /// The drawn tile.
        tile: Tile,
        /// Tiles left in the boneyard.
        boneyard_left: usize,
    },

    /// A player could not play and the boneyard was empty.
    Passed {
        /// Passing seat.
        player: PlayerId,
        /// Consecutive passes including this one.
        consecutive: usize,
    },

    /// The match ended.
    Finished {
        /// Terminal result.
        result: MatchResult,
    },
}

impl MatchEvent {
    /// The seat this event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            MatchEvent::Dealt { player, .. }
            | MatchEvent::Opened { player, .. }
            | MatchEvent::Played { player, .. }
            | MatchEvent::Drew { player, .. }
            | MatchEvent::Passed { player, .. } => Some(*player),
            MatchEvent::Finished { .. } => None,
        }
    }
}

/// An event stamped with when it happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Turn number (0 for setup).
    pub turn: u32,

    /// Position of this event in the whole match log.
    pub sequence: u32,

    /// What happened.
    pub event: MatchEvent,
}

impl EventRecord {
    /// Create a new event record.
    #[must_use]
    pub fn new(turn: u32, sequence: u32, event: MatchEvent) -> Self {
        Self {
            turn,
            sequence,
            event,
        }
    }
}

impl std::fmt::Display for EventRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:<4} turn {:<3} ", self.sequence, self.turn)?;
        match &self.event {
            MatchEvent::Dealt { player, tiles } => write!(f, "{player} dealt {tiles} tiles"),
            MatchEvent::Opened { player, tile } => write!(f, "{player} opens with {tile}"),
            MatchEvent::Played {
                player,
                tile,
                side,
                after_draw,
                board,
            } => {
                let drew = if *after_draw { " after drawing" } else { "" };
                write!(f, "{player} plays {tile} on {side}{drew} -> ")?;
                for placed in board {
                    write!(f, "{placed}")?;
                }
                Ok(())
            }
            MatchEvent::Drew {
                player,
                tile,
                boneyard_left,
            } => write!(f, "{player} draws {tile} ({boneyard_left} left)"),
            MatchEvent::Passed {
                player,
                consecutive,
            } => write!(f, "{player} passes ({consecutive} in a row)"),
            MatchEvent::Finished { result } => {
                write!(f, "{} wins by {}", result.winner, result.reason)
            }
        }
    }
}
