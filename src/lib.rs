//! # domino-engine
//!
//! A deterministic, turn-based domino match engine.
//!
//! ## Design Principles
//!
//! 1. **Pure operations**: The engine never prints or persists. Drivers poll
//!    the event log and read-only accessors after each call.
//!
//! 2. **N-Player**: Any number of seats from 2 up, limited only by the deck.
//!
//! 3. **Seeded**: Every shuffle comes from an explicitly seeded `GameRng`,
//!    so a configuration fully determines a match for a given policy.
//!
//! ## Modules
//!
//! - `core`: Tiles, deck generation, seats, configuration, RNG, errors
//! - `zones`: Hands, the board and the boneyard
//! - `rules`: Opening selection, the match state machine and results
//! - `policy`: Pluggable move selection
//! - `events`: Observable event log and storable match records

pub mod core;
pub mod events;
pub mod policy;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    DominoError, GameRng, MatchConfig, Move, PlayerId, PlayerMap, Result, Side, Tile,
};

pub use crate::zones::{Board, Boneyard, Hand, MoveList};

pub use crate::rules::{
    find_starting_tile, MatchEngine, MatchPhase, MatchResult, Position, TurnAction,
    TurnOutcome, WinReason,
};

pub use crate::policy::{FirstLegal, HeaviestTile, MovePolicy, RandomPolicy, TurnView};

pub use crate::events::{EventRecord, MatchEvent, MatchRecord};
