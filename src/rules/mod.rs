//! Match rules: opening selection, turn resolution and results.
//!
//! `MatchEngine` is the state machine drivers talk to; the opening rule
//! and result types are kept separate so they can be tested on their own.

pub mod engine;
pub mod result;
pub mod start;

pub use engine::{MatchEngine, MatchPhase, Position, TurnAction, TurnOutcome};
pub use result::{MatchResult, WinReason};
pub use start::{find_starting_tile, opening_score};
