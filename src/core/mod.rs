//! Core match types: tiles, decks, seats, configuration, RNG, errors.
//!
//! These are the leaf building blocks; zones and rules are built on top.

pub mod config;
pub mod deck;
pub mod error;
pub mod player;
pub mod rng;
pub mod tile;

pub use config::MatchConfig;
pub use error::{DominoError, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use tile::{Move, Side, Tile};
