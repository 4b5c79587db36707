//! Match configuration.
//!
//! Drivers describe a match with a `MatchConfig` and hand it to the engine:
//!
//! ```
//! use domino_engine::core::MatchConfig;
//!
//! let config = MatchConfig::new(["Alice", "Bob"])
//!     .with_max_pip(6)
//!     .with_hand_size(7)
//!     .with_seed(1234);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.deck_size(), 28);
//! ```

use serde::{Deserialize, Serialize};

use super::deck::deck_size;
use super::error::{DominoError, Result};

/// Default maximum pip value (double-six set).
pub const DEFAULT_MAX_PIP: u8 = 6;

/// Default number of tiles dealt to each player.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Default shuffle seed.
pub const DEFAULT_SEED: u64 = 42;

/// Largest supported maximum pip (double-eighteen set).
pub const MAX_PIP_LIMIT: u8 = 18;

/// Fewest players a match can have.
pub const MIN_PLAYERS: usize = 2;

/// Most players a match can have.
pub const MAX_PLAYERS: usize = 255;

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Player names in turn order.
    pub player_names: Vec<String>,

    /// Highest pip value on any tile.
    pub max_pip: u8,

    /// Tiles dealt to each player at setup.
    pub hand_size: usize,

    /// Seed for the deck shuffle and any seeded move policy.
    pub seed: u64,
}

impl MatchConfig {
    /// Create a configuration with default pip range, hand size and seed.
    pub fn new<I, S>(player_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            player_names: player_names.into_iter().map(Into::into).collect(),
            max_pip: DEFAULT_MAX_PIP,
            hand_size: DEFAULT_HAND_SIZE,
            seed: DEFAULT_SEED,
        }
    }

    /// Set the maximum pip value.
    #[must_use]
    pub fn with_max_pip(mut self, max_pip: u8) -> Self {
        self.max_pip = max_pip;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Number of tiles in this match's deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        deck_size(self.max_pip)
    }

    /// Upper bound on resolved turns before the match must have finished.
    #[must_use]
    pub fn turn_limit(&self) -> usize {
        self.deck_size() * self.player_count()
    }

    /// Check that the configuration describes a playable match.
    pub fn validate(&self) -> Result<()> {
        let players = self.player_count();

        if players < MIN_PLAYERS {
            return Err(DominoError::config(format!(
                "need at least {MIN_PLAYERS} players, got {players}"
            )));
        }
        if players > MAX_PLAYERS {
            return Err(DominoError::config(format!(
                "at most {MAX_PLAYERS} players supported, got {players}"
            )));
        }
        if self.hand_size == 0 {
            return Err(DominoError::config("hand size must be positive"));
        }
        if self.max_pip > MAX_PIP_LIMIT {
            return Err(DominoError::config(format!(
                "maximum pip {} exceeds limit {MAX_PIP_LIMIT}",
                self.max_pip
            )));
        }

        match self.hand_size.checked_mul(players) {
            Some(needed) if needed <= self.deck_size() => {}
            needed => {
                return Err(DominoError::config(format!(
                    "dealing {} tiles to {players} players needs {}, deck has {}",
                    self.hand_size,
                    needed.map_or_else(|| "more tiles than exist".to_string(), |n| n.to_string()),
                    self.deck_size()
                )));
            }
        }

        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(["Player 1", "Player 2"])
    }
}
