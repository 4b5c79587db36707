//! Terminal match results.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The winner played their last tile.
    HandEmptied,
    /// A full round passed with no play; lowest pip sum wins.
    BlockedLowestPipSum,
}

impl std::fmt::Display for WinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinReason::HandEmptied => f.write_str("hand-emptied"),
            WinReason::BlockedLowestPipSum => f.write_str("blocked-lowest-pip-sum"),
        }
    }
}

/// Outcome of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Winning seat.
    pub winner: PlayerId,

    /// How the match ended.
    pub reason: WinReason,

    /// Pips left in every hand when the match ended.
    pub pip_sums: PlayerMap<u32>,
}

impl MatchResult {
    /// Result for a player who emptied their hand.
    #[must_use]
    pub fn hand_emptied(winner: PlayerId, pip_sums: PlayerMap<u32>) -> Self {
        Self {
            winner,
            reason: WinReason::HandEmptied,
            pip_sums,
        }
    }

    /// Result for a blocked board.
    ///
    /// The winner is the lowest seat index among the players holding the
    /// fewest pips.
    #[must_use]
    pub fn blocked(pip_sums: PlayerMap<u32>) -> Self {
        let winner = pip_sums
            .iter()
            .min_by_key(|&(player, &pips)| (pips, player))
            .map(|(player, _)| player)
            .unwrap_or(PlayerId::new(0));

        Self {
            winner,
            reason: WinReason::BlockedLowestPipSum,
            pip_sums,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }

    /// Every player sharing the winning pip sum of a blocked game.
    ///
    /// For a hand-emptied win this is just the winner. More than one entry
    /// means the blocked tie-break decided by seat order.
    #[must_use]
    pub fn tied_players(&self) -> Vec<PlayerId> {
        match self.reason {
            WinReason::HandEmptied => vec![self.winner],
            WinReason::BlockedLowestPipSum => {
                let best = self.pip_sums[self.winner];
                self.pip_sums
                    .iter()
                    .filter(|&(_, &pips)| pips == best)
                    .map(|(player, _)| player)
                    .collect()
            }
        }
    }
}
