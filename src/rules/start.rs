//! Choosing who opens the match and with which tile.
//!
//! Doubles always outrank non-doubles: a double `(v, v)` scores `2v + 100`,
//! anything else scores its pip sum. The first tile reaching the highest
//! score wins, scanning seats in order and each hand in receive order.

use crate::core::{PlayerId, PlayerMap, Tile};
use crate::zones::Hand;

const DOUBLE_BONUS: u32 = 100;

/// Opening priority of a tile.
#[must_use]
pub fn opening_score(tile: Tile) -> u32 {
    if tile.is_double() {
        tile.pip_sum() + DOUBLE_BONUS
    } else {
        tile.pip_sum()
    }
}

/// The seat holding the best opening tile, and that tile.
///
/// Returns `None` only if every hand is empty.
#[must_use]
pub fn find_starting_tile(hands: &PlayerMap<Hand>) -> Option<(PlayerId, Tile)> {
    let mut best: Option<(u32, PlayerId, Tile)> = None;

    for (player, hand) in hands.iter() {
        for &tile in hand.tiles() {
            let score = opening_score(tile);
            if best.map_or(true, |(top, _, _)| score > top) {
                best = Some((score, player, tile));
            }
        }
    }

    best.map(|(_, player, tile)| (player, tile))
}
