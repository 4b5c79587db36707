//! Deck generation and tile census.
//!
//! A deck for maximum pip `m` holds exactly one tile per unordered pair
//! `(i, j)` with `0 <= i <= j <= m`, so it has `(m + 1)(m + 2) / 2` tiles.

use rustc_hash::FxHashSet;

use super::error::{DominoError, Result};
use super::rng::GameRng;
use super::tile::Tile;

/// Number of tiles in a deck with the given maximum pip.
///
/// ```
/// assert_eq!(domino_engine::core::deck::deck_size(6), 28);
/// assert_eq!(domino_engine::core::deck::deck_size(9), 55);
/// ```
#[must_use]
pub const fn deck_size(max_pip: u8) -> usize {
    let n = max_pip as usize + 1;
    n * (n + 1) / 2
}

/// Generate the full deck in ascending lexicographic order.
#[must_use]
pub fn generate(max_pip: u8) -> Vec<Tile> {
    let mut deck = Vec::with_capacity(deck_size(max_pip));
    for i in 0..=max_pip {
        for j in i..=max_pip {
            deck.push(Tile::new(i, j));
        }
    }
    deck
}

/// Shuffle a deck in place.
pub fn shuffle(deck: &mut [Tile], rng: &mut GameRng) {
    rng.shuffle(deck);
}

/// Check that `tiles` is exactly the deck for `max_pip`: every tile in
/// bounds, no piece twice, none missing.
pub fn census<I>(max_pip: u8, tiles: I) -> Result<()>
where
    I: IntoIterator<Item = Tile>,
{
    let mut seen = FxHashSet::default();

    for tile in tiles {
        if tile.a > max_pip || tile.b > max_pip {
            return Err(DominoError::config(format!(
                "tile {tile} exceeds maximum pip {max_pip}"
            )));
        }
        if !seen.insert(tile.canonical()) {
            return Err(DominoError::config(format!("tile {tile} appears twice")));
        }
    }

    let expected = deck_size(max_pip);
    if seen.len() != expected {
        return Err(DominoError::config(format!(
            "found {} tiles, deck has {expected}",
            seen.len()
        )));
    }

    Ok(())
}
