//! A player's held tiles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DominoError, Move, Result, Side, Tile};

/// Legal moves for one hand. Most hands produce a handful, so they stay
/// on the stack.
pub type MoveList = SmallVec<[Move; 8]>;

/// Tiles held by one player, in the order they were received.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from tiles, rejecting duplicate pieces.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Result<Self> {
        let mut hand = Self::new();
        for tile in tiles {
            hand.insert(tile)?;
        }
        Ok(hand)
    }

    /// Add a tile (dealt or drawn).
    ///
    /// Fails with [`DominoError::DuplicateTile`] if the same piece is
    /// already held in either orientation.
    pub fn insert(&mut self, tile: Tile) -> Result<()> {
        if self.contains(tile) {
            return Err(DominoError::DuplicateTile { tile });
        }
        self.tiles.push(tile);
        Ok(())
    }

    /// Remove the held copy of `tile` and return it as it was held.
    pub fn remove(&mut self, tile: Tile) -> Result<Tile> {
        let pos = self
            .tiles
            .iter()
            .position(|held| held.same_piece(tile))
            .ok_or(DominoError::NotInHand { tile })?;
        Ok(self.tiles.remove(pos))
    }

    /// True if the hand holds this piece in either orientation.
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.iter().any(|held| held.same_piece(tile))
    }

    /// Every `(tile, side)` play against the given open ends.
    ///
    /// Enumerates tiles in hand order; for each, a left entry (if it shows
    /// `left`) comes before a right entry (if it shows `right`). A tile
    /// showing both ends yields both entries.
    #[must_use]
    pub fn legal_moves(&self, left: u8, right: u8) -> MoveList {
        let mut moves = MoveList::new();
        for &tile in &self.tiles {
            if tile.matches(left) {
                moves.push(Move::new(tile, Side::Left));
            }
            if tile.matches(right) {
                moves.push(Move::new(tile, Side::Right));
            }
        }
        moves
    }

    /// Total pips held, used to break blocked games.
    #[must_use]
    pub fn pip_sum(&self) -> u32 {
        self.tiles.iter().map(|t| t.pip_sum()).sum()
    }

    /// Held tiles in receive order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of held tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True once every tile has been played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in &self.tiles {
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(tiles: &[(u8, u8)]) -> Hand {
        Hand::from_tiles(tiles.iter().copied().map(Tile::from)).unwrap()
    }

    #[test]
    fn test_legal_moves_order() {
        let h = hand(&[(6, 3), (2, 2), (3, 5)]);
        let moves = h.legal_moves(6, 5);

        assert_eq!(
            moves.as_slice(),
            &[
                Move::new(Tile::new(6, 3), Side::Left),
                Move::new(Tile::new(3, 5), Side::Right),
            ]
        );
    }

    #[test]
    fn test_tile_matching_both_ends_yields_two_moves() {
        let h = hand(&[(4, 1)]);
        let moves = h.legal_moves(4, 1);
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].side, Side::Left);
        assert_eq!(moves[1].side, Side::Right);
    }

    #[test]
    fn test_double_on_equal_ends_yields_two_moves() {
        let h = hand(&[(3, 3)]);
        let moves = h.legal_moves(3, 3);
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_no_legal_moves() {
        let h = hand(&[(0, 1), (1, 2)]);
        assert!(h.legal_moves(5, 6).is_empty());
    }

    #[test]
    fn test_remove() {
        let mut h = hand(&[(6, 3), (2, 2)]);

        assert_eq!(h.remove(Tile::new(6, 3)).unwrap(), Tile::new(6, 3));
        assert_eq!(h.tiles(), &[Tile::new(2, 2)]);

        assert_eq!(
            h.remove(Tile::new(6, 3)),
            Err(DominoError::NotInHand { tile: Tile::new(6, 3) })
        );
    }

    #[test]
    fn test_remove_matches_either_orientation() {
        let mut h = hand(&[(1, 5)]);
        assert_eq!(h.remove(Tile::new(5, 1)).unwrap(), Tile::new(1, 5));
        assert!(h.is_empty());
    }

    #[test]
    fn test_insert_rejects_duplicate_piece() {
        let mut h = hand(&[(1, 5)]);
        assert_eq!(
            h.insert(Tile::new(5, 1)),
            Err(DominoError::DuplicateTile { tile: Tile::new(5, 1) })
        );
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn test_pip_sum() {
        assert_eq!(hand(&[(6, 3), (2, 2), (0, 1)]).pip_sum(), 14);
        assert_eq!(Hand::new().pip_sum(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(hand(&[(6, 3), (2, 2)]).to_string(), "[6|3][2|2]");
    }
}
