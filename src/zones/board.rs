//! The line of play.
//!
//! The board is an ordered run of tiles, each stored in its placed
//! orientation, so the left open end is the first tile's `a` and the right
//! open end is the last tile's `b`. All orientation logic lives in
//! [`Board::attach`]; callers never touch the sequence directly.
//!
//! Backed by `im::Vector` so snapshots taken for events are O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{DominoError, Result, Side, Tile};

/// Placed tiles with two open ends.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vector<Tile>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board holding only the opening tile.
    ///
    /// The opening tile has no orientation constraint; its two values
    /// become the initial left and right ends.
    #[must_use]
    pub fn with_opening(tile: Tile) -> Self {
        let mut tiles = Vector::new();
        tiles.push_back(tile);
        Self { tiles }
    }

    /// Rebuild a board from tiles already in placed orientation.
    ///
    /// Fails if adjacent tiles do not touch with equal values.
    pub fn from_placed(tiles: impl IntoIterator<Item = Tile>) -> Result<Self> {
        let tiles: Vector<Tile> = tiles.into_iter().collect();
        let mut prev: Option<Tile> = None;
        for tile in tiles.iter().copied() {
            if let Some(p) = prev {
                if p.b != tile.a {
                    return Err(DominoError::config(format!(
                        "board tiles {p} and {tile} do not touch"
                    )));
                }
            }
            prev = Some(tile);
        }
        Ok(Self { tiles })
    }

    /// The `(left, right)` open end values.
    pub fn open_ends(&self) -> Result<(u8, u8)> {
        match (self.tiles.front(), self.tiles.back()) {
            (Some(first), Some(last)) => Ok((first.a, last.b)),
            _ => Err(DominoError::EmptyBoard),
        }
    }

    /// The open end value on one side.
    pub fn end(&self, side: Side) -> Result<u8> {
        let (left, right) = self.open_ends()?;
        Ok(match side {
            Side::Left => left,
            Side::Right => right,
        })
    }

    /// Attach `tile` to one end, turning it so the touching values match.
    ///
    /// Returns the tile in the orientation it was placed. A double is
    /// placed as-is. Fails with [`DominoError::IllegalMove`] if the tile
    /// does not show the targeted end value.
    pub fn attach(&mut self, tile: Tile, side: Side) -> Result<Tile> {
        let end = self.end(side)?;

        let placed = match side {
            Side::Left if tile.b == end => tile,
            Side::Left if tile.a == end => tile.flip(),
            Side::Right if tile.a == end => tile,
            Side::Right if tile.b == end => tile.flip(),
            _ => return Err(DominoError::IllegalMove { tile, side, end }),
        };

        match side {
            Side::Left => self.tiles.push_front(placed),
            Side::Right => self.tiles.push_back(placed),
        }
        Ok(placed)
    }

    /// Placed tiles from left to right.
    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    /// Cheap snapshot of the placed tiles.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Tile> {
        self.tiles.clone()
    }

    /// Number of placed tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True before the opening tile is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.tiles.is_empty() {
            return f.write_str("(empty)");
        }
        for tile in &self.tiles {
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_ends() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.open_ends(), Err(DominoError::EmptyBoard));
    }

    #[test]
    fn test_opening_sets_both_ends() {
        let board = Board::with_opening(Tile::new(6, 4));
        assert_eq!(board.open_ends().unwrap(), (6, 4));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_attach_left_as_is() {
        let mut board = Board::with_opening(Tile::new(6, 4));
        let placed = board.attach(Tile::new(2, 6), Side::Left).unwrap();

        assert_eq!(placed, Tile::new(2, 6));
        assert_eq!(board.open_ends().unwrap(), (2, 4));
    }

    #[test]
    fn test_attach_left_flipped() {
        let mut board = Board::with_opening(Tile::new(6, 4));
        let placed = board.attach(Tile::new(6, 1), Side::Left).unwrap();

        assert_eq!(placed, Tile::new(1, 6));
        assert_eq!(board.open_ends().unwrap(), (1, 4));
        assert_eq!(board.iter().collect::<Vec<_>>(), vec![Tile::new(1, 6), Tile::new(6, 4)]);
    }

    #[test]
    fn test_attach_right_as_is_and_flipped() {
        let mut board = Board::with_opening(Tile::new(6, 4));

        assert_eq!(board.attach(Tile::new(4, 3), Side::Right).unwrap(), Tile::new(4, 3));
        assert_eq!(board.open_ends().unwrap(), (6, 3));

        assert_eq!(board.attach(Tile::new(5, 3), Side::Right).unwrap(), Tile::new(3, 5));
        assert_eq!(board.open_ends().unwrap(), (6, 5));
        assert_eq!(board.to_string(), "[6|4][4|3][3|5]");
    }

    #[test]
    fn test_attach_double_keeps_end() {
        let mut board = Board::with_opening(Tile::new(2, 5));
        assert_eq!(board.attach(Tile::new(5, 5), Side::Right).unwrap(), Tile::new(5, 5));
        assert_eq!(board.attach(Tile::new(2, 2), Side::Left).unwrap(), Tile::new(2, 2));
        assert_eq!(board.open_ends().unwrap(), (2, 5));
    }

    #[test]
    fn test_attach_mismatch_is_rejected() {
        let mut board = Board::with_opening(Tile::new(6, 4));
        let err = board.attach(Tile::new(1, 2), Side::Left).unwrap_err();

        assert_eq!(
            err,
            DominoError::IllegalMove {
                tile: Tile::new(1, 2),
                side: Side::Left,
                end: 6
            }
        );
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_attach_to_empty_board() {
        let mut board = Board::new();
        assert_eq!(board.attach(Tile::new(1, 2), Side::Right), Err(DominoError::EmptyBoard));
    }

    #[test]
    fn test_from_placed() {
        let board = Board::from_placed([Tile::new(1, 6), Tile::new(6, 4)]).unwrap();
        assert_eq!(board.open_ends().unwrap(), (1, 4));

        assert!(Board::from_placed([Tile::new(1, 6), Tile::new(4, 6)]).is_err());
        assert!(Board::from_placed([]).unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = Board::with_opening(Tile::new(3, 3));
        let snapshot = board.snapshot();
        board.attach(Tile::new(3, 1), Side::Right).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(board.len(), 2);
    }
}
