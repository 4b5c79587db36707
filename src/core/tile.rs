//! Tiles, board sides and moves.
//!
//! ## Tile
//!
//! A tile is an ordered pair of pip values `(a, b)`. The order only matters
//! once a tile is on the board: `a` faces left and `b` faces right. For
//! identity purposes (hand removal, deck census) two tiles holding the same
//! unordered pair are the same physical piece; see [`Tile::same_piece`].
//!
//! ## Move
//!
//! A `(tile, side)` pair naming which open end a tile from hand would be
//! attached to.

use serde::{Deserialize, Serialize};

/// A domino tile with two pip values.
///
/// Equality and hashing are orientation-sensitive, so `[6|3] != [3|6]`.
/// Use [`Tile::same_piece`] or [`Tile::canonical`] when orientation is
/// irrelevant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Pip value facing left once placed.
    pub a: u8,
    /// Pip value facing right once placed.
    pub b: u8,
}

impl Tile {
    /// Create a tile from two pip values.
    #[must_use]
    pub const fn new(a: u8, b: u8) -> Self {
        Self { a, b }
    }

    /// Both pip values as a tuple.
    #[must_use]
    pub const fn pips(self) -> (u8, u8) {
        (self.a, self.b)
    }

    /// True if either side shows `n`.
    #[must_use]
    pub const fn matches(self, n: u8) -> bool {
        self.a == n || self.b == n
    }

    /// The same tile turned around.
    #[must_use]
    pub const fn flip(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// True if both sides are equal.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.a == self.b
    }

    /// Sum of both sides.
    #[must_use]
    pub const fn pip_sum(self) -> u32 {
        self.a as u32 + self.b as u32
    }

    /// The orientation with the smaller value first.
    #[must_use]
    pub const fn canonical(self) -> Self {
        if self.a <= self.b {
            self
        } else {
            self.flip()
        }
    }

    /// True if `other` is the same physical piece in either orientation.
    #[must_use]
    pub const fn same_piece(self, other: Tile) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }

    /// The value on the side opposite `n`, if the tile shows `n`.
    ///
    /// A double returns its own value.
    #[must_use]
    pub const fn other_side(self, n: u8) -> Option<u8> {
        if self.a == n {
            Some(self.b)
        } else if self.b == n {
            Some(self.a)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.a, self.b)
    }
}

impl From<(u8, u8)> for Tile {
    fn from((a, b): (u8, u8)) -> Self {
        Self::new(a, b)
    }
}

/// One of the two open ends of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The end in front of the first placed tile.
    Left,
    /// The end behind the last placed tile.
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// A candidate play: a tile from hand and the end it would attach to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Tile as held in hand.
    pub tile: Tile,
    /// End of the board it attaches to.
    pub side: Side,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(tile: Tile, side: Side) -> Self {
        Self { tile, side }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on {}", self.tile, self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        let tile = Tile::new(6, 3);
        assert!(tile.matches(6));
        assert!(tile.matches(3));
        assert!(!tile.matches(0));
    }

    #[test]
    fn test_flip() {
        let tile = Tile::new(6, 3);
        assert_eq!(tile.flip(), Tile::new(3, 6));
        assert_eq!(tile.flip().flip(), tile);

        let double = Tile::new(4, 4);
        assert_eq!(double.flip(), double);
    }

    #[test]
    fn test_same_piece_ignores_orientation() {
        let tile = Tile::new(2, 5);
        assert!(tile.same_piece(Tile::new(5, 2)));
        assert!(tile.same_piece(tile));
        assert!(!tile.same_piece(Tile::new(2, 4)));
        assert_ne!(tile, tile.flip());
    }

    #[test]
    fn test_canonical() {
        assert_eq!(Tile::new(5, 2).canonical(), Tile::new(2, 5));
        assert_eq!(Tile::new(2, 5).canonical(), Tile::new(2, 5));
        assert_eq!(Tile::new(3, 3).canonical(), Tile::new(3, 3));
    }

    #[test]
    fn test_other_side() {
        let tile = Tile::new(1, 4);
        assert_eq!(tile.other_side(1), Some(4));
        assert_eq!(tile.other_side(4), Some(1));
        assert_eq!(tile.other_side(2), None);
        assert_eq!(Tile::new(5, 5).other_side(5), Some(5));
    }

    #[test]
    fn test_double_and_pip_sum() {
        assert!(Tile::new(6, 6).is_double());
        assert!(!Tile::new(6, 5).is_double());
        assert_eq!(Tile::new(6, 5).pip_sum(), 11);
        assert_eq!(Tile::new(0, 0).pip_sum(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tile::new(6, 3).to_string(), "[6|3]");
        assert_eq!(Side::Left.to_string(), "left");
        assert_eq!(
            Move::new(Tile::new(1, 2), Side::Right).to_string(),
            "[1|2] on right"
        );
    }

    #[test]
    fn test_tile_serialization() {
        let tile = Tile::new(4, 1);
        let json = serde_json::to_string(&tile).unwrap();
        let deserialized: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(tile, deserialized);
    }
}
