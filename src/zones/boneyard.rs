//! The undealt draw pile.

use serde::{Deserialize, Serialize};

use crate::core::Tile;

/// Tiles left over after dealing. Drawn from the top (end of the vec);
/// never refilled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boneyard {
    tiles: Vec<Tile>,
}

impl Boneyard {
    /// Wrap the remainder of a dealt deck.
    #[must_use]
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Take the top tile, or `None` once exhausted.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Remaining tiles, bottom first.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of remaining tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True once every tile has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
