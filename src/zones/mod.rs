//! Where tiles live during a match: hands, the board and the boneyard.
//!
//! Every tile of the deck is in exactly one of these at any time.

pub mod board;
pub mod boneyard;
pub mod hand;

pub use board::Board;
pub use boneyard::Boneyard;
pub use hand::{Hand, MoveList};
