//! Move selection policies.
//!
//! The engine computes the legal moves for the player on turn and asks a
//! `MovePolicy` to pick one. Swapping the policy changes how players play
//! without touching any rule:
//!
//! - `FirstLegal`: first move in enumeration order (reference behaviour)
//! - `RandomPolicy`: uniform choice from a seeded stream
//! - `HeaviestTile`: dump the highest-pip tile first

use crate::core::{GameRng, Move, PlayerId};
use crate::zones::Hand;

/// What a policy can see when choosing a move.
#[derive(Clone, Copy, Debug)]
pub struct TurnView<'a> {
    /// Seat on turn.
    pub player: PlayerId,
    /// That seat's hand, including any tiles just drawn.
    pub hand: &'a Hand,
    /// Left open end.
    pub left: u8,
    /// Right open end.
    pub right: u8,
    /// Tiles already on the board.
    pub board_len: usize,
    /// Tiles left in the boneyard.
    pub boneyard_len: usize,
}

/// Picks one of the legal moves for the player on turn.
pub trait MovePolicy {
    /// Choose a move. `moves` is never empty, and the returned move must be
    /// one of its entries or the engine rejects it.
    fn choose(&mut self, view: &TurnView<'_>, moves: &[Move]) -> Move;

    /// Short name for logs.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<P: MovePolicy + ?Sized> MovePolicy for Box<P> {
    fn choose(&mut self, view: &TurnView<'_>, moves: &[Move]) -> Move {
        (**self).choose(view, moves)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Always plays the first enumerated move.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl MovePolicy for FirstLegal {
    fn choose(&mut self, _view: &TurnView<'_>, moves: &[Move]) -> Move {
        moves[0]
    }

    fn name(&self) -> &'static str {
        "first"
    }
}

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    /// Create a random policy on its own stream of `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("policy"),
        }
    }
}

impl MovePolicy for RandomPolicy {
    fn choose(&mut self, _view: &TurnView<'_>, moves: &[Move]) -> Move {
        *self.rng.choose(moves).unwrap_or(&moves[0])
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Plays the tile with the highest pip sum; earliest move on ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeaviestTile;

impl MovePolicy for HeaviestTile {
    fn choose(&mut self, _view: &TurnView<'_>, moves: &[Move]) -> Move {
        let mut best = moves[0];
        for &mv in &moves[1..] {
            if mv.tile.pip_sum() > best.tile.pip_sum() {
                best = mv;
            }
        }
        best
    }

    fn name(&self) -> &'static str {
        "heaviest"
    }
}
