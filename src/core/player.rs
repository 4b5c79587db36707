//! Seats at the table.
//!
//! `PlayerId` is a 0-based seat index in turn order (up to 255 seats) and
//! `PlayerMap<T>` keeps one value per seat, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat index in turn order. The first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Seat index for slice access.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat on turn after this one, wrapping around the table.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }

    /// Every seat of a `player_count` table, in turn order.
    ///
    /// ```
    /// use domino_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, [PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(|seat| PlayerId(seat as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat, in seat order.
///
/// ```
/// use domino_engine::core::{PlayerId, PlayerMap};
///
/// let pips = PlayerMap::from_vec(vec![14, 3, 9]);
/// assert_eq!(pips[PlayerId::new(1)], 3);
/// assert_eq!(pips.player_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// A map holding `T::default()` for each of `player_count` seats.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::from_vec((0..player_count).map(|_| T::default()).collect())
    }

    /// Wrap values given in seat order.
    ///
    /// # Panics
    ///
    /// If there are no seats or more than 255.
    pub fn from_vec(seats: Vec<T>) -> Self {
        assert!(!seats.is_empty(), "a table needs at least one seat");
        assert!(seats.len() <= 255, "at most 255 seats supported");
        Self { seats }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// `(seat, value)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.seats
            .iter()
            .enumerate()
            .map(|(seat, value)| (PlayerId(seat as u8), value))
    }

    /// Values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.seats.iter()
    }

    /// Derive a new per-seat value from each entry.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerMap<U> {
        PlayerMap {
            seats: self.seats.iter().map(f).collect(),
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_display_and_order() {
        assert_eq!(PlayerId::new(2).to_string(), "Player 2");
        assert!(PlayerId::new(0) < PlayerId::new(1));
        assert_eq!(PlayerId::new(5).index(), 5);
    }

    #[test]
    fn test_next_wraps_around_table() {
        assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
        assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
        assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
    }

    #[test]
    fn test_all_seats_of_large_table() {
        let seats: Vec<_> = PlayerId::all(255).collect();
        assert_eq!(seats.len(), 255);
        assert_eq!(seats[254], PlayerId::new(254));
    }

    #[test]
    fn test_hands_by_seat() {
        let mut held: PlayerMap<Vec<u8>> = PlayerMap::with_default(2);
        held[PlayerId::new(1)].extend([6, 6]);

        assert!(held[PlayerId::new(0)].is_empty());
        assert_eq!(held.map(Vec::len).values().copied().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_iter_pairs_seats_with_values() {
        let names = PlayerMap::from_vec(vec!["Ana", "Bo", "Cy"]);
        let pairs: Vec<_> = names.iter().collect();
        assert_eq!(pairs[2], (PlayerId::new(2), &"Cy"));
    }

    #[test]
    fn test_player_map_serialization() {
        let pips = PlayerMap::from_vec(vec![12u32, 0]);
        let json = serde_json::to_string(&pips).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(pips, deserialized);
    }

    #[test]
    #[should_panic(expected = "a table needs at least one seat")]
    fn test_empty_table() {
        let _: PlayerMap<u32> = PlayerMap::with_default(0);
    }
}
