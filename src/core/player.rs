//! Seat identification, partnerships, and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier for the four Euchre seats. Play rotates to
//! the left, which is seat `id + 1 mod 4`.
//!
//! ## Team
//!
//! Partnerships are fixed by seat parity: seats 0 and 2 against 1 and 3.
//!
//! ## PlayerMap
//!
//! Fixed-size per-seat storage backed by an array for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at a Euchre table.
pub const NUM_PLAYERS: usize = 4;

/// Seat identifier, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// Out-of-range ids are reduced modulo the table size.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id % NUM_PLAYERS as u8)
    }

    /// Create a player ID, rejecting seats that don't exist.
    #[must_use]
    pub const fn try_new(id: u8) -> Option<Self> {
        if (id as usize) < NUM_PLAYERS {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat to the left, who acts next.
    #[must_use]
    pub const fn next(self) -> Self {
        self.offset(1)
    }

    /// The seat `n` places to the left.
    #[must_use]
    pub const fn offset(self, n: u8) -> Self {
        Self((self.0 + n % NUM_PLAYERS as u8) % NUM_PLAYERS as u8)
    }

    /// The seat across the table.
    #[must_use]
    pub const fn partner(self) -> Self {
        self.offset(2)
    }

    /// The partnership this seat belongs to.
    #[must_use]
    pub const fn team(self) -> Team {
        if self.0 % 2 == 0 {
            Team::EvenSeats
        } else {
            Team::OddSeats
        }
    }

    /// Iterate over all four seats in order.
    ///
    /// ```
    /// use euchre_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..NUM_PLAYERS as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A partnership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Seats 0 and 2.
    EvenSeats,
    /// Seats 1 and 3.
    OddSeats,
}

impl Team {
    /// The opposing partnership.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Team::EvenSeats => Team::OddSeats,
            Team::OddSeats => Team::EvenSeats,
        }
    }

    /// The two seats of this partnership.
    #[must_use]
    pub const fn members(self) -> [PlayerId; 2] {
        match self {
            Team::EvenSeats => [PlayerId(0), PlayerId(2)],
            Team::OddSeats => [PlayerId(1), PlayerId(3)],
        }
    }

    /// Check whether a seat belongs to this partnership.
    #[must_use]
    pub fn contains(self, player: PlayerId) -> bool {
        player.team() == self
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use euchre_engine::core::{PlayerId, PlayerMap};
///
/// let mut tricks: PlayerMap<u8> = PlayerMap::with_default();
/// tricks[PlayerId::new(2)] += 1;
///
/// assert_eq!(tricks[PlayerId::new(2)], 1);
/// assert_eq!(tricks[PlayerId::new(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; NUM_PLAYERS],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(PlayerId(i as u8))),
        }
    }

    /// Wrap an array indexed by seat.
    pub fn from_array(data: [T; NUM_PLAYERS]) -> Self {
        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Transform every entry.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerMap<U> {
        PlayerMap::new(|p| f(self.get(p)))
    }

    /// Borrow the underlying array.
    #[must_use]
    pub fn as_array(&self) -> &[T; NUM_PLAYERS] {
        &self.data
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
