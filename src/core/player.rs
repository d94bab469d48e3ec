//! Players and per-player storage.
//!
//! ## PlayerId
//!
//! Type-safe index into a game's roster, supporting 1-255 players.
//!
//! ## Player
//!
//! A seat at the table: name, balance, position and the board slots the
//! player has bought. Payment semantics live here.
//!
//! ## PlayerMap
//!
//! Roster storage backed by `Vec` for O(1) access by `PlayerId`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Amount of money. Signed so balances can dip below zero before an
/// elimination check runs.
pub type Money = i64;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
/// Ids are never reused, so an id stays valid after elimination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use trade_board::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player's economic and positional state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    balance: Money,
    /// Cumulative steps taken. The board slot is `position % board_len`,
    /// and `position / board_len` is the number of completed laps.
    pub position: u64,
    /// Board slots owned, in purchase order.
    holdings: SmallVec<[usize; 8]>,
}

impl Player {
    /// Create a player at the start square.
    pub fn new(id: PlayerId, name: impl Into<String>, balance: Money) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
            position: 0,
            holdings: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Board slots owned by this player, oldest purchase first.
    #[must_use]
    pub fn holdings(&self) -> &[usize] {
        &self.holdings
    }

    /// Record a newly bought board slot.
    pub fn add_holding(&mut self, slot: usize) {
        self.holdings.push(slot);
    }

    /// Add `delta` to the balance, unconditionally, saturating at the
    /// bounds of `Money`.
    ///
    /// Used for bonuses, penalties and purchase debits. The balance may go
    /// negative; whether that ends the player's game is decided elsewhere.
    pub fn adjust_balance(&mut self, delta: Money) {
        self.balance = self.balance.saturating_add(delta);
    }

    /// Transfer `amount` to `recipient` if this player can cover it.
    ///
    /// All-or-nothing: returns `false` and leaves both balances untouched
    /// when `balance < amount`.
    pub fn pay(&mut self, amount: Money, recipient: &mut Player) -> bool {
        if self.balance < amount {
            return false;
        }
        self.balance -= amount;
        recipient.balance = recipient.balance.saturating_add(amount);
        true
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (${}, position {})", self.name, self.balance, self.position)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Borrow two distinct players mutably at once.
    ///
    /// Returns `None` when `a == b`.
    pub fn get_pair_mut(&mut self, a: PlayerId, b: PlayerId) -> Option<(&mut T, &mut T)> {
        let (i, j) = (a.index(), b.index());
        if i == j {
            return None;
        }
        if i < j {
            let (lo, hi) = self.data.split_at_mut(j);
            Some((&mut lo[i], &mut hi[0]))
        } else {
            let (lo, hi) = self.data.split_at_mut(i);
            Some((&mut hi[0], &mut lo[j]))
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
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
