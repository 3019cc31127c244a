//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Dense, registration-order identifier. The first player to join is
//! `PlayerId(0)`. Spaces store a `PlayerId` as their owner back-reference.
//!
//! ## Player
//!
//! Name, balance and board position. Players are never removed; a player whose
//! balance drops to zero stays registered as [`PlayerStatus::Bankrupt`].

use serde::{Deserialize, Serialize};

/// Player identifier, assigned in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Whether a player still takes part in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Balance is strictly positive.
    Active,
    /// Balance is zero (or below). There is no way back to `Active`.
    Bankrupt,
}

/// A participant in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    balance: i64,
    position: usize,
}

impl Player {
    /// Create a player standing on the start space.
    pub fn new(id: PlayerId, name: impl Into<String>, balance: i64) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
            position: 0,
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
    pub fn balance(&self) -> i64 {
        self.balance
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Derived from the balance: active while it is strictly positive.
    #[must_use]
    pub fn status(&self) -> PlayerStatus {
        if self.balance > 0 {
            PlayerStatus::Active
        } else {
            PlayerStatus::Bankrupt
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status() == PlayerStatus::Active
    }

    /// Apply a signed change to the balance, saturating at the `i64` bounds.
    pub(crate) fn adjust_balance(&mut self, delta: i64) {
        self.balance = self.balance.saturating_add(delta);
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}
