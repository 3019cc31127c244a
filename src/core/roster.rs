//! Player registry keyed by unique name.
//!
//! Backed by an `im::Vector` in registration order plus an `FxHashMap` name
//! index. Registration order doubles as
//! turn order and as the tie-break order for "first active player".

use im::Vector;
use rustc_hash::FxHashMap;
use std::ops::{Index, IndexMut};

use super::error::{GameError, Result};
use super::player::{Player, PlayerId};

/// All registered players.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    players: Vector<Player>,
    by_name: FxHashMap<String, PlayerId>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Pick a name nobody holds yet.
    ///
    /// A taken name gets a counted suffix: "Alice" becomes "Alice (1)",
    /// then "Alice (2)" and so on until the candidate is free.
    #[must_use]
    pub fn unique_name(&self, requested: &str) -> String {
        if !self.by_name.contains_key(requested) {
            return requested.to_string();
        }

        let mut count = 1usize;
        loop {
            let candidate = format!("{requested} ({count})");
            if !self.by_name.contains_key(&candidate) {
                return candidate;
            }
            count += 1;
        }
    }

    /// Register a player under a unique variant of `name`.
    pub fn register(&mut self, name: &str, balance: i64) -> PlayerId {
        let name = self.unique_name(name);
        let id = PlayerId::new(self.players.len() as u32);

        self.by_name.insert(name.clone(), id);
        self.players.push_back(Player::new(id, name, balance));
        id
    }

    /// Look up a player ID by exact name.
    pub fn id_of(&self, name: &str) -> Result<PlayerId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GameError::unknown_player(name))
    }

    /// Get a player by ID.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Get a player by name.
    pub fn by_name(&self, name: &str) -> Result<&Player> {
        let id = self.id_of(name)?;
        Ok(&self[id])
    }

    /// Iterate over players in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Iterate over players with a strictly positive balance.
    pub fn active(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    /// Move `amount` from one player to another.
    ///
    /// Both sides are updated together, so the pair's combined balance is
    /// unchanged.
    pub fn transfer(&mut self, from: PlayerId, to: PlayerId, amount: i64) {
        self[from].adjust_balance(-amount);
        self[to].adjust_balance(amount);
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        &self.players[id.index()]
    }
}

impl IndexMut<PlayerId> for Roster {
    fn index_mut(&mut self, id: PlayerId) -> &mut Self::Output {
        &mut self.players[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_assigns_dense_ids() {
        let mut roster = Roster::new();
        let a = roster.register("A", 100);
        let b = roster.register("B", 200);

        assert_eq!(a, PlayerId::new(0));
        assert_eq!(b, PlayerId::new(1));
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[b].balance(), 200);
    }

    #[test]
    fn test_duplicate_names_get_suffixes() {
        let mut roster = Roster::new();
        let first = roster.register("Alice", 10);
        let second = roster.register("Alice", 10);
        let third = roster.register("Alice", 10);

        assert_eq!(roster[first].name(), "Alice");
        assert_eq!(roster[second].name(), "Alice (1)");
        assert_eq!(roster[third].name(), "Alice (2)");
    }

    #[test]
    fn test_suffix_skips_taken_candidates() {
        let mut roster = Roster::new();
        roster.register("Alice", 10);
        roster.register("Alice (1)", 10);

        assert_eq!(roster.unique_name("Alice"), "Alice (2)");
    }

    #[test]
    fn test_unknown_name() {
        let roster = Roster::new();
        assert_eq!(
            roster.id_of("Nobody"),
            Err(GameError::unknown_player("Nobody"))
        );
    }

    #[test]
    fn test_transfer_conserves_total() {
        let mut roster = Roster::new();
        let a = roster.register("A", 300);
        let b = roster.register("B", 50);

        roster.transfer(a, b, 120);

        assert_eq!(roster[a].balance(), 180);
        assert_eq!(roster[b].balance(), 170);
        assert_eq!(roster[a].balance() + roster[b].balance(), 350);
    }

    #[test]
    fn test_active_filters_zero_balances() {
        let mut roster = Roster::new();
        roster.register("A", 0);
        roster.register("B", 5);
        roster.register("C", -1);

        let active: Vec<_> = roster.active().map(|p| p.name().to_string()).collect();
        assert_eq!(active, vec!["B".to_string()]);
    }
}
