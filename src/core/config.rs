//! Game configuration.
//!
//! Callers describe the board economy with a `GameConfig` and hand it to
//! [`RealEstateGame::from_config`](crate::rules::RealEstateGame::from_config).
//! Board size and property names are fixed; only money is configurable.

use serde::{Deserialize, Serialize};

use super::board::DEFAULT_RENT_SCHEDULE;

/// Board economy and starting conditions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Credited to a player each time they lap the board.
    pub start_payout: i64,

    /// Rent for each of the 24 properties, in board order.
    pub rent_schedule: Vec<i64>,

    /// Balance given to players created through a simulation or CLI.
    pub starting_balance: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_payout: 200,
            rent_schedule: DEFAULT_RENT_SCHEDULE.to_vec(),
            starting_balance: 1000,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lap payout.
    #[must_use]
    pub fn with_start_payout(mut self, payout: i64) -> Self {
        self.start_payout = payout;
        self
    }

    /// Set the rent schedule. Validated when the board is built.
    #[must_use]
    pub fn with_rent_schedule(mut self, rents: impl Into<Vec<i64>>) -> Self {
        self.rent_schedule = rents.into();
        self
    }

    /// Use the same rent on every property.
    #[must_use]
    pub fn with_flat_rent(mut self, rent: i64) -> Self {
        self.rent_schedule = vec![rent; DEFAULT_RENT_SCHEDULE.len()];
        self
    }

    /// Set the starting balance.
    #[must_use]
    pub fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.start_payout, 200);
        assert_eq!(config.rent_schedule.len(), 24);
        assert_eq!(config.rent_schedule[0], 50);
        assert_eq!(config.rent_schedule[23], 350);
        assert_eq!(config.starting_balance, 1000);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_start_payout(150)
            .with_flat_rent(20)
            .with_starting_balance(500);

        assert_eq!(config.start_payout, 150);
        assert!(config.rent_schedule.iter().all(|&r| r == 20));
        assert_eq!(config.starting_balance, 500);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_start_payout(300);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"start_payout": 75}"#).unwrap();
        assert_eq!(config.start_payout, 75);
        assert_eq!(config.rent_schedule, DEFAULT_RENT_SCHEDULE.to_vec());
        assert_eq!(config.starting_balance, 1000);
    }
}
