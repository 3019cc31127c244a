//! Simulation configuration parameters.

use serde::{Deserialize, Serialize};

/// Dice and stopping rules for simulated games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Random seed for the dice.
    /// Same seed produces the same games.
    pub seed: u64,

    /// Dice rolled per turn.
    pub dice_count: u32,

    /// Faces per die.
    pub dice_sides: u32,

    /// Turn cap. A game still undecided after this many turns is reported
    /// without a result.
    pub max_turns: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            dice_count: 1,
            dice_sides: 6,
            max_turns: 1_000,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom dice.
    #[must_use]
    pub fn with_dice(mut self, count: u32, sides: u32) -> Self {
        self.dice_count = count;
        self.dice_sides = sides;
        self
    }

    /// Create a new config with custom turn cap.
    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }
}
