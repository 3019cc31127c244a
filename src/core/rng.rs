//! Deterministic dice for simulated games.
//!
//! The engine itself never rolls: callers pass a move distance. This RNG is
//! what the bundled simulation driver and CLI use in place of a dice button.
//!
//! ```
//! use real_estate_game::core::DiceRng;
//!
//! let mut dice = DiceRng::new(42);
//! let roll = dice.roll(2, 6);
//! assert!((2..=12).contains(&roll));
//!
//! // Same seed, same rolls.
//! let mut again = DiceRng::new(42);
//! assert_eq!(again.roll(2, 6), roll);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded dice roller with forking for independent games.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl DiceRng {
    /// Create a new roller with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this roller was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent, deterministic stream (one per simulated game).
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Roll `count` dice with `sides` faces each and return the total.
    ///
    /// Zero dice, or dice with zero faces, roll 0.
    pub fn roll(&mut self, count: u32, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        (0..count).map(|_| self.inner.gen_range(1..=sides)).sum()
    }
}
