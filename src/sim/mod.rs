//! Seeded self-play.
//!
//! Drives a [`RealEstateGame`](crate::rules::RealEstateGame) with
//! deterministic dice and a [`BuyPolicy`] so that whole games can be run
//! from tests or the command line without a presenter.
//!
//! ```
//! use real_estate_game::core::GameConfig;
//! use real_estate_game::sim::{AlwaysBuy, Simulation, SimulationConfig};
//!
//! let mut sim = Simulation::new(
//!     GameConfig::default(),
//!     SimulationConfig::default().with_seed(7),
//!     AlwaysBuy,
//! );
//! let first = sim.run(&["A", "B"]).unwrap();
//! let again = sim.run(&["A", "B"]).unwrap();
//! assert_eq!(first, again);
//! ```

mod config;
mod policy;
mod runner;

pub use config::SimulationConfig;
pub use policy::{AlwaysBuy, BuyPolicy, KeepReserve, NeverBuy};
pub use runner::{Simulation, SimulationReport, Standing};
