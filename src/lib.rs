//! # real-estate-game
//!
//! Rules engine for a turn-based, Monopoly-style real estate board game.
//!
//! ## Rules in Brief
//!
//! 1. **Board**: 25 spaces in a loop. Space 0 is the start space and pays
//!    out every time a player laps the board; the other 24 are properties.
//!
//! 2. **Property**: priced at five times its rent. A player can buy the
//!    unowned property they stand on if their balance strictly exceeds the
//!    price.
//!
//! 3. **Rent**: landing on someone else's property costs its rent. A player
//!    who cannot strictly cover it pays everything they have, goes bankrupt
//!    and loses all their properties to the bank.
//!
//! 4. **Winning**: the game is over when at most one player has money left.
//!
//! ## Architecture
//!
//! - **Caller-driven**: the engine never rolls dice or waits for input. A
//!   GUI, CLI or test passes in move distances and reads state back.
//!
//! - **Observers, not callbacks into the UI**: every state change is
//!   recorded as a [`GameEvent`] and pushed to subscribed observers.
//!
//! - **Persistent Data Structures**: board spaces, players and the event
//!   history are stored in `im-rs` vectors.
//!
//! ## Modules
//!
//! - `core`: Players, spaces, board, configuration, dice, errors
//! - `events`: Game events and the observer registry
//! - `rules`: The rules engine and turn rotation
//! - `sim`: Seeded self-play with purchase policies

pub mod core;
pub mod events;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Board, DiceRng, GameConfig, GameError, Player, PlayerId, PlayerStatus, Result, Space,
    SpaceKind, BOARD_SIZE,
};

pub use crate::events::{GameEvent, GameObserver, ObserverId, ObserverRegistry};

pub use crate::rules::{GameResult, RealEstateGame, TurnReport};

pub use crate::sim::{
    AlwaysBuy, BuyPolicy, KeepReserve, NeverBuy, Simulation, SimulationConfig, SimulationReport,
};
