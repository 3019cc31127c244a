//! Core engine types: players, spaces, the board, configuration, dice, errors.
//!
//! These are the building blocks the rules engine in [`crate::rules`]
//! mutates. They enforce local invariants (unique names, the start space
//! never being owned, price derivation) but know nothing about turns.

pub mod board;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod roster;
pub mod space;

pub use board::{
    Advance, Board, Holdings, BOARD_SIZE, DEFAULT_RENT_SCHEDULE, FANTASY_THEME, MAX_RENT,
    PROPERTY_COUNT, START_SPACE_NAME,
};
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use player::{Player, PlayerId, PlayerStatus};
pub use rng::DiceRng;
pub use roster::Roster;
pub use space::{Space, SpaceKind, PRICE_MULTIPLIER};
