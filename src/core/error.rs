//! Engine error types.
//!
//! Only true faults are errors: unknown names, malformed setup input, and
//! asking for a winner when nobody is left standing. Outcomes the rules
//! simply forbid (a failed purchase, a bankrupt player trying to move) are
//! reported as `false` or as a no-op, never as an `Err`.

use thiserror::Error;

use super::board::PROPERTY_COUNT;

/// Result alias used throughout the engine.
pub type Result<T, E = GameError> = std::result::Result<T, E>;

/// Faults raised by the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// No player is registered under this name.
    #[error("unknown player: {name}")]
    UnknownPlayer { name: String },

    /// The rent schedule does not cover every property space.
    #[error("rent schedule must hold exactly {expected} entries, got {found}")]
    MalformedSchedule { expected: usize, found: usize },

    /// A rent schedule entry is below zero.
    #[error("rent for property {index} is negative: {rent}")]
    NegativeRent { index: usize, rent: i64 },

    /// A rent so large its purchase price would not fit in an `i64`.
    #[error("rent for property {index} is too high: {rent} (max {max})")]
    RentTooHigh { index: usize, rent: i64, max: i64 },
    /// Every player has a zero balance, so there is no winner to report.
    #[error("no active players remain")]
    NoActivePlayers,

    /// Spaces have not been created yet.
    #[error("board has not been created")]
    BoardNotCreated,

    /// `create_spaces` was called on a game that already has a board.
    #[error("board has already been created")]
    BoardAlreadyCreated,

    /// Space index outside `0..25`.
    #[error("no space at index {index}")]
    UnknownSpace { index: usize },
}

impl GameError {
    pub(crate) fn unknown_player(name: impl Into<String>) -> Self {
        Self::UnknownPlayer { name: name.into() }
    }

    pub(crate) fn malformed_schedule(found: usize) -> Self {
        Self::MalformedSchedule {
            expected: PROPERTY_COUNT,
            found,
        }
    }
}
