//! Game event types.
//!
//! The engine records an event for every observable state change. Presenters
//! (a GUI board, a CLI log, a test harness) react to these instead of the
//! engine reaching into them.

use serde::{Deserialize, Serialize};

use crate::core::{Holdings, PlayerId};
use crate::rules::GameResult;

/// Something that happened during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player was registered. `name` is the resolved, unique name.
    PlayerJoined { player: PlayerId, name: String },

    /// A player changed position.
    PlayerMoved {
        player: PlayerId,
        from: usize,
        to: usize,
    },

    /// A player passed the start space `laps` times during one move.
    PassedStart {
        player: PlayerId,
        laps: u32,
        payout: i64,
    },

    /// Rent changed hands. `amount` is what was actually paid, which is less
    /// than the nominal rent when the payer ran out of money.
    RentPaid {
        payer: PlayerId,
        owner: PlayerId,
        space: usize,
        amount: i64,
    },

    /// A property was bought.
    SpacePurchased {
        player: PlayerId,
        space: usize,
        price: i64,
    },

    /// A player hit zero and their properties went back to the bank.
    PlayerBankrupted {
        player: PlayerId,
        released: Holdings,
    },

    /// The game has been decided. Emitted once.
    GameOver { result: GameResult },
}

impl GameEvent {
    /// The player this event is primarily about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::PlayerJoined { player, .. }
            | GameEvent::PlayerMoved { player, .. }
            | GameEvent::PassedStart { player, .. }
            | GameEvent::SpacePurchased { player, .. }
            | GameEvent::PlayerBankrupted { player, .. } => Some(*player),
            GameEvent::RentPaid { payer, .. } => Some(*payer),
            GameEvent::GameOver { result } => result.winner(),
        }
    }

    /// Short label, handy for log lines and filtering.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::PlayerJoined { .. } => "player_joined",
            GameEvent::PlayerMoved { .. } => "player_moved",
            GameEvent::PassedStart { .. } => "passed_start",
            GameEvent::RentPaid { .. } => "rent_paid",
            GameEvent::SpacePurchased { .. } => "space_purchased",
            GameEvent::PlayerBankrupted { .. } => "player_bankrupted",
            GameEvent::GameOver { .. } => "game_over",
        }
    }
}
