//! Turn rotation.
//!
//! Turns go round in registration order. Players with no money left are
//! skipped. The engine does not force a structure on callers: a presenter
//! typically calls [`take_turn`](RealEstateGame::take_turn), optionally
//! [`buy_space`](RealEstateGame::buy_space) for the current player, then
//! [`end_turn`](RealEstateGame::end_turn).

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId, Result};

use super::engine::RealEstateGame;

/// Summary of one turn's movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Whose turn it was.
    pub player: PlayerId,
    /// Distance rolled.
    pub roll: u32,
    /// False when the player was bankrupt and stayed put.
    pub moved: bool,
    pub from: usize,
    pub to: usize,
    /// Laps completed during the move.
    pub laps: u32,
    /// Rent actually paid on landing, if any was owed.
    pub rent_paid: Option<i64>,
    /// Whether the rent payment wiped the player out.
    pub bankrupted: bool,
}

impl RealEstateGame {
    /// The player whose turn it is. The first player to join starts.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current
    }

    #[must_use]
    pub fn current_player_name(&self) -> Option<&str> {
        self.current.and_then(|id| self.player_name(id))
    }

    /// Move the current player by `roll`.
    ///
    /// Does not pass the turn on; call [`end_turn`](Self::end_turn) once the
    /// player is done (after an optional purchase).
    pub fn take_turn(&mut self, roll: u32) -> Result<TurnReport> {
        let player = self.current.ok_or(GameError::NoActivePlayers)?;
        let position = self.roster[player].position();

        let report = match self.move_by_id(player, roll)? {
            Some(outcome) => TurnReport {
                player,
                roll,
                moved: true,
                from: outcome.from,
                to: outcome.to,
                laps: outcome.laps,
                rent_paid: outcome.rent_paid,
                bankrupted: outcome.bankrupted,
            },
            None => TurnReport {
                player,
                roll,
                moved: false,
                from: position,
                to: position,
                laps: 0,
                rent_paid: None,
                bankrupted: false,
            },
        };
        Ok(report)
    }

    /// Pass the turn to the next player who still has money.
    ///
    /// Returns the new current player, or `None` if nobody has money left
    /// (the current player is then left unchanged).
    pub fn end_turn(&mut self) -> Option<PlayerId> {
        let current = self.current?;
        let count = self.roster.len();

        let next = (1..=count)
            .map(|offset| PlayerId::new(((current.index() + offset) % count) as u32))
            .find(|&id| self.roster[id].is_active())?;

        self.current = Some(next);
        log::debug!("turn passes to {}", self.roster[next].name());
        Some(next)
    }

    /// Whether [`buy_space`](Self::buy_space) would succeed for this player
    /// right now.
    pub fn can_buy(&self, name: &str) -> Result<bool> {
        let player = self.player(name)?;
        let space = self.board()?.get(player.position())?;
        Ok(space.can_be_bought_with(player.balance()))
    }
}
