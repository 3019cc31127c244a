//! The real estate rules engine.
//!
//! `RealEstateGame` owns the board and the player roster and enforces every
//! rule: movement with lap payouts, rent, purchases, bankruptcy and win
//! detection. The public API is keyed by player name; [`PlayerId`]s are
//! exposed for presenters that want a stable handle.
//!
//! ## Example
//!
//! ```
//! use real_estate_game::rules::RealEstateGame;
//!
//! let mut game = RealEstateGame::new();
//! game.create_spaces(200, &[50; 24]).unwrap();
//! game.create_player("A", 1000);
//! game.create_player("B", 1000);
//!
//! game.move_player("A", 1).unwrap();
//! assert!(game.buy_space("A").unwrap());
//!
//! game.move_player("B", 1).unwrap();
//! assert_eq!(game.player_balance("A").unwrap(), 800);
//! assert_eq!(game.player_balance("B").unwrap(), 950);
//! assert_eq!(game.check_game_over().unwrap(), None);
//! ```

use im::Vector;

use crate::core::{
    Board, GameConfig, GameError, Holdings, Player, PlayerId, Result, Roster, Space,
};
use crate::events::{GameEvent, GameObserver, ObserverId, ObserverRegistry};

use super::result::GameResult;

/// What a single move did. `None` from the mover means the player was
/// bankrupt and stayed put.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MoveOutcome {
    pub from: usize,
    pub to: usize,
    pub laps: u32,
    pub rent_paid: Option<i64>,
    pub bankrupted: bool,
}

/// Board game engine.
#[derive(Debug, Default)]
pub struct RealEstateGame {
    pub(super) board: Option<Board>,
    pub(super) roster: Roster,
    pub(super) current: Option<PlayerId>,
    decided: Option<GameResult>,
    history: Vector<GameEvent>,
    observers: ObserverRegistry,
}

impl RealEstateGame {
    /// Create an engine with no board and no players.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with its board already built from `config`.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let mut game = Self::new();
        game.create_spaces(config.start_payout, &config.rent_schedule)?;
        Ok(game)
    }

    // === Setup ===

    /// Build the start space and the 24 properties.
    ///
    /// `rent_schedule` must hold exactly one non-negative rent per property,
    /// in board order. The board can only be built once.
    pub fn create_spaces(&mut self, start_payout: i64, rent_schedule: &[i64]) -> Result<()> {
        if self.board.is_some() {
            return Err(GameError::BoardAlreadyCreated);
        }

        let board = Board::new(start_payout, rent_schedule)?;
        log::debug!(
            "board created with {} spaces, start payout {}",
            board.len(),
            start_payout
        );
        self.board = Some(board);
        Ok(())
    }

    /// Register a player on the start space and return the name actually
    /// used, which carries a counted suffix if `name` was taken.
    pub fn create_player(&mut self, name: &str, starting_balance: i64) -> String {
        let id = self.roster.register(name, starting_balance);
        let resolved = self.roster[id].name().to_string();

        if resolved != name {
            log::debug!("name {name:?} taken, registered as {resolved:?}");
        }
        if self.current.is_none() {
            self.current = Some(id);
        }

        self.emit(GameEvent::PlayerJoined {
            player: id,
            name: resolved.clone(),
        });
        resolved
    }

    // === Play ===

    /// Move a player `num_spaces` forward and settle any rent owed.
    ///
    /// A player whose balance is exactly zero does not move. Each time the
    /// move carries the player past the last space they collect the start
    /// payout once.
    pub fn move_player(&mut self, name: &str, num_spaces: u32) -> Result<()> {
        let id = self.roster.id_of(name)?;
        self.move_by_id(id, num_spaces)?;
        Ok(())
    }

    pub(crate) fn move_by_id(&mut self, id: PlayerId, steps: u32) -> Result<Option<MoveOutcome>> {
        let payout = self.board()?.start_payout();

        let player = &self.roster[id];
        if player.balance() == 0 {
            log::debug!("{} is bankrupt and cannot move", player.name());
            return Ok(None);
        }

        let from = player.position();
        let advance = Board::advance(from, steps);

        if advance.laps > 0 {
            let credit = payout.saturating_mul(i64::from(advance.laps));
            self.roster[id].adjust_balance(credit);
            log::debug!(
                "{} passed the start space {} time(s), collecting {}",
                self.roster[id].name(),
                advance.laps,
                credit
            );
            self.emit(GameEvent::PassedStart {
                player: id,
                laps: advance.laps,
                payout: credit,
            });
        }

        self.roster[id].set_position(advance.position);
        log::debug!(
            "{} moved {} -> {}",
            self.roster[id].name(),
            from,
            advance.position
        );
        self.emit(GameEvent::PlayerMoved {
            player: id,
            from,
            to: advance.position,
        });

        let rent_paid = self.resolve_rent(id, advance.position)?;
        Ok(Some(MoveOutcome {
            from,
            to: advance.position,
            laps: advance.laps,
            rent_paid,
            bankrupted: rent_paid.is_some() && self.roster[id].balance() <= 0,
        }))
    }

    /// Charge rent for landing on `position`, if any is owed.
    fn resolve_rent(&mut self, id: PlayerId, position: usize) -> Result<Option<i64>> {
        let space = self.board()?.get(position)?;
        if space.is_start() {
            return Ok(None);
        }

        match (space.owner(), space.rent()) {
            (Some(owner), Some(rent)) if owner != id => {
                self.charge_rent(id, owner, rent, position).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Make `payer` pay `rent_amount` to `owner`.
    ///
    /// A payer who cannot strictly cover the rent hands over everything they
    /// have and goes bankrupt. Returns the amount actually paid.
    pub fn pay_rent(&mut self, name: &str, rent_amount: i64, owner: &str) -> Result<i64> {
        let payer = self.roster.id_of(name)?;
        let owner = self.roster.id_of(owner)?;
        let space = self.roster[payer].position();
        self.charge_rent(payer, owner, rent_amount, space)
    }

    fn charge_rent(
        &mut self,
        payer: PlayerId,
        owner: PlayerId,
        rent: i64,
        space: usize,
    ) -> Result<i64> {
        // A shortfall releases holdings, which needs the board.
        self.board()?;
        if payer == owner {
            return Ok(0);
        }

        let balance = self.roster[payer].balance();
        let covered = balance > rent;
        let amount = if covered { rent } else { balance.max(0) };

        self.roster.transfer(payer, owner, amount);
        log::debug!(
            "{} paid {} rent to {} on space {}",
            self.roster[payer].name(),
            amount,
            self.roster[owner].name(),
            space
        );
        self.emit(GameEvent::RentPaid {
            payer,
            owner,
            space,
            amount,
        });

        if !covered {
            self.release_holdings(payer)?;
        }
        Ok(amount)
    }

    /// Try to buy the space the player is standing on.
    ///
    /// Succeeds only when the space is an unowned property and the player's
    /// balance strictly exceeds its price. Returns `false` without touching
    /// anything otherwise.
    pub fn buy_space(&mut self, name: &str) -> Result<bool> {
        let id = self.roster.id_of(name)?;
        let player = &self.roster[id];
        let position = player.position();
        let balance = player.balance();

        let space = self.board()?.get(position)?;
        let price = match space.purchase_price() {
            Some(price) if space.can_be_bought_with(balance) => price,
            _ => return Ok(false),
        };

        self.board_mut()?.get_mut(position)?.assign_owner(id);
        self.roster[id].adjust_balance(-price);
        log::debug!("{name} bought space {position} for {price}");
        self.emit(GameEvent::SpacePurchased {
            player: id,
            space: position,
            price,
        });
        Ok(true)
    }

    /// Return every space a bankrupt player owns to the bank.
    ///
    /// Called automatically when a rent payment wipes a player out. A player
    /// who still has money keeps everything and nothing is emitted. Returns
    /// the indices that were released.
    pub fn bankrupt_player(&mut self, name: &str) -> Result<Holdings> {
        let id = self.roster.id_of(name)?;
        if self.roster[id].is_active() {
            log::debug!("{name} still has money, nothing released");
            return Ok(Holdings::new());
        }
        self.release_holdings(id)
    }

    fn release_holdings(&mut self, id: PlayerId) -> Result<Holdings> {
        let released = self.board_mut()?.release_holdings(id);
        log::info!(
            "{} is bankrupt, {} space(s) returned to the bank",
            self.roster[id].name(),
            released.len()
        );
        self.emit(GameEvent::PlayerBankrupted {
            player: id,
            released: released.clone(),
        });
        self.settle_result();
        Ok(released)
    }

    // === Game over ===

    /// Current outcome, computed from balances.
    ///
    /// `None` while more than one player has money (or before anyone has
    /// joined), `Winner` when exactly one does, `Draw` when nobody does.
    #[must_use]
    pub fn game_result(&self) -> Option<GameResult> {
        if self.roster.is_empty() {
            return None;
        }

        let mut active = self.roster.active();
        match (active.next(), active.next()) {
            (None, _) => Some(GameResult::Draw),
            (Some(only), None) => Some(GameResult::Winner(only.id())),
            (Some(_), Some(_)) => None,
        }
    }

    /// Report the winner's name once a single player has money left.
    ///
    /// `Ok(None)` means the game goes on. When nobody has money left, or
    /// nobody has joined, there is no winner and this returns
    /// [`GameError::NoActivePlayers`].
    pub fn check_game_over(&mut self) -> Result<Option<String>> {
        if self.roster.is_empty() {
            return Err(GameError::NoActivePlayers);
        }
        match self.settle_result() {
            Some(GameResult::Winner(id)) => Ok(Some(self.roster[id].name().to_string())),
            Some(GameResult::Draw) => Err(GameError::NoActivePlayers),
            None => Ok(None),
        }
    }

    /// Compute the result and announce it the first time it is decided.
    fn settle_result(&mut self) -> Option<GameResult> {
        let result = self.game_result()?;
        if self.decided.is_none() {
            self.decided = Some(result);
            match result {
                GameResult::Winner(id) => log::info!("game over, {} wins", self.roster[id].name()),
                GameResult::Draw => log::info!("game over, no player has money left"),
            }
            self.emit(GameEvent::GameOver { result });
        }
        Some(result)
    }

    // === Events ===

    /// Subscribe an observer to every future event.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) -> ObserverId {
        self.observers.subscribe(observer)
    }

    /// Remove an observer. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Every event emitted so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    /// Drain the event history, leaving it empty. Observers are unaffected.
    pub fn take_history(&mut self) -> Vector<GameEvent> {
        std::mem::take(&mut self.history)
    }

    fn emit(&mut self, event: GameEvent) {
        log::trace!("event: {}", event.kind());
        self.observers.notify(&event);
        self.history.push_back(event);
    }

    // === Accessors ===

    pub(super) fn board(&self) -> Result<&Board> {
        self.board.as_ref().ok_or(GameError::BoardNotCreated)
    }

    fn board_mut(&mut self) -> Result<&mut Board> {
        self.board.as_mut().ok_or(GameError::BoardNotCreated)
    }

    /// Whether `create_spaces` has run.
    #[must_use]
    pub fn has_board(&self) -> bool {
        self.board.is_some()
    }

    /// Read-only roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn player(&self, name: &str) -> Result<&Player> {
        self.roster.by_name(name)
    }

    pub fn player_id(&self, name: &str) -> Result<PlayerId> {
        self.roster.id_of(name)
    }

    #[must_use]
    pub fn player_name(&self, id: PlayerId) -> Option<&str> {
        self.roster.get(id).map(Player::name)
    }

    pub fn player_balance(&self, name: &str) -> Result<i64> {
        Ok(self.player(name)?.balance())
    }

    pub fn player_position(&self, name: &str) -> Result<usize> {
        Ok(self.player(name)?.position())
    }

    /// Whether the player has been knocked out.
    pub fn is_bankrupt(&self, name: &str) -> Result<bool> {
        Ok(!self.player(name)?.is_active())
    }

    /// All players in registration order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.roster.iter()
    }

    /// Names of players with a strictly positive balance.
    #[must_use]
    pub fn active_players(&self) -> Vec<&str> {
        self.roster.active().map(Player::name).collect()
    }

    pub fn space(&self, index: usize) -> Result<&Space> {
        self.board()?.get(index)
    }

    /// All spaces in board order. Empty before `create_spaces`.
    pub fn spaces(&self) -> impl Iterator<Item = &Space> {
        self.board.iter().flat_map(|board| board.iter())
    }

    /// Name of the player owning a space, if any.
    pub fn space_owner(&self, index: usize) -> Result<Option<&str>> {
        Ok(self
            .space(index)?
            .owner()
            .and_then(|id| self.player_name(id)))
    }

    pub fn space_rent(&self, index: usize) -> Result<Option<i64>> {
        Ok(self.space(index)?.rent())
    }

    pub fn purchase_price(&self, index: usize) -> Result<Option<i64>> {
        Ok(self.space(index)?.purchase_price())
    }

    pub fn start_payout(&self) -> Result<i64> {
        Ok(self.board()?.start_payout())
    }

    /// Indices of every space the player owns.
    pub fn spaces_owned_by(&self, name: &str) -> Result<Holdings> {
        let id = self.roster.id_of(name)?;
        Ok(self.board()?.holdings(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_RENT_SCHEDULE;

    fn game() -> RealEstateGame {
        let mut game = RealEstateGame::new();
        game.create_spaces(200, &DEFAULT_RENT_SCHEDULE).unwrap();
        game
    }

    #[test]
    fn test_board_created_once() {
        let mut game = game();
        assert_eq!(
            game.create_spaces(200, &DEFAULT_RENT_SCHEDULE),
            Err(GameError::BoardAlreadyCreated)
        );
    }

    #[test]
    fn test_moves_need_a_board() {
        let mut game = RealEstateGame::new();
        game.create_player("A", 100);
        assert_eq!(game.move_player("A", 3), Err(GameError::BoardNotCreated));
        assert_eq!(game.buy_space("A"), Err(GameError::BoardNotCreated));
        assert_eq!(game.spaces().count(), 0);
    }

    #[test]
    fn test_from_config() {
        let game = RealEstateGame::from_config(&GameConfig::default().with_start_payout(50)).unwrap();
        assert_eq!(game.start_payout().unwrap(), 50);
        assert_eq!(game.spaces().count(), 25);
    }

    #[test]
    fn test_from_config_rejects_short_schedule() {
        let config = GameConfig::default().with_rent_schedule(vec![10; 5]);
        assert!(matches!(
            RealEstateGame::from_config(&config),
            Err(GameError::MalformedSchedule { found: 5, .. })
        ));
    }

    #[test]
    fn test_move_outcome() {
        let mut game = game();
        let id = PlayerId::new(0);
        game.create_player("A", 500);
        game.roster[id].set_position(22);

        let outcome = game.move_by_id(id, 6).unwrap().unwrap();
        assert_eq!(
            outcome,
            MoveOutcome {
                from: 22,
                to: 3,
                laps: 1,
                rent_paid: None,
                bankrupted: false,
            }
        );
        assert_eq!(game.player_balance("A").unwrap(), 700);
    }

    #[test]
    fn test_zero_step_move_stays_put() {
        let mut game = game();
        game.create_player("A", 500);
        game.move_player("A", 0).unwrap();
        assert_eq!(game.player_position("A").unwrap(), 0);
        assert_eq!(game.player_balance("A").unwrap(), 500);
    }

    #[test]
    fn test_self_rent_is_ignored() {
        let mut game = game();
        game.create_player("A", 500);
        assert_eq!(game.pay_rent("A", 100, "A").unwrap(), 0);
        assert_eq!(game.player_balance("A").unwrap(), 500);
    }

    #[test]
    fn test_lap_credit_saturates() {
        let mut game = RealEstateGame::new();
        game.create_spaces(i64::MAX, &DEFAULT_RENT_SCHEDULE).unwrap();
        game.create_player("A", 1);

        game.move_player("A", 50).unwrap();
        assert_eq!(game.player_position("A").unwrap(), 0);
        assert_eq!(game.player_balance("A").unwrap(), i64::MAX);
    }

    #[test]
    fn test_take_history_drains() {
        let mut game = game();
        game.create_player("A", 500);
        game.move_player("A", 2).unwrap();

        let drained = game.take_history();
        assert_eq!(drained.len(), 2);
        assert!(game.history().is_empty());

        game.move_player("A", 1).unwrap();
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_unknown_space_accessors() {
        let game = game();
        assert_eq!(
            game.space_rent(30),
            Err(GameError::UnknownSpace { index: 30 })
        );
        assert_eq!(game.purchase_price(0).unwrap(), None);
        assert_eq!(game.purchase_price(1).unwrap(), Some(250));
    }
}
