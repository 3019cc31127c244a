//! Purchase policies for simulated players.
//!
//! A policy is only consulted when a purchase is legal, so implementations
//! decide whether to buy, never whether they can.

use crate::core::PlayerId;
use crate::rules::RealEstateGame;

/// Decides whether a player buys the space they landed on.
pub trait BuyPolicy {
    /// Called after a move onto a space the player could buy.
    fn should_buy(&mut self, game: &RealEstateGame, player: PlayerId) -> bool;
}

impl<P: BuyPolicy + ?Sized> BuyPolicy for Box<P> {
    fn should_buy(&mut self, game: &RealEstateGame, player: PlayerId) -> bool {
        (**self).should_buy(game, player)
    }
}

/// Buys everything it can.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysBuy;

impl BuyPolicy for AlwaysBuy {
    fn should_buy(&mut self, _game: &RealEstateGame, _player: PlayerId) -> bool {
        true
    }
}

/// Never buys.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverBuy;

impl BuyPolicy for NeverBuy {
    fn should_buy(&mut self, _game: &RealEstateGame, _player: PlayerId) -> bool {
        false
    }
}

/// Buys only if at least `reserve` is left over afterwards.
#[derive(Clone, Copy, Debug)]
pub struct KeepReserve {
    pub reserve: i64,
}

impl KeepReserve {
    pub fn new(reserve: i64) -> Self {
        Self { reserve }
    }
}

impl BuyPolicy for KeepReserve {
    fn should_buy(&mut self, game: &RealEstateGame, player: PlayerId) -> bool {
        let Some(player) = game.roster().get(player) else {
            return false;
        };
        let price = game
            .space(player.position())
            .ok()
            .and_then(|space| space.purchase_price());

        match price {
            Some(price) => player.balance() - price >= self.reserve,
            None => false,
        }
    }
}
