//! Board spaces.
//!
//! A space is either the start space, which pays out when a player laps the
//! board, or a property that can be bought and charges rent. The two share a
//! name and an owner slot; behaviour that differs dispatches on [`SpaceKind`].

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Purchase price as a multiple of rent.
pub const PRICE_MULTIPLIER: i64 = 5;

/// What a space does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceKind {
    /// The start space. Never owned, never charges rent.
    Start { payout: i64 },
    /// A purchasable property.
    Property { rent: i64 },
}

/// A single position on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    name: String,
    kind: SpaceKind,
    owner: Option<PlayerId>,
}

impl Space {
    /// Create the start space.
    pub fn start(name: impl Into<String>, payout: i64) -> Self {
        Self {
            name: name.into(),
            kind: SpaceKind::Start { payout },
            owner: None,
        }
    }

    /// Create an unowned property.
    pub fn property(name: impl Into<String>, rent: i64) -> Self {
        Self {
            name: name.into(),
            kind: SpaceKind::Property { rent },
            owner: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> SpaceKind {
        self.kind
    }

    #[must_use]
    pub fn is_start(&self) -> bool {
        matches!(self.kind, SpaceKind::Start { .. })
    }

    /// Rent charged to visitors. `None` for the start space.
    #[must_use]
    pub fn rent(&self) -> Option<i64> {
        match self.kind {
            SpaceKind::Start { .. } => None,
            SpaceKind::Property { rent } => Some(rent),
        }
    }

    /// Payout for lapping the board. `None` for properties.
    #[must_use]
    pub fn payout(&self) -> Option<i64> {
        match self.kind {
            SpaceKind::Start { payout } => Some(payout),
            SpaceKind::Property { .. } => None,
        }
    }

    /// Purchase price, `rent * 5`. `None` for the start space.
    #[must_use]
    pub fn purchase_price(&self) -> Option<i64> {
        self.rent().map(|rent| rent.saturating_mul(PRICE_MULTIPLIER))
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Whether a player with `balance` may buy this space right now.
    ///
    /// The balance must strictly exceed the price and the space must be
    /// unowned. The start space is never for sale.
    #[must_use]
    pub fn can_be_bought_with(&self, balance: i64) -> bool {
        match (self.purchase_price(), self.owner) {
            (Some(price), None) => balance > price,
            _ => false,
        }
    }

    /// Record a purchase. Ignored on the start space.
    pub(crate) fn assign_owner(&mut self, owner: PlayerId) {
        if !self.is_start() {
            self.owner = Some(owner);
        }
    }

    pub(crate) fn clear_owner(&mut self) {
        self.owner = None;
    }
}
