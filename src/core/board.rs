//! The fixed 25-space loop.
//!
//! Index 0 is the start space; indices 1..=24 are properties named from
//! [`FANTASY_THEME`] and priced from a 24-entry rent schedule.

use im::Vector;
use smallvec::SmallVec;

use super::error::{GameError, Result};
use super::player::PlayerId;
use super::space::{Space, PRICE_MULTIPLIER};

/// Total number of spaces on the board.
pub const BOARD_SIZE: usize = 25;

/// Number of purchasable spaces (everything but the start space).
pub const PROPERTY_COUNT: usize = BOARD_SIZE - 1;

/// Name of the start space.
pub const START_SPACE_NAME: &str = "GO";

/// Property names, in board order.
pub const FANTASY_THEME: [&str; PROPERTY_COUNT] = [
    "Druids Camp",
    "Dragons Lair",
    "Elves Keep",
    "Fairy Meadow",
    "Ghouls Gate",
    "Gnomes Guild",
    "Goblin Cave",
    "Giants Hill",
    "Hydras Hideout",
    "Kobolds Stronghold",
    "Lichs Domain",
    "Mimics Mouth",
    "Ogres Pit",
    "Skeletons Grave",
    "Dwarves Mine",
    "Trolls Tower",
    "Unicorn Falls",
    "Vampires Crypt",
    "Wyvern Woods",
    "Zombie Inn",
    "Werewolf Ridge",
    "Mages Fire",
    "Warlocks Cove",
    "Halfling Holm",
];

/// Largest rent whose purchase price is representable.
pub const MAX_RENT: i64 = i64::MAX / PRICE_MULTIPLIER;

/// Rents used when no schedule is supplied.
pub const DEFAULT_RENT_SCHEDULE: [i64; PROPERTY_COUNT] = [
    50, 50, 50, 75, 75, 75, 100, 100, 100, 150, 150, 150, 200, 200, 200, 250, 250, 250, 300, 300,
    300, 350, 350, 350,
];

/// Where a move ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    /// Destination index.
    pub position: usize,
    /// Times the move passed over the end of the board.
    pub laps: u32,
}

/// Indices of spaces owned by one player. Most players hold only a few.
pub type Holdings = SmallVec<[usize; 8]>;

/// Ordered, immutable-topology board.
#[derive(Clone, Debug)]
pub struct Board {
    spaces: Vector<Space>,
}

impl Board {
    /// Build the start space followed by the 24 themed properties.
    pub fn new(start_payout: i64, rent_schedule: &[i64]) -> Result<Self> {
        if rent_schedule.len() != PROPERTY_COUNT {
            log::warn!(
                "rejecting rent schedule with {} entries",
                rent_schedule.len()
            );
            return Err(GameError::malformed_schedule(rent_schedule.len()));
        }

        if let Some((index, &rent)) = rent_schedule.iter().enumerate().find(|(_, r)| **r < 0) {
            log::warn!("rejecting negative rent {rent} for property {index}");
            return Err(GameError::NegativeRent { index, rent });
        }

        let too_high = rent_schedule.iter().enumerate().find(|(_, r)| **r > MAX_RENT);
        if let Some((index, &rent)) = too_high {
            log::warn!("rejecting rent {rent} for property {index}, above {MAX_RENT}");
            return Err(GameError::RentTooHigh {
                index,
                rent,
                max: MAX_RENT,
            });
        }

        let mut spaces = Vector::new();
        spaces.push_back(Space::start(START_SPACE_NAME, start_payout));
        for (name, &rent) in FANTASY_THEME.iter().zip(rent_schedule) {
            spaces.push_back(Space::property(*name, rent));
        }

        Ok(Self { spaces })
    }

    /// Compute the destination of a move of `steps` from `from`.
    ///
    /// Moves of any length are supported; every pass over the end of the
    /// board counts as one lap.
    #[must_use]
    pub fn advance(from: usize, steps: u32) -> Advance {
        let total = from + steps as usize;
        Advance {
            position: total % BOARD_SIZE,
            laps: (total / BOARD_SIZE) as u32,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// The start space.
    #[must_use]
    pub fn start(&self) -> &Space {
        &self.spaces[0]
    }

    /// Payout credited for each lap.
    #[must_use]
    pub fn start_payout(&self) -> i64 {
        self.start().payout().unwrap_or(0)
    }

    pub fn get(&self, index: usize) -> Result<&Space> {
        self.spaces
            .get(index)
            .ok_or(GameError::UnknownSpace { index })
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Result<&mut Space> {
        self.spaces
            .get_mut(index)
            .ok_or(GameError::UnknownSpace { index })
    }

    /// Iterate over spaces in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Space> {
        self.spaces.iter()
    }

    /// Indices of every space owned by `owner`.
    #[must_use]
    pub fn holdings(&self, owner: PlayerId) -> Holdings {
        self.spaces
            .iter()
            .enumerate()
            .filter(|(_, space)| space.owner() == Some(owner))
            .map(|(index, _)| index)
            .collect()
    }

    /// Return every space owned by `owner` to the bank.
    pub(crate) fn release_holdings(&mut self, owner: PlayerId) -> Holdings {
        let held = self.holdings(owner);
        for &index in &held {
            self.spaces[index].clear_owner();
        }
        held
    }
}
