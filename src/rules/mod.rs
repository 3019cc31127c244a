//! Rules engine.
//!
//! [`RealEstateGame`] holds the board and the players and applies every
//! rule. Turn rotation lives alongside it in `turn`; outcomes are reported as
//! a [`GameResult`].

mod engine;
mod result;
mod turn;

pub use engine::RealEstateGame;
pub use result::GameResult;
pub use turn::TurnReport;
