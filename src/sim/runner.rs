//! Self-play loop.
//!
//! Stands in for a human at the dice button: roll, move, maybe buy, pass the
//! turn, until one player is left or the turn cap is hit.

use serde::{Deserialize, Serialize};

use crate::core::{DiceRng, GameConfig, GameError, Result};
use crate::rules::{GameResult, RealEstateGame};

use super::config::SimulationConfig;
use super::policy::BuyPolicy;

/// A player's final position in a simulated game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub balance: i64,
    pub position: usize,
    /// Number of properties held at the end.
    pub properties: usize,
}

/// Outcome of one simulated game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// `None` if the turn cap was reached first.
    pub result: Option<GameResult>,
    pub winner: Option<String>,
    /// Turns played.
    pub turns: u32,
    /// Properties bought over the whole game.
    pub purchases: u32,
    /// Final state of every player, in turn order.
    pub standings: Vec<Standing>,
}

/// Runs seeded games with one purchase policy shared by every player.
#[derive(Debug)]
pub struct Simulation<P: BuyPolicy> {
    game_config: GameConfig,
    config: SimulationConfig,
    policy: P,
}

impl<P: BuyPolicy> Simulation<P> {
    pub fn new(game_config: GameConfig, config: SimulationConfig, policy: P) -> Self {
        Self {
            game_config,
            config,
            policy,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play one game with dice seeded from the config.
    pub fn run(&mut self, names: &[&str]) -> Result<SimulationReport> {
        let mut dice = DiceRng::new(self.config.seed);
        self.play(names, &mut dice)
    }

    /// Play `games` games, each with its own forked dice stream.
    pub fn run_many(&mut self, names: &[&str], games: usize) -> Result<Vec<SimulationReport>> {
        let mut master = DiceRng::new(self.config.seed);
        (0..games)
            .map(|game_idx| {
                let mut dice = master.fork();
                log::debug!("starting game {game_idx} with seed {}", dice.seed());
                self.play(names, &mut dice)
            })
            .collect()
    }

    fn play(&mut self, names: &[&str], dice: &mut DiceRng) -> Result<SimulationReport> {
        if names.is_empty() {
            return Err(GameError::NoActivePlayers);
        }

        let mut game = RealEstateGame::from_config(&self.game_config)?;
        for name in names {
            game.create_player(name, self.game_config.starting_balance);
        }

        let mut turns = 0;
        let mut purchases = 0;
        while turns < self.config.max_turns && game.game_result().is_none() {
            let roll = dice.roll(self.config.dice_count, self.config.dice_sides);
            let report = game.take_turn(roll)?;
            turns += 1;

            if report.moved && !report.bankrupted {
                let name = game
                    .player_name(report.player)
                    .map(str::to_string)
                    .unwrap_or_default();
                if game.can_buy(&name)?
                    && self.policy.should_buy(&game, report.player)
                    && game.buy_space(&name)?
                {
                    purchases += 1;
                }
            }

            if game.end_turn().is_none() {
                break;
            }
        }

        // Announces the result to the engine's history if it was decided.
        let winner = match game.check_game_over() {
            Ok(winner) => winner,
            Err(GameError::NoActivePlayers) => None,
            Err(err) => return Err(err),
        };
        let result = game.game_result();

        match (&winner, result) {
            (Some(name), _) => log::info!("{name} won after {turns} turns"),
            (None, Some(GameResult::Draw)) => log::info!("draw after {turns} turns"),
            _ => log::info!("no winner after {turns} turns"),
        }

        let standings = game
            .players()
            .map(|player| Standing {
                name: player.name().to_string(),
                balance: player.balance(),
                position: player.position(),
                properties: game
                    .spaces()
                    .filter(|space| space.owner() == Some(player.id()))
                    .count(),
            })
            .collect();

        Ok(SimulationReport {
            result,
            winner,
            turns,
            purchases,
            standings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{AlwaysBuy, NeverBuy};

    #[test]
    fn test_empty_roster_rejected() {
        let mut sim = Simulation::new(GameConfig::default(), SimulationConfig::default(), AlwaysBuy);
        assert_eq!(sim.run(&[]), Err(GameError::NoActivePlayers));
    }

    #[test]
    fn test_single_player_wins_immediately() {
        let mut sim = Simulation::new(GameConfig::default(), SimulationConfig::default(), AlwaysBuy);
        let report = sim.run(&["Solo"]).unwrap();
        assert_eq!(report.turns, 0);
        assert_eq!(report.winner.as_deref(), Some("Solo"));
    }

    #[test]
    fn test_never_buy_hits_turn_cap() {
        let config = SimulationConfig::default().with_max_turns(40);
        let mut sim = Simulation::new(GameConfig::default(), config, NeverBuy);
        let report = sim.run(&["A", "B"]).unwrap();

        assert_eq!(report.turns, 40);
        assert_eq!(report.purchases, 0);
        assert_eq!(report.result, None);
        assert!(report.standings.iter().all(|s| s.properties == 0));
        assert!(report.standings.iter().all(|s| s.balance >= 1000));
    }
}
