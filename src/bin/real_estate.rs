use std::collections::HashMap;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};

use real_estate_game::sim::{
    AlwaysBuy, BuyPolicy, KeepReserve, NeverBuy, Simulation, SimulationConfig, SimulationReport,
};
use real_estate_game::GameConfig;

#[derive(Parser)]
#[command(version, about = "Real estate board game simulator", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play seeded games between automated players
    Simulate {
        /// Player names, in turn order
        #[arg(short, long, num_args = 1.., default_values_t = ["A".to_string(), "B".to_string()])]
        players: Vec<String>,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, default_value_t = 1)]
        games: usize,
        #[arg(long, default_value_t = 1_000)]
        max_turns: u32,
        #[arg(long, default_value_t = 1)]
        dice: u32,
        #[arg(long, default_value_t = 200)]
        start_payout: i64,
        #[arg(long, default_value_t = 1000)]
        starting_balance: i64,
        #[arg(long, value_enum, default_value_t = Policy::Always)]
        policy: Policy,
        /// Money kept back by the `reserve` policy
        #[arg(long, default_value_t = 300)]
        reserve: i64,
        /// Print reports as JSON lines instead of a summary
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    Always,
    Never,
    Reserve,
}

fn report(reports: &[SimulationReport], players: &[String]) {
    let mut win_counts: HashMap<&str, usize> = players.iter().map(|p| (p.as_str(), 0)).collect();
    let mut undecided = 0;

    for report in reports {
        match &report.winner {
            Some(name) => *win_counts.entry(name.as_str()).or_default() += 1,
            None => undecided += 1,
        }
    }

    let total = reports.len();
    for name in players {
        let wins = win_counts.get(name.as_str()).copied().unwrap_or(0);
        println!(
            "Win count for {}: {}/{}, ratio: {:.3}",
            name,
            wins,
            total,
            wins as f64 / total.max(1) as f64
        );
    }
    println!("Undecided or drawn: {undecided}/{total}");
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.commands {
        Commands::Simulate {
            players,
            seed,
            games,
            max_turns,
            dice,
            start_payout,
            starting_balance,
            policy,
            reserve,
            json,
        } => {
            if players.is_empty() {
                bail!("at least one player is required");
            }

            let game_config = GameConfig::default()
                .with_start_payout(start_payout)
                .with_starting_balance(starting_balance);
            let sim_config = SimulationConfig::default()
                .with_seed(seed)
                .with_dice(dice, 6)
                .with_max_turns(max_turns);
            let policy: Box<dyn BuyPolicy> = match policy {
                Policy::Always => Box::new(AlwaysBuy),
                Policy::Never => Box::new(NeverBuy),
                Policy::Reserve => Box::new(KeepReserve::new(reserve)),
            };

            log::info!("Running {} simulations for {} players", games, players.len());

            let names: Vec<&str> = players.iter().map(String::as_str).collect();
            let mut sim = Simulation::new(game_config, sim_config, policy);
            let reports = sim.run_many(&names, games)?;

            if json {
                for item in &reports {
                    println!("{}", serde_json::to_string(item)?);
                }
            } else {
                report(&reports, &players);
            }
        }
    }

    Ok(())
}
