//! Strictly Versus - Unified CLI
//!
//! Tic-tac-toe against the computer, in the terminal or headless.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use strictly_versus::{GameConfig, run_simulation};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            score_file,
            random,
        } => run_play(&config, score_file, random).await,
        Command::Simulate {
            config,
            rounds,
            random,
            seed,
        } => run_simulate(&config, rounds, random, seed),
    }
}

/// Run the terminal game
async fn run_play(config_path: &Path, score_file: Option<PathBuf>, random: bool) -> Result<()> {
    let mut config = GameConfig::load_or_default(config_path)?;
    if let Some(path) = score_file {
        config = config.with_score_file(path);
    }
    if random {
        config = config.with_smart_by_default(false);
    }
    tui::run_tui(config).await
}

/// Run headless rounds and print the score
#[instrument(skip(config_path), fields(config_path = %config_path.display()))]
fn run_simulate(config_path: &Path, rounds: u32, random: bool, seed: Option<u64>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = GameConfig::load_or_default(config_path)?;
    if random {
        config = config.with_smart_by_default(false);
    }
    let seed = seed.or(*config.seed()).unwrap_or_else(rand::random);

    info!(rounds, seed, smart = *config.smart_by_default(), "Starting simulation");
    let report = run_simulation(&config, rounds, seed)?;

    let score = report.score();
    println!(
        "{} rounds in {:.1}s of game time (seed {})",
        report.rounds(),
        report.elapsed().as_secs_f64(),
        seed
    );
    println!("  player wins:   {}", score.player_wins());
    println!("  computer wins: {}", score.computer_wins());
    println!("  ties:          {}", score.ties());
    Ok(())
}
