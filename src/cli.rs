//! Command-line interface for strictly_versus.

use clap::{Parser, Subcommand};

/// Strictly Versus - tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "strictly_versus")]
#[command(about = "Tic-tac-toe against a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to the TOML config file (defaults are used if missing)
        #[arg(short, long, default_value = "strictly_versus.toml")]
        config: std::path::PathBuf,

        /// Override where the score is stored
        #[arg(long)]
        score_file: Option<std::path::PathBuf>,

        /// Start with the computer playing randomly
        #[arg(long)]
        random: bool,
    },

    /// Play rounds headlessly against a random-clicking bot
    Simulate {
        /// Path to the TOML config file (defaults are used if missing)
        #[arg(short, long, default_value = "strictly_versus.toml")]
        config: std::path::PathBuf,

        /// Number of rounds to play
        #[arg(short, long, default_value = "100")]
        rounds: u32,

        /// Start with the computer playing randomly
        #[arg(long)]
        random: bool,

        /// RNG seed (overrides the config)
        #[arg(long)]
        seed: Option<u64>,
    },
}
