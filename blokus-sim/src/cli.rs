//! Command-line interface for blokus-sim.

use std::path::PathBuf;

use clap::Parser;

/// Blokus self-play - random four-player games against the rule engine
#[derive(Parser, Debug)]
#[command(name = "blokus-sim")]
#[command(about = "Plays random four-player games and reports results", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with [engine] and [sim] tables
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of games to play (overrides the config file)
    #[arg(short, long)]
    pub games: Option<u32>,

    /// RNG seed for reproducible runs (overrides the config file)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Board side length (overrides the config file)
    #[arg(long)]
    pub board_size: Option<usize>,

    /// Print the final board of every game
    #[arg(long)]
    pub show: bool,
}
