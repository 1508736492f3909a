//! Blokus Self-Play
//!
//! Plays random four-player games against the rule engine and reports
//! per-game results and aggregate statistics.

mod cli;
mod config;
mod selfplay;
mod stats;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use blokus_core::Player;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::RunConfig;
use crate::selfplay::{play_game, GameRecord};
use crate::stats::SimStats;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = RunConfig::resolve(&cli)?;
    let seed = config.sim.seed.unwrap_or_else(rand::random::<u64>);

    println!("Blokus Self-Play");
    println!("================");
    println!("Board: {0}x{0}", config.engine.board_size);
    println!("Games: {}", config.sim.games);
    println!("Seed: {}", seed);
    println!();

    // Set up SIGINT handler for graceful shutdown
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        println!("\n\nInterrupt received, finishing current game...");
        r.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl-C handler")?;

    info!(seed, games = config.sim.games, "starting self-play");
    let log_interval_secs = 5;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stats = SimStats::new();

    for game in 1..=config.sim.games {
        if !running.load(Ordering::SeqCst) {
            warn!(completed = stats.games, "self-play interrupted");
            break;
        }

        let record = play_game(&config.engine, &mut rng)?;
        print_game(game, &record, cli.show);
        stats.record_game(&record);

        if stats.should_log(log_interval_secs) {
            stats.log_progress(config.sim.games);
        }
    }

    println!("\n================");
    println!("Self-play complete!");
    println!("================");
    stats.print_summary();

    Ok(())
}

fn print_game(game: u32, record: &GameRecord, show: bool) {
    let squares = record.remaining_squares();
    println!("Game {}:", game);
    for player in Player::all() {
        println!(
            "  P{}: placed={} remaining squares={}",
            player.id(),
            record.placed[player.index()],
            squares[player.index()],
        );
    }

    let winners: Vec<String> = record
        .winners()
        .iter()
        .map(|p| format!("P{}", p.id()))
        .collect();
    println!("  Winner: {}", winners.join(", "));

    if show {
        println!("\n{}", record.board);
    }
}
