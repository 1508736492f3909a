//! Self-play statistics tracking.

use std::time::Instant;

use blokus_core::{Player, PLAYER_COUNT};

use crate::selfplay::GameRecord;

/// Statistics collected across games.
#[derive(Debug, Default)]
pub struct SimStats {
    /// Finished games
    pub games: u64,

    /// Pieces placed over all games
    pub placements: u64,

    /// Calls to the placement enumerator over all games
    pub enumerations: u64,

    /// Games won (including shared wins) per player
    pub wins: [u64; PLAYER_COUNT],

    /// Games with more than one winner
    pub shared_wins: u64,

    /// Sum of squares left in hand per player
    pub remaining_squares: [u64; PLAYER_COUNT],

    /// For rate calculation
    start_time: Option<Instant>,
    last_log_time: Option<Instant>,
    last_log_games: u64,
}

impl SimStats {
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_log_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// Fold in one finished game
    pub fn record_game(&mut self, record: &GameRecord) {
        self.games += 1;
        self.placements += u64::from(record.placements);
        self.enumerations += record.enumerations;

        let winners = record.winners();
        if winners.len() > 1 {
            self.shared_wins += 1;
        }
        for player in winners {
            self.wins[player.index()] += 1;
        }
        let squares = record.remaining_squares();
        for (total, left) in self.remaining_squares.iter_mut().zip(squares) {
            *total += left as u64;
        }
    }

    /// Mean placements per game
    pub fn mean_placements(&self) -> f64 {
        mean(self.placements, self.games)
    }

    /// Mean enumerator calls per game
    pub fn mean_enumerations(&self) -> f64 {
        mean(self.enumerations, self.games)
    }

    /// Get current games per second
    pub fn games_per_sec(&self) -> f64 {
        if let Some(start) = self.start_time {
            let elapsed = start.elapsed().as_secs_f64();
            if elapsed > 0.0 {
                return self.games as f64 / elapsed;
            }
        }
        0.0
    }

    /// Check if we should log progress
    pub fn should_log(&self, interval_secs: u64) -> bool {
        if let Some(last) = self.last_log_time {
            last.elapsed().as_secs() >= interval_secs
        } else {
            true
        }
    }

    /// Log progress and reset log timer
    pub fn log_progress(&mut self, target: u32) {
        let now = Instant::now();
        let elapsed_total = self.start_time.map(|s| s.elapsed().as_secs()).unwrap_or(0);

        // Calculate rate since last log
        let rate = if let Some(last) = self.last_log_time {
            let elapsed = last.elapsed().as_secs_f64();
            let games = self.games - self.last_log_games;
            if elapsed > 0.0 {
                games as f64 / elapsed
            } else {
                0.0
            }
        } else {
            self.games_per_sec()
        };

        println!(
            "[{:02}:{:02}:{:02}] games={}/{} rate={:.1}/s placements={:.1}/game",
            elapsed_total / 3600,
            (elapsed_total % 3600) / 60,
            elapsed_total % 60,
            self.games,
            target,
            rate,
            self.mean_placements(),
        );

        self.last_log_time = Some(now);
        self.last_log_games = self.games;
    }

    /// Print final summary
    pub fn print_summary(&self) {
        println!("Games played: {}", self.games);
        println!("Mean placements: {:.2}", self.mean_placements());
        println!("Mean enumerations: {:.1}", self.mean_enumerations());
        for player in Player::all() {
            println!(
                "  - P{} wins: {} (mean remaining squares {:.1})",
                player.id(),
                self.wins[player.index()],
                mean(self.remaining_squares[player.index()], self.games),
            );
        }
        println!("Shared wins: {}", self.shared_wins);

        if let Some(start) = self.start_time {
            let elapsed = start.elapsed().as_secs_f64();
            println!("Elapsed: {:.2}s", elapsed);
            println!("Average rate: {:.1} games/sec", self.games as f64 / elapsed);
        }
    }
}

fn mean(total: u64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}
