//! Rule engine for a four-player corner-touch polyomino game.
//!
//! # Rules
//!
//! ```text
//! 1. Every cell of a placed piece must be on the board and empty.
//! 2. A piece may never share an edge with a piece of the same player.
//! 3. A player's first piece must cover that player's starting corner.
//! 4. Every later piece must touch a same-player piece corner-to-corner.
//! ```
//!
//! # Grid Encoding
//!
//! ```text
//! Flat row-major array of size * size cells, index = y * size + x.
//!   0    = empty
//!   1..4 = owning player
//!
//! Starting corners (size = N):
//!   Player 1: (0, 0)        Player 2: (N-1, 0)
//!   Player 4: (0, N-1)      Player 3: (N-1, N-1)
//! ```
//!
//! # Placement Search
//!
//! Each player keeps a set of *connectable positions*: empty squares that sit
//! diagonally next to one of the player's cells and share no edge with them.
//! Any legal placement after the first must cover one of these squares, so
//! [`Board::valid_placements`] only probes anchors that land a piece cell on a
//! connectable position instead of scanning every square of the board.

mod board;
mod config;
mod connectable;
mod coord;
mod enumerate;
mod error;
mod grid;
mod observer;
mod piece;
mod rules;
mod state;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use board::{Board, Placement};
pub use config::{EngineConfig, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use connectable::ConnectableCache;
pub use coord::{Coord, CORNER_STEPS, EDGE_STEPS};
pub use error::{ConfigError, PlacementError, StateError};
pub use grid::{starting_corner, Grid, EMPTY};
pub use observer::PlacementObserver;
pub use piece::{standard_set, Piece, PieceKind, PieceSet};
pub use rules::{check_placement, is_connectable};
pub use state::{ConnectablePositions, StateBlob};

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 4;

/// Player identifier.
///
/// The discriminant is the value stored in the grid for that player's cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, derive_more::Display)]
#[repr(u8)]
pub enum Player {
    #[display("player 1")]
    One = 1,
    #[display("player 2")]
    Two = 2,
    #[display("player 3")]
    Three = 3,
    #[display("player 4")]
    Four = 4,
}

impl Player {
    /// Convert from a raw id (1..=4) to Player.
    #[inline]
    pub fn from_id(id: u8) -> Option<Player> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            3 => Some(Player::Three),
            4 => Some(Player::Four),
            _ => None,
        }
    }

    /// Raw id (1..=4), as stored in the grid.
    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Zero-based index for per-player tables.
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// The player who moves after this one.
    #[inline]
    pub fn next(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::Three,
            Player::Three => Player::Four,
            Player::Four => Player::One,
        }
    }

    /// All players in turn order.
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::One, Player::Two, Player::Three, Player::Four].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_ids_roundtrip() {
        for player in Player::all() {
            assert_eq!(Player::from_id(player.id()), Some(player));
        }
        assert_eq!(Player::from_id(0), None);
        assert_eq!(Player::from_id(5), None);
    }

    #[test]
    fn test_player_index() {
        let indices: Vec<_> = Player::all().map(Player::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_player_next_cycles() {
        let mut player = Player::One;
        for _ in 0..PLAYER_COUNT {
            player = player.next();
        }
        assert_eq!(player, Player::One);
        assert_eq!(Player::Four.next(), Player::One);
    }
}
