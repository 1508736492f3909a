//! Error types.
//!
//! The boolean entry points on [`crate::Board`] collapse these to `false`;
//! the `Result` twins report which rule rejected the request.

use derive_more::{Display, Error, From};

use crate::{Coord, Player};

/// Why a placement was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum PlacementError {
    /// The piece has no cells.
    #[display("piece has no cells")]
    EmptyPiece,
    /// A cell would land off the board.
    #[display("cell {cell} is off the board")]
    OutOfBounds { cell: Coord },
    /// A cell would land on an occupied square.
    #[display("cell {cell} is already occupied")]
    Occupied { cell: Coord },
    /// A cell would share an edge with the player's own piece.
    #[display("cell {cell} shares an edge with an own piece")]
    EdgeContact { cell: Coord },
    /// No cell touches one of the player's pieces at a corner.
    #[display("piece does not touch an own piece at a corner")]
    NoCornerContact,
    /// A first piece must cover the player's starting corner.
    #[display("first piece must cover starting corner {corner}")]
    MissingStartingCorner { corner: Coord },
}

/// Why a state blob was refused.
#[derive(Debug, Display, Error, From)]
pub enum StateError {
    #[display("board size mismatch: expected {expected}, found {found}")]
    #[from(ignore)]
    BoardSizeMismatch { expected: usize, found: usize },
    #[display("grid data has {found} cells, expected {expected}")]
    #[from(ignore)]
    GridLength { expected: usize, found: usize },
    #[display("grid cell {index} has invalid value {value}")]
    #[from(ignore)]
    CellValue { index: usize, value: i32 },
    #[display("expected 4 first-piece flags, found {found}")]
    #[from(ignore)]
    PlayerFlags { found: usize },
    #[display("connectable position {cell} for {player} is off the board")]
    #[from(ignore)]
    ConnectableOutOfBounds { player: Player, cell: Coord },
    #[display("malformed state: {_0}")]
    Json(#[error(source)] serde_json::Error),
}

/// Invalid engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("board size {size} is below the minimum of {min}")]
    BoardTooSmall { size: usize, min: usize },
    #[display("board size {size} exceeds the maximum of {max}")]
    BoardTooLarge { size: usize, max: usize },
}
