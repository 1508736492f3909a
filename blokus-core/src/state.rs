//! Snapshot and restore of the full board state.
//!
//! # Blob Shape (JSON)
//!
//! ```text
//! {
//!   "boardSize": 20,
//!   "gridData": [0, 1, ...],                  // size * size, row-major
//!   "playerFirstPiecePlaced": [true, false, false, false],
//!   "connectablePositions": {
//!     "player1": [{"x": 4, "y": 1}, ...],     // row-major order
//!     "player2": [...], "player3": [...], "player4": [...]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{Board, ConnectableCache, Coord, Grid, Player, StateError, PLAYER_COUNT};

/// Per-player connectable positions, keyed `player1`..`player4`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectablePositions {
    pub player1: Vec<Coord>,
    pub player2: Vec<Coord>,
    pub player3: Vec<Coord>,
    pub player4: Vec<Coord>,
}

impl ConnectablePositions {
    /// Positions for one player.
    pub fn get(&self, player: Player) -> &[Coord] {
        match player {
            Player::One => &self.player1,
            Player::Two => &self.player2,
            Player::Three => &self.player3,
            Player::Four => &self.player4,
        }
    }

    fn get_mut(&mut self, player: Player) -> &mut Vec<Coord> {
        match player {
            Player::One => &mut self.player1,
            Player::Two => &mut self.player2,
            Player::Three => &mut self.player3,
            Player::Four => &mut self.player4,
        }
    }
}

/// Transport-neutral snapshot of a [`Board`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateBlob {
    pub board_size: usize,
    pub grid_data: Vec<i32>,
    pub player_first_piece_placed: Vec<bool>,
    pub connectable_positions: ConnectablePositions,
}

impl StateBlob {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON. Structure only; [`Board::restore`] checks contents.
    pub fn from_json(json: &str) -> Result<StateBlob, StateError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Board {
    /// Snapshot the grid, first-move flags and connectable caches.
    pub fn serialize_state(&self) -> StateBlob {
        let mut connectable_positions = ConnectablePositions::default();
        for player in Player::all() {
            *connectable_positions.get_mut(player) = self.connectable.sorted(player);
        }

        StateBlob {
            board_size: self.grid.size(),
            grid_data: self.grid.cells().iter().map(|&v| v as i32).collect(),
            player_first_piece_placed: self.first_piece_placed.to_vec(),
            connectable_positions,
        }
    }

    /// Overwrite the whole state from a snapshot.
    ///
    /// The blob is checked completely before anything is written, so on error
    /// the board is exactly as it was.
    #[instrument(skip(self, blob), fields(size = self.grid.size()))]
    pub fn restore(&mut self, blob: &StateBlob) -> Result<(), StateError> {
        let (grid, flags, connectable) = match self.decode(blob) {
            Ok(parts) => parts,
            Err(err) => {
                warn!(%err, "state blob refused");
                return Err(err);
            }
        };

        self.grid = grid;
        self.first_piece_placed = flags;
        self.connectable = connectable;
        debug!("state restored");
        self.notify_restored();
        Ok(())
    }

    /// Overwrite the whole state from a snapshot. Returns false (and changes
    /// nothing) if the blob does not fit this board.
    pub fn deserialize_state(&mut self, blob: &StateBlob) -> bool {
        self.restore(blob).is_ok()
    }

    /// Snapshot as JSON.
    pub fn to_json(&self) -> Result<String, StateError> {
        self.serialize_state().to_json()
    }

    /// Restore from JSON. Malformed input leaves the board unchanged.
    pub fn restore_json(&mut self, json: &str) -> Result<(), StateError> {
        let blob = match StateBlob::from_json(json) {
            Ok(blob) => blob,
            Err(err) => {
                warn!(%err, "state json refused");
                return Err(err);
            }
        };
        self.restore(&blob)
    }

    fn decode(
        &self,
        blob: &StateBlob,
    ) -> Result<(Grid, [bool; PLAYER_COUNT], ConnectableCache), StateError> {
        let size = self.grid.size();
        if blob.board_size != size {
            return Err(StateError::BoardSizeMismatch {
                expected: size,
                found: blob.board_size,
            });
        }

        let mut cells = Vec::with_capacity(blob.grid_data.len());
        for (index, &value) in blob.grid_data.iter().enumerate() {
            let cell = u8::try_from(value).map_err(|_| StateError::CellValue { index, value })?;
            cells.push(cell);
        }
        let grid = Grid::from_cells(size, cells)?;

        let flags: [bool; PLAYER_COUNT] = blob
            .player_first_piece_placed
            .as_slice()
            .try_into()
            .map_err(|_| StateError::PlayerFlags {
                found: blob.player_first_piece_placed.len(),
            })?;

        let mut connectable = ConnectableCache::new(size);
        for player in Player::all() {
            let positions = blob.connectable_positions.get(player);
            if let Some(&cell) = positions.iter().find(|&&c| !grid.contains(c)) {
                return Err(StateError::ConnectableOutOfBounds { player, cell });
            }
            connectable.replace(player, positions.iter().copied());
        }

        Ok((grid, flags, connectable))
    }
}
