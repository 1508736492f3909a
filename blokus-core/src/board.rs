//! The rule engine: grid, first-move flags and connectable caches.

use std::fmt;

use tracing::{debug, instrument, trace};

use crate::{
    check_placement, starting_corner, ConfigError, ConnectableCache, Coord, EngineConfig, Grid,
    Piece, PlacementError, PlacementObserver, Player, DEFAULT_BOARD_SIZE, PLAYER_COUNT,
};

/// A successful placement.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Placement {
    pub player: Player,
    pub anchor: Coord,
    /// Absolute squares covered by the piece.
    pub cells: Vec<Coord>,
}

/// Game board with everything needed to validate and search placements.
///
/// The board exclusively owns its grid, flags and caches. Reads go through
/// shared borrows or copies ([`Board::board_state`]); the only mutators are
/// [`Board::place_piece`], [`Board::clear`], [`Board::initialize`] and
/// [`Board::restore`].
///
/// Not synchronized: callers drive it from one thread, one call at a time.
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) first_piece_placed: [bool; PLAYER_COUNT],
    pub(crate) connectable: ConnectableCache,
    observers: Vec<Box<dyn PlacementObserver>>,
}

impl Board {
    /// Create an empty board of `size` x `size` squares.
    pub fn new(size: usize) -> Board {
        Board {
            grid: Grid::new(size),
            first_piece_placed: [false; PLAYER_COUNT],
            connectable: ConnectableCache::new(size),
            observers: Vec::new(),
        }
    }

    /// Create an empty standard 20x20 board.
    pub fn standard() -> Board {
        Board::new(DEFAULT_BOARD_SIZE)
    }

    /// Create an empty board from validated settings.
    pub fn with_config(config: &EngineConfig) -> Result<Board, ConfigError> {
        config.validate()?;
        Ok(Board::new(config.board_size))
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn add_observer(&mut self, observer: Box<dyn PlacementObserver>) {
        self.observers.push(observer);
    }

    /// Allocate a fresh grid and reset all flags and caches.
    #[instrument(skip(self), fields(size = self.grid.size()))]
    pub fn initialize(&mut self) {
        let size = self.grid.size();
        self.grid = Grid::new(size);
        self.reset_player_state();
        debug!("board initialized");
        for observer in &mut self.observers {
            observer.board_initialized(size);
        }
    }

    /// Empty the grid and reset all flags and caches.
    #[instrument(skip(self), fields(size = self.grid.size()))]
    pub fn clear(&mut self) {
        self.grid.clear();
        self.reset_player_state();
        debug!("board cleared");
        let size = self.grid.size();
        for observer in &mut self.observers {
            observer.board_initialized(size);
        }
    }

    fn reset_player_state(&mut self) {
        self.first_piece_placed = [false; PLAYER_COUNT];
        self.connectable.reset_all();
    }

    // ========== Queries ==========

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Read-only view of the occupancy grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Copy of the grid as rows (`rows[y][x]`).
    pub fn board_state(&self) -> Vec<Vec<u8>> {
        self.grid.to_rows()
    }

    /// Owner id of a square: 0 for empty, 1..=4 for a player, -1 off the board.
    pub fn position_owner(&self, pos: Coord) -> i8 {
        match self.grid.get(pos) {
            Some(value) => value as i8,
            None => -1,
        }
    }

    /// Check if a coordinate lies on the board.
    #[inline]
    pub fn is_position_valid(&self, pos: Coord) -> bool {
        self.grid.contains(pos)
    }

    /// The corner `player`'s first piece must cover.
    #[inline]
    pub fn starting_corner(&self, player: Player) -> Coord {
        starting_corner(self.grid.size(), player)
    }

    /// Check if `player` has placed a piece since the last reset.
    #[inline]
    pub fn first_piece_placed(&self, player: Player) -> bool {
        self.first_piece_placed[player.index()]
    }

    /// Read-only view of the connectable position caches.
    #[inline]
    pub fn connectable(&self) -> &ConnectableCache {
        &self.connectable
    }

    // ========== Validation & Placement ==========

    /// Check whether a placement is legal, reporting the broken rule.
    pub fn check_placement(
        &self,
        piece: &Piece,
        anchor: Coord,
        player: Player,
    ) -> Result<(), PlacementError> {
        check_placement(
            &self.grid,
            self.first_piece_placed(player),
            piece,
            anchor,
            player,
        )
    }

    /// Check whether a placement is legal. Never mutates.
    #[inline]
    pub fn is_valid_placement(&self, piece: &Piece, anchor: Coord, player: Player) -> bool {
        self.check_placement(piece, anchor, player).is_ok()
    }

    /// Validate and apply a placement.
    ///
    /// On success the grid, the player's first-move flag and the player's
    /// connectable set are updated and observers are notified. On failure
    /// nothing changes.
    #[instrument(skip(self, piece), fields(cells = piece.len()))]
    pub fn try_place_piece(
        &mut self,
        piece: &Piece,
        anchor: Coord,
        player: Player,
    ) -> Result<Placement, PlacementError> {
        if let Err(reason) = self.check_placement(piece, anchor, player) {
            trace!(%reason, "placement rejected");
            return Err(reason);
        }

        let cells: Vec<Coord> = piece.occupied_cells(anchor).collect();
        for &cell in &cells {
            self.grid.set(cell, player);
        }
        self.first_piece_placed[player.index()] = true;
        self.connectable.update_after_placement(&self.grid, player, &cells);

        debug!("piece placed");
        let placement = Placement {
            player,
            anchor,
            cells,
        };
        for observer in &mut self.observers {
            observer.piece_placed(&placement);
        }
        Ok(placement)
    }

    /// Validate and apply a placement. Returns false (and changes nothing) if
    /// it is illegal.
    pub fn place_piece(&mut self, piece: &Piece, anchor: Coord, player: Player) -> bool {
        self.try_place_piece(piece, anchor, player).is_ok()
    }

    pub(crate) fn notify_restored(&mut self) {
        for observer in &mut self.observers {
            observer.board_restored();
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.grid.size())
            .field("first_piece_placed", &self.first_piece_placed)
            .field("connectable", &self.connectable)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl fmt::Display for Board {
    /// ASCII rendering: `.` for empty, the player id otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.to_rows() {
            for value in row {
                if value == 0 {
                    f.write_str(".")?;
                } else {
                    write!(f, "{}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
