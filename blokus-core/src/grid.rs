//! Square occupancy grid.

use crate::{Coord, Player, StateError};

/// Cell value for an empty square.
pub const EMPTY: u8 = 0;

/// The corner a player's first piece must cover on a board of `size` squares.
///
/// Players go clockwise from the top-left corner.
#[inline]
pub fn starting_corner(size: usize, player: Player) -> Coord {
    let far = size as i32 - 1;
    match player {
        Player::One => Coord::new(0, 0),
        Player::Two => Coord::new(far, 0),
        Player::Three => Coord::new(far, far),
        Player::Four => Coord::new(0, far),
    }
}

/// NxN occupancy array.
///
/// Every cell holds [`EMPTY`] or the id (1..=4) of the owning player. The
/// size is fixed for the lifetime of the grid.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an empty grid of `size` x `size` squares.
    pub fn new(size: usize) -> Grid {
        Grid {
            size,
            cells: vec![EMPTY; size * size],
        }
    }

    /// Build a grid from row-major cell values.
    ///
    /// Fails if the length is not `size * size` or a value is not a valid
    /// owner.
    pub fn from_cells(size: usize, cells: Vec<u8>) -> Result<Grid, StateError> {
        let expected = size * size;
        if cells.len() != expected {
            return Err(StateError::GridLength {
                expected,
                found: cells.len(),
            });
        }
        if let Some((index, &value)) = cells
            .iter()
            .enumerate()
            .find(|&(_, &v)| v != EMPTY && Player::from_id(v).is_none())
        {
            return Err(StateError::CellValue {
                index,
                value: i32::from(value),
            });
        }
        Ok(Grid { size, cells })
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cell values.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Check if a coordinate lies on the board.
    #[inline]
    pub fn contains(&self, pos: Coord) -> bool {
        let size = self.size as i64;
        (0..size).contains(&(pos.x as i64)) && (0..size).contains(&(pos.y as i64))
    }

    #[inline]
    fn index(&self, pos: Coord) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.y as usize * self.size + pos.x as usize)
        } else {
            None
        }
    }

    /// Raw cell value, or None off the board.
    #[inline]
    pub fn get(&self, pos: Coord) -> Option<u8> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Owner of a square. None if empty or off the board.
    #[inline]
    pub fn owner(&self, pos: Coord) -> Option<Player> {
        self.get(pos).and_then(Player::from_id)
    }

    /// Check if a square is on the board and empty.
    #[inline]
    pub fn is_empty(&self, pos: Coord) -> bool {
        self.get(pos) == Some(EMPTY)
    }

    /// Check if a square is on the board and owned by `player`.
    #[inline]
    pub fn is_owned_by(&self, pos: Coord, player: Player) -> bool {
        self.get(pos) == Some(player.id())
    }

    /// Check if any orthogonal neighbor of `pos` is owned by `player`.
    #[inline]
    pub fn touches_edge_of(&self, pos: Coord, player: Player) -> bool {
        pos.edge_neighbors().any(|n| self.is_owned_by(n, player))
    }

    /// Check if any diagonal neighbor of `pos` is owned by `player`.
    #[inline]
    pub fn touches_corner_of(&self, pos: Coord, player: Player) -> bool {
        pos.corner_neighbors().any(|n| self.is_owned_by(n, player))
    }

    /// Mark a square as owned by `player`. Off-board squares are ignored.
    ///
    /// Does NOT validate - the caller must have checked the placement.
    pub(crate) fn set(&mut self, pos: Coord, player: Player) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = player.id();
        }
    }

    /// Empty every square.
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Copy of the grid as rows (`rows[y][x]`).
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.size).map(<[u8]>::to_vec).collect()
    }

    /// Count the squares owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&v| v == player.id()).count()
    }
}
