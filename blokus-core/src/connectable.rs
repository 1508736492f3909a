//! Per-player connectable position sets.
//!
//! A connectable position is a square where a player's next piece could make
//! corner contact: diagonal to one of the player's cells, empty, and sharing
//! no edge with the player's cells. The sets are maintained incrementally so
//! placement search is bounded by the perimeter of placed pieces instead of
//! the board area.
//!
//! Entries may go stale (an opponent can fill a square, or a later own piece
//! can come to share an edge with it). Stale entries only cost a wasted probe,
//! because every candidate is re-validated before it is reported. What the
//! update never does is miss a square that is currently connectable.

use std::collections::HashSet;

use tracing::debug;

use crate::{is_connectable, starting_corner, Coord, Grid, Player, PLAYER_COUNT};

/// Candidate anchor squares for each player.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ConnectableCache {
    size: usize,
    sets: [HashSet<Coord>; PLAYER_COUNT],
}

impl ConnectableCache {
    /// Create the initial cache: each player's set holds only their corner.
    pub fn new(size: usize) -> ConnectableCache {
        let mut cache = ConnectableCache {
            size,
            sets: Default::default(),
        };
        cache.reset_all();
        cache
    }

    /// Return every set to `{starting corner}`.
    pub fn reset_all(&mut self) {
        for player in Player::all() {
            let set = &mut self.sets[player.index()];
            set.clear();
            set.insert(starting_corner(self.size, player));
        }
    }

    /// Update `player`'s set after `cells` were filled with their piece.
    ///
    /// Must be called after the grid mutation. Other players' sets are not
    /// touched.
    pub fn update_after_placement(&mut self, grid: &Grid, player: Player, cells: &[Coord]) {
        let set = &mut self.sets[player.index()];

        for cell in cells {
            set.remove(cell);
        }

        let before = set.len();
        for &cell in cells {
            for diagonal in cell.corner_neighbors() {
                if is_connectable(grid, diagonal, player) {
                    set.insert(diagonal);
                }
            }
        }

        debug!(
            %player,
            added = set.len().saturating_sub(before),
            total = set.len(),
            "connectable positions updated"
        );
    }

    /// Candidate squares for `player`.
    #[inline]
    pub fn candidates(&self, player: Player) -> &HashSet<Coord> {
        &self.sets[player.index()]
    }

    /// Check if `pos` is a candidate for `player`.
    #[inline]
    pub fn contains(&self, player: Player, pos: Coord) -> bool {
        self.sets[player.index()].contains(&pos)
    }

    /// Candidates for `player` in row-major order.
    pub fn sorted(&self, player: Player) -> Vec<Coord> {
        let mut list: Vec<Coord> = self.sets[player.index()].iter().copied().collect();
        list.sort_by_key(|c| c.row_major_key());
        list
    }

    /// Replace `player`'s set wholesale.
    pub(crate) fn replace(&mut self, player: Player, positions: impl IntoIterator<Item = Coord>) {
        self.sets[player.index()] = positions.into_iter().collect();
    }
}
