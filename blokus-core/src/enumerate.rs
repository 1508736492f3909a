//! Legal placement search driven by the connectable caches.

use std::collections::HashSet;

use tracing::{instrument, trace};

use crate::{Board, Coord, Piece, Player};

impl Board {
    /// All anchors at which `piece` (in its given orientation) may be placed
    /// by `player`, in row-major order without duplicates.
    ///
    /// For every connectable position `c` and every shape offset `o`, the
    /// anchor `c - o` puts that piece cell on `c`. Each such anchor is fully
    /// validated; being derived from a candidate proves nothing.
    pub fn valid_placements(&self, piece: &Piece, player: Player) -> Vec<Coord> {
        let mut seen: HashSet<Coord> = HashSet::new();
        let mut anchors: Vec<Coord> = Vec::new();

        for &candidate in self.connectable.candidates(player) {
            for &offset in piece.shape() {
                // An anchor past the i32 range cannot put this cell on the board
                let Some(anchor) = candidate.checked_sub(offset) else {
                    continue;
                };
                if seen.insert(anchor) && self.is_valid_placement(piece, anchor, player) {
                    anchors.push(anchor);
                }
            }
        }

        anchors.sort_by_key(|c| c.row_major_key());
        trace!(%player, probes = seen.len(), found = anchors.len(), "placements enumerated");
        anchors
    }

    /// Check if `player` can place any of `pieces` in any orientation.
    ///
    /// Each piece is tried in all of its distinct rotations and reflections.
    /// Returns as soon as one legal placement is found.
    #[instrument(skip(self, pieces), fields(pieces = pieces.len()))]
    pub fn has_valid_moves(&self, player: Player, pieces: &[Piece]) -> bool {
        pieces.iter().any(|piece| {
            piece
                .orientations()
                .iter()
                .any(|orientation| !self.valid_placements(orientation, player).is_empty())
        })
    }

    /// Every legal `(orientation, anchor)` pair for `piece`.
    pub fn all_placements(&self, piece: &Piece, player: Player) -> Vec<(Piece, Coord)> {
        piece
            .orientations()
            .into_iter()
            .flat_map(|orientation| {
                self.valid_placements(&orientation, player)
                    .into_iter()
                    .map(move |anchor| (orientation.clone(), anchor))
            })
            .collect()
    }
}
