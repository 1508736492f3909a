//! Placement rules.
//!
//! Pure checks against a [`Grid`]; nothing here mutates state.

use crate::{starting_corner, Coord, Grid, Piece, PlacementError, Player};

/// Check whether `piece` may be placed at `anchor` for `player`.
///
/// `first_piece_placed` selects between the starting-corner rule (false) and
/// the corner-contact rule (true). Checks run in order and stop at the first
/// failure:
///
/// 1. every cell on the board
/// 2. every cell empty
/// 3. no cell shares an edge with an own piece
/// 4. corner rule
pub fn check_placement(
    grid: &Grid,
    first_piece_placed: bool,
    piece: &Piece,
    anchor: Coord,
    player: Player,
) -> Result<(), PlacementError> {
    if piece.is_empty() {
        return Err(PlacementError::EmptyPiece);
    }

    let mut cells = Vec::with_capacity(piece.len());
    for &offset in piece.shape() {
        match anchor.checked_add(offset) {
            Some(cell) if grid.contains(cell) => cells.push(cell),
            Some(cell) => return Err(PlacementError::OutOfBounds { cell }),
            None => {
                return Err(PlacementError::OutOfBounds {
                    cell: anchor.saturating_add(offset),
                })
            }
        }
    }

    if let Some(&cell) = cells.iter().find(|&&c| !grid.is_empty(c)) {
        return Err(PlacementError::Occupied { cell });
    }

    if let Some(&cell) = cells.iter().find(|&&c| grid.touches_edge_of(c, player)) {
        return Err(PlacementError::EdgeContact { cell });
    }

    if first_piece_placed {
        if !cells.iter().any(|&c| grid.touches_corner_of(c, player)) {
            return Err(PlacementError::NoCornerContact);
        }
    } else {
        let corner = starting_corner(grid.size(), player);
        if !cells.contains(&corner) {
            return Err(PlacementError::MissingStartingCorner { corner });
        }
    }

    Ok(())
}

/// Check if `pos` can anchor a future piece of `player`: on the board, empty,
/// and sharing no edge with the player's cells.
#[inline]
pub fn is_connectable(grid: &Grid, pos: Coord, player: Player) -> bool {
    grid.is_empty(pos) && !grid.touches_edge_of(pos, player)
}
