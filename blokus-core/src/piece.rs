//! Polyomino pieces and the standard 21-piece set.
//!
//! # Shape Encoding
//!
//! ```text
//! A shape is a sorted, deduplicated list of (dx, dy) offsets from an anchor.
//! Transforms re-normalize so the smallest dx and dy are both 0:
//!
//!   rotated90:          (x, y) -> (-y, x)
//!   flipped_horizontal: (x, y) -> (-x, y)
//!
//! Example (L4):
//!   X.      (0,0)
//!   X.      (0,1)
//!   XX      (0,2) (1,2)
//! ```

use crate::Coord;

/// A polyomino: a set of cell offsets relative to an anchor.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    shape: Vec<Coord>,
}

impl Piece {
    /// Create a piece from offsets. Duplicates are dropped.
    pub fn new(offsets: impl IntoIterator<Item = Coord>) -> Piece {
        let mut shape: Vec<Coord> = offsets.into_iter().collect();
        shape.sort_by_key(|c| c.row_major_key());
        shape.dedup();
        Piece { shape }
    }

    /// Create a piece from `(dx, dy)` pairs.
    pub fn from_offsets(offsets: &[(i32, i32)]) -> Piece {
        Piece::new(offsets.iter().copied().map(Coord::from))
    }

    /// Cell offsets relative to the anchor.
    #[inline]
    pub fn shape(&self) -> &[Coord] {
        &self.shape
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.shape.len()
    }

    /// Check if the piece has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    /// Absolute cells covered when the piece is placed at `anchor`.
    ///
    /// Components past the `i32` range are clamped, which leaves them off
    /// every board.
    pub fn occupied_cells(&self, anchor: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.shape.iter().map(move |&offset| anchor.saturating_add(offset))
    }

    /// Copy shifted so the smallest dx and dy are 0.
    ///
    /// Shapes wider than the `i32` range are clamped at `i32::MAX`.
    pub fn normalized(&self) -> Piece {
        let min_x = self.shape.iter().map(|c| c.x).min().unwrap_or(0);
        let min_y = self.shape.iter().map(|c| c.y).min().unwrap_or(0);
        Piece::new(
            self.shape
                .iter()
                .map(|c| Coord::new(c.x.saturating_sub(min_x), c.y.saturating_sub(min_y))),
        )
    }

    /// Copy rotated a quarter turn.
    pub fn rotated90(&self) -> Piece {
        Piece::new(self.shape.iter().map(|c| Coord::new(c.y.saturating_neg(), c.x))).normalized()
    }

    /// Copy mirrored left-to-right.
    pub fn flipped_horizontal(&self) -> Piece {
        Piece::new(self.shape.iter().map(|c| Coord::new(c.x.saturating_neg(), c.y))).normalized()
    }

    /// Distinct orientations among the 4 rotations x 2 reflections.
    ///
    /// The first entry is the normalized piece itself. Symmetric pieces yield
    /// fewer than 8 entries.
    pub fn orientations(&self) -> Vec<Piece> {
        let mut result: Vec<Piece> = Vec::with_capacity(8);
        for base in [self.normalized(), self.flipped_horizontal()] {
            let mut current = base;
            for _ in 0..4 {
                let next = current.rotated90();
                if !result.contains(&current) {
                    result.push(current);
                }
                current = next;
            }
        }
        result
    }
}

/// The 21 standard pieces.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum PieceKind {
    I1,
    I2,
    I3,
    V3,
    I4,
    L4,
    T4,
    O4,
    Z4,
    F,
    I5,
    L5,
    N,
    P,
    T5,
    U,
    V5,
    W,
    X,
    Y,
    Z5,
}

impl PieceKind {
    pub const ALL: [PieceKind; 21] = [
        PieceKind::I1,
        PieceKind::I2,
        PieceKind::I3,
        PieceKind::V3,
        PieceKind::I4,
        PieceKind::L4,
        PieceKind::T4,
        PieceKind::O4,
        PieceKind::Z4,
        PieceKind::F,
        PieceKind::I5,
        PieceKind::L5,
        PieceKind::N,
        PieceKind::P,
        PieceKind::T5,
        PieceKind::U,
        PieceKind::V5,
        PieceKind::W,
        PieceKind::X,
        PieceKind::Y,
        PieceKind::Z5,
    ];

    fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            PieceKind::I1 => &[(0, 0)],
            PieceKind::I2 => &[(0, 0), (1, 0)],
            PieceKind::I3 => &[(0, 0), (1, 0), (2, 0)],
            PieceKind::V3 => &[(0, 0), (0, 1), (1, 1)],
            PieceKind::I4 => &[(0, 0), (1, 0), (2, 0), (3, 0)],
            PieceKind::L4 => &[(0, 0), (0, 1), (0, 2), (1, 2)],
            PieceKind::T4 => &[(0, 0), (1, 0), (2, 0), (1, 1)],
            PieceKind::O4 => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            PieceKind::Z4 => &[(0, 0), (1, 0), (1, 1), (2, 1)],
            PieceKind::F => &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
            PieceKind::I5 => &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)],
            PieceKind::L5 => &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 3)],
            PieceKind::N => &[(0, 0), (1, 0), (1, 1), (2, 1), (3, 1)],
            PieceKind::P => &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
            PieceKind::T5 => &[(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)],
            PieceKind::U => &[(0, 0), (2, 0), (0, 1), (1, 1), (2, 1)],
            PieceKind::V5 => &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)],
            PieceKind::W => &[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)],
            PieceKind::X => &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
            PieceKind::Y => &[(1, 0), (0, 1), (1, 1), (2, 1), (3, 1)],
            PieceKind::Z5 => &[(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)],
        }
    }

    /// Build the piece in its default orientation.
    pub fn piece(self) -> Piece {
        Piece::from_offsets(self.offsets())
    }

    /// Number of squares in the piece.
    pub fn cells(self) -> usize {
        self.offsets().len()
    }
}

/// One player's pieces, each either in hand or already placed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PieceSet {
    placed: [bool; 21],
}

impl PieceSet {
    /// A full set with every piece in hand.
    pub fn standard() -> PieceSet {
        PieceSet { placed: [false; 21] }
    }

    fn slot(kind: PieceKind) -> usize {
        kind as usize
    }

    /// Check if a piece is still in hand.
    pub fn is_available(&self, kind: PieceKind) -> bool {
        !self.placed[Self::slot(kind)]
    }

    /// Record that a piece has been placed. Returns false if it already was.
    pub fn mark_placed(&mut self, kind: PieceKind) -> bool {
        let slot = &mut self.placed[Self::slot(kind)];
        let was_available = !*slot;
        *slot = true;
        was_available
    }

    /// Kinds still in hand, in catalogue order.
    pub fn remaining(&self) -> impl Iterator<Item = PieceKind> + '_ {
        PieceKind::ALL.into_iter().filter(|&k| self.is_available(k))
    }

    /// Pieces still in hand.
    pub fn remaining_pieces(&self) -> Vec<Piece> {
        self.remaining().map(PieceKind::piece).collect()
    }

    /// Total squares of the pieces still in hand.
    pub fn remaining_cells(&self) -> usize {
        self.remaining().map(PieceKind::cells).sum()
    }

    /// Check if every piece has been placed.
    pub fn is_exhausted(&self) -> bool {
        self.placed.iter().all(|&p| p)
    }
}

impl Default for PieceSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// All 21 standard pieces in their default orientation.
pub fn standard_set() -> Vec<Piece> {
    PieceKind::ALL.into_iter().map(PieceKind::piece).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn cells(piece: &Piece) -> Vec<(i32, i32)> {
        piece.shape().iter().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn test_new_sorts_and_dedups() {
        let piece = Piece::from_offsets(&[(1, 0), (0, 0), (1, 0)]);
        assert_eq!(cells(&piece), vec![(0, 0), (1, 0)]);
    }

    #[test]
    fn test_occupied_cells() {
        let piece = PieceKind::L4.piece();
        let occupied: Vec<_> = piece.occupied_cells(Coord::new(5, 7)).collect();
        assert_eq!(
            occupied,
            vec![Coord::new(5, 7), Coord::new(5, 8), Coord::new(5, 9), Coord::new(6, 9)]
        );
    }

    #[test]
    fn test_rotate_domino() {
        let piece = PieceKind::I2.piece();
        assert_eq!(cells(&piece.rotated90()), vec![(0, 0), (0, 1)]);
        assert_eq!(piece.rotated90().rotated90(), piece);
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        for kind in PieceKind::ALL {
            let piece = kind.piece().normalized();
            let turned = piece.rotated90().rotated90().rotated90().rotated90();
            assert_eq!(turned, piece, "{:?}", kind);
        }
    }

    #[test]
    fn test_flip_twice_is_identity() {
        for kind in PieceKind::ALL {
            let piece = kind.piece().normalized();
            assert_eq!(piece.flipped_horizontal().flipped_horizontal(), piece, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotation_changes_l4() {
        let piece = PieceKind::L4.piece();
        // X.    XXX
        // X. -> X..
        // XX
        assert_eq!(cells(&piece.rotated90()), vec![(0, 0), (1, 0), (2, 0), (0, 1)]);
        // X.    .X
        // X. -> .X
        // XX    XX
        assert_eq!(cells(&piece.flipped_horizontal()), vec![(1, 0), (1, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_transforms_preserve_size() {
        for kind in PieceKind::ALL {
            for orientation in kind.piece().orientations() {
                assert_eq!(orientation.len(), kind.cells());
                assert!(orientation.shape().iter().all(|c| c.x >= 0 && c.y >= 0));
            }
        }
    }

    #[test]
    fn test_orientation_counts() {
        let expected = [
            (PieceKind::I1, 1),
            (PieceKind::I2, 2),
            (PieceKind::I3, 2),
            (PieceKind::V3, 4),
            (PieceKind::I4, 2),
            (PieceKind::L4, 8),
            (PieceKind::T4, 4),
            (PieceKind::O4, 1),
            (PieceKind::Z4, 4),
            (PieceKind::F, 8),
            (PieceKind::I5, 2),
            (PieceKind::L5, 8),
            (PieceKind::N, 8),
            (PieceKind::P, 8),
            (PieceKind::T5, 4),
            (PieceKind::U, 4),
            (PieceKind::V5, 4),
            (PieceKind::W, 4),
            (PieceKind::X, 1),
            (PieceKind::Y, 8),
            (PieceKind::Z5, 4),
        ];
        for (kind, count) in expected {
            assert_eq!(kind.piece().orientations().len(), count, "{:?}", kind);
        }
        let total: usize = PieceKind::ALL.iter().map(|k| k.piece().orientations().len()).sum();
        assert_eq!(total, 91);
    }

    #[test]
    fn test_orientations_are_distinct() {
        for kind in PieceKind::ALL {
            let orientations = kind.piece().orientations();
            let unique: HashSet<_> = orientations.iter().cloned().collect();
            assert_eq!(unique.len(), orientations.len());
        }
    }

    #[test]
    fn test_standard_set_sizes() {
        let set = standard_set();
        assert_eq!(set.len(), 21);
        let total: usize = set.iter().map(Piece::len).sum();
        assert_eq!(total, 89);
        for kind in PieceKind::ALL {
            assert_eq!(kind.piece().normalized(), kind.piece(), "{:?} not normalized", kind);
        }
    }

    #[test]
    fn test_standard_pieces_are_distinct_shapes() {
        let mut seen = HashSet::new();
        for kind in PieceKind::ALL {
            let canonical = kind
                .piece()
                .orientations()
                .into_iter()
                .min_by_key(cells)
                .unwrap();
            assert!(seen.insert(canonical), "{:?} duplicates another piece", kind);
        }
    }

    #[test]
    fn test_piece_set_tracking() {
        let mut set = PieceSet::standard();
        assert_eq!(set.remaining().count(), 21);
        assert_eq!(set.remaining_cells(), 89);

        assert!(set.mark_placed(PieceKind::X));
        assert!(!set.mark_placed(PieceKind::X));
        assert!(!set.is_available(PieceKind::X));
        assert_eq!(set.remaining().count(), 20);
        assert_eq!(set.remaining_cells(), 84);
        assert_eq!(set.remaining_pieces().len(), 20);

        for kind in PieceKind::ALL {
            set.mark_placed(kind);
        }
        assert!(set.is_exhausted());
        assert_eq!(set.remaining_cells(), 0);
    }

    #[test]
    fn test_extreme_offsets_do_not_overflow() {
        let wide = Piece::from_offsets(&[(0, 0), (i32::MIN, 0)]);
        let normalized = wide.normalized();
        assert_eq!(cells(&normalized), vec![(0, 0), (i32::MAX, 0)]);
        assert!(!wide.orientations().is_empty());

        let tall = Piece::from_offsets(&[(0, i32::MIN), (0, i32::MAX)]);
        assert!(tall.orientations().iter().all(|o| o.len() == 2));

        let placed: Vec<_> = Piece::from_offsets(&[(1, 0)])
            .occupied_cells(Coord::new(i32::MAX, 0))
            .collect();
        assert_eq!(placed, vec![Coord::new(i32::MAX, 0)]);
    }

    #[test]
    fn test_empty_piece() {
        let piece = Piece::new(Vec::new());
        assert!(piece.is_empty());
        assert_eq!(piece.normalized(), piece);
        assert!(piece.orientations().len() <= 1);
    }
}
