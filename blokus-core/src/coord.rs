//! Board coordinates and neighbor offsets.

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A square on the board, or an offset between squares.
///
/// `x` is the column and `y` is the row. Cells are stored row-major, so the
/// flat index of an on-board coordinate is `y * size + x`.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize, derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Create a coordinate from column and row.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }

    /// Sum, or None if either component overflows.
    #[inline]
    pub fn checked_add(self, rhs: Coord) -> Option<Coord> {
        Some(Coord::new(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }

    /// Difference, or None if either component overflows.
    #[inline]
    pub fn checked_sub(self, rhs: Coord) -> Option<Coord> {
        Some(Coord::new(self.x.checked_sub(rhs.x)?, self.y.checked_sub(rhs.y)?))
    }

    /// Sum clamped to the `i32` range. A clamped result is never on a board.
    #[inline]
    pub fn saturating_add(self, rhs: Coord) -> Coord {
        Coord::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }

    /// The four orthogonal neighbors of this coordinate.
    #[inline]
    pub fn edge_neighbors(self) -> impl Iterator<Item = Coord> {
        EDGE_STEPS.into_iter().map(move |step| self.saturating_add(step))
    }

    /// The four diagonal neighbors of this coordinate.
    #[inline]
    pub fn corner_neighbors(self) -> impl Iterator<Item = Coord> {
        CORNER_STEPS.into_iter().map(move |step| self.saturating_add(step))
    }

    /// Row-major sort key (row first, then column).
    #[inline]
    pub fn row_major_key(self) -> (i32, i32) {
        (self.y, self.x)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Coord {
        Coord::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

/// Orthogonal steps: the squares that share an edge.
pub const EDGE_STEPS: [Coord; 4] = [
    Coord { x: 0, y: -1 },
    Coord { x: -1, y: 0 },
    Coord { x: 1, y: 0 },
    Coord { x: 0, y: 1 },
];

/// Diagonal steps: the squares that share only a corner.
pub const CORNER_STEPS: [Coord; 4] = [
    Coord { x: -1, y: -1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: 1, y: 1 },
];
