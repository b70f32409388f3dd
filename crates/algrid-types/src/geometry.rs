// ─────────────────────────────────────────────────────────────────────
// Algrid — Corner Roles and Relative Position
// ─────────────────────────────────────────────────────────────────────
//! Corner roles of a span's bounding box and the nine-way classifier used
//! to test adjacency between spans.
//!
//! Orientation follows the grid dump: `f` grows to the east (columns),
//! `e` grows to the south (rows). "Top" is the `e_start` edge, "left" is
//! the `f_start` edge.

use serde::{Deserialize, Serialize};

use crate::span::SpanBounds;

/// One of the four corners of a span's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Slot index inside a grid cell.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Grid coordinate `(f, e)` of this corner on `span`.
    pub fn of<S: SpanBounds + ?Sized>(self, span: &S) -> (usize, usize) {
        match self {
            Corner::TopLeft => (span.f_start(), span.e_start()),
            Corner::TopRight => (span.f_end(), span.e_start()),
            Corner::BottomLeft => (span.f_start(), span.e_end()),
            Corner::BottomRight => (span.f_end(), span.e_end()),
        }
    }

    /// The corner diagonally across the box.
    pub const fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }
}

/// Position of a grid point relative to a span's bounding box.
///
/// The nine labels partition the plane: every point gets exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelativePos {
    N,
    NW,
    W,
    SW,
    S,
    SE,
    E,
    NE,
    /// Inside the box.
    I,
}

impl RelativePos {
    pub const ALL: [RelativePos; 9] = [
        RelativePos::N,
        RelativePos::NW,
        RelativePos::W,
        RelativePos::SW,
        RelativePos::S,
        RelativePos::SE,
        RelativePos::E,
        RelativePos::NE,
        RelativePos::I,
    ];

    /// Classify `(f, e)` against `span`. Pure; consults no grid state.
    pub fn classify<S: SpanBounds + ?Sized>(span: &S, f: usize, e: usize) -> RelativePos {
        let (f1, f2) = (span.f_start(), span.f_end());
        let (e1, e2) = (span.e_start(), span.e_end());

        if f < f1 {
            if e < e1 {
                return RelativePos::NW;
            }
            if e > e2 {
                return RelativePos::SW;
            }
            return RelativePos::W;
        }
        if f > f2 {
            if e < e1 {
                return RelativePos::NE;
            }
            if e > e2 {
                return RelativePos::SE;
            }
            return RelativePos::E;
        }
        if e < e1 {
            return RelativePos::N;
        }
        if e > e2 {
            return RelativePos::S;
        }
        RelativePos::I
    }

    /// Corner role a diagonal neighbour in this direction would leave at
    /// the query point: a span to the NW touches with its bottom-right
    /// corner, and so on. Edge and inside positions have none.
    pub const fn facing_corner(self) -> Option<Corner> {
        match self {
            RelativePos::NW => Some(Corner::BottomRight),
            RelativePos::SW => Some(Corner::TopRight),
            RelativePos::NE => Some(Corner::BottomLeft),
            RelativePos::SE => Some(Corner::TopLeft),
            _ => None,
        }
    }

    pub const fn is_diagonal(self) -> bool {
        self.facing_corner().is_some()
    }
}
