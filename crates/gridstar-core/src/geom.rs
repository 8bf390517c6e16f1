//! Geometry primitives: [`Coord`] and the eight unit move offsets.
//!
//! Coordinates are `(row, col)` pairs, 0-indexed, with rows growing down and
//! columns growing right. Components are signed so that a neighbour one step
//! off the edge of a grid is still representable and can be rejected by a
//! bounds check instead of wrapping around.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid coordinate. Equality and hashing use both components and nothing
/// else.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

/// The eight unit offsets, axis-aligned first and diagonals after.
///
/// Neighbours are always generated in this order; it is part of what makes
/// searches deterministic.
pub const OFFSETS: [Coord; 8] = [
    Coord::new(0, -1),
    Coord::new(0, 1),
    Coord::new(-1, 0),
    Coord::new(1, 0),
    Coord::new(-1, -1),
    Coord::new(-1, 1),
    Coord::new(1, -1),
    Coord::new(1, 1),
];

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// All eight neighbours, in [`OFFSETS`] order. No bounds checking.
    #[inline]
    pub fn neighbors_8(self) -> [Coord; 8] {
        OFFSETS.map(|d| self + d)
    }

    /// Whether `self` and `other` differ by exactly one of the eight unit
    /// offsets.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        let d = other - self;
        d != Coord::ZERO && d.row.abs() <= 1 && d.col.abs() <= 1
    }

    /// Whether the step from `self` to `other` moves along both axes.
    #[inline]
    pub fn is_diagonal_to(self, other: Coord) -> bool {
        self.row != other.row && self.col != other.col
    }
}

// --- trait impls for Coord ---

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}
