//! Signed grid coordinates in `[row, col]` order
//!
//! Coordinates are signed so shape iteration can describe cells beyond the
//! grid edge; such cells simply resolve to absent when probed.

use std::fmt;

/// A cell location, addressed row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index (world Y)
    pub row: i32,
    /// Column index (world X)
    pub col: i32,
}

impl Coord {
    /// Create a coordinate from a row and a column
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Squared Euclidean distance to another coordinate
    ///
    /// Computed in 128-bit integers: a single `i32` delta squared already
    /// exceeds `i64`, and no floating-point rounding enters shape membership.
    pub const fn squared_distance(self, other: Self) -> i128 {
        let dr = self.row as i128 - other.row as i128;
        let dc = self.col as i128 - other.col as i128;
        dr * dr + dc * dc
    }

    /// Offset this coordinate by a row and column delta
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// Convert to array indices when both components are non-negative
    pub const fn to_index(self) -> Option<[usize; 2]> {
        if self.row < 0 || self.col < 0 {
            None
        } else {
            Some([self.row as usize, self.col as usize])
        }
    }
}

impl From<[i32; 2]> for Coord {
    fn from([row, col]: [i32; 2]) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for [i32; 2] {
    fn from(coord: Coord) -> Self {
        [coord.row, coord.col]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
