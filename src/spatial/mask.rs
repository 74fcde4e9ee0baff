//! Row-major membership masks over a grid
//!
//! A mask records which cells of a fixed-extent grid belong to a result set.
//! Renderers and callers comparing result sets use it for O(1) membership.

use bitvec::prelude::*;
use std::fmt;

use crate::spatial::coord::Coord;
use crate::spatial::tile::GridTile;

/// Fixed-size bitset with one bit per grid cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMask {
    bits: BitVec,
    height: usize,
    width: usize,
}

impl TileMask {
    /// Create a mask with no cells set
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            bits: bitvec![0; height * width],
            height,
            width,
        }
    }

    /// Create a mask from the positions of extracted tiles
    ///
    /// Tiles positioned outside the mask's extent are ignored.
    pub fn from_tiles<I>(bounds: (usize, usize), tiles: I) -> Self
    where
        I: IntoIterator,
        I::Item: GridTile,
    {
        let mut mask = Self::new(bounds.0, bounds.1);
        for tile in tiles {
            mask.insert(tile.position());
        }
        mask
    }

    /// Mask extent as `(height, width)`
    pub const fn bounds(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Set a cell, returning whether it was newly set
    pub fn insert(&mut self, coord: Coord) -> bool {
        let Some(index) = self.index_of(coord) else {
            return false;
        };
        let was_set = self.bits.get(index).as_deref() == Some(&true);
        self.bits.set(index, true);
        !was_set
    }

    /// Test cell membership
    pub fn contains(&self, coord: Coord) -> bool {
        self.index_of(coord)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Test if no cells are set
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count set cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Set cells in row-major order
    pub fn coords(&self) -> Vec<Coord> {
        self.bits
            .iter_ones()
            .map(|index| Coord::new((index / self.width) as i32, (index % self.width) as i32))
            .collect()
    }

    /// Cells set in either mask, with this mask's extent
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        if self.bounds() == other.bounds() {
            result.bits |= &other.bits;
        } else {
            for coord in other.coords() {
                result.insert(coord);
            }
        }
        result
    }

    /// Cells set in this mask but not in the other
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for index in self.bits.iter_ones() {
            let coord = Coord::new((index / self.width) as i32, (index % self.width) as i32);
            if other.contains(coord) {
                result.bits.set(index, false);
            }
        }
        result
    }

    /// Whether no cell is set in both masks
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.coords().into_iter().all(|coord| !other.contains(coord))
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        let [row, col] = coord.to_index()?;
        (row < self.height && col < self.width).then_some(row * self.width + col)
    }
}

impl fmt::Display for TileMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TileMask({}x{}, {} cells set)",
            self.height,
            self.width,
            self.count()
        )
    }
}
