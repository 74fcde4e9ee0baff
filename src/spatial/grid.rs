//! Fixed-extent tile grids and span clipping
//!
//! The extraction engine only ever reads a grid through [`TileGrid`]. The
//! concrete [`TileMap`] stores one optional tile per cell in a row-major
//! `ndarray` matrix whose dimensions never change after construction.

use std::ops::Range;

use ndarray::Array2;

use crate::io::error::{ExtractionError, Result};
use crate::spatial::coord::Coord;
use crate::spatial::tile::{GridTile, Tile};

/// Read contract a grid offers to the extraction engine
pub trait TileGrid {
    /// Tile type stored in the grid
    type Tile: GridTile;

    /// Look up the tile at a coordinate
    ///
    /// Returns `None` for empty cells and for any coordinate outside the
    /// grid. Must never panic, since shape iteration probes past the edges.
    fn get(&self, coord: Coord) -> Option<&Self::Tile>;

    /// Grid extent as `(height, width)`
    fn bounds(&self) -> (usize, usize);

    /// Whether a coordinate lies within `[0, height) x [0, width)`
    fn contains(&self, coord: Coord) -> bool {
        let (height, width) = self.bounds();
        coord
            .to_index()
            .is_some_and(|[row, col]| row < height && col < width)
    }
}

impl<G: TileGrid + ?Sized> TileGrid for &G {
    type Tile = G::Tile;

    fn get(&self, coord: Coord) -> Option<&Self::Tile> {
        (**self).get(coord)
    }

    fn bounds(&self) -> (usize, usize) {
        (**self).bounds()
    }
}

/// Row-major grid holding at most one tile per cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    cells: Array2<Option<Tile>>,
}

impl TileMap {
    /// Create a grid where every cell is empty
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), None),
        }
    }

    /// Create a grid with a tile in every cell
    pub fn filled(height: usize, width: usize, walkable: bool) -> Self {
        let cells = Array2::from_shape_fn((height, width), |(row, col)| {
            Some(Tile::new(Coord::new(row as i32, col as i32), walkable))
        });
        Self { cells }
    }

    /// Build a grid from tiles placed at world positions
    ///
    /// World X rounds to a column and world Y to a row, with halfway values
    /// rounding to the even integer. A later placement on an already occupied
    /// cell replaces the earlier tile.
    ///
    /// # Errors
    ///
    /// Returns an error if a position is not finite or rounds outside the grid
    pub fn from_placements<I>(height: usize, width: usize, placements: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f32, f32, bool)>,
    {
        let mut map = Self::new(height, width);
        for (x, y, walkable) in placements {
            if !x.is_finite() || !y.is_finite() {
                return Err(ExtractionError::InvalidMapData {
                    reason: format!("tile placed at non-finite position ({x}, {y})"),
                });
            }
            let coord = Coord::new(round_to_cell(y), round_to_cell(x));
            map.place(coord, walkable)?;
        }
        Ok(map)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Put a tile into a cell, replacing any tile already there
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate lies outside the grid
    pub fn place(&mut self, coord: Coord, walkable: bool) -> Result<()> {
        let cell = self.cell_mut(coord)?;
        *cell = Some(Tile::new(coord, walkable));
        Ok(())
    }

    /// Empty a cell, returning the tile it held
    pub fn remove(&mut self, coord: Coord) -> Option<Tile> {
        self.cell_mut(coord).ok().and_then(Option::take)
    }

    /// Change the walkability of an existing tile
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate lies outside the grid or the cell is empty
    pub fn set_walkable(&mut self, coord: Coord, walkable: bool) -> Result<()> {
        let tile = self
            .cell_mut(coord)?
            .as_mut()
            .ok_or(ExtractionError::MissingTile { coord })?;
        tile.set_walkable(walkable);
        Ok(())
    }

    /// Iterate over present tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    /// Count of tiles that are currently walkable
    pub fn walkable_count(&self) -> usize {
        self.tiles()
            .map(GridTile::is_walkable)
            .filter(|&walkable| walkable)
            .count()
    }

    fn cell_mut(&mut self, coord: Coord) -> Result<&mut Option<Tile>> {
        let (height, width) = self.cells.dim();
        coord
            .to_index()
            .and_then(|index| self.cells.get_mut(index))
            .ok_or_else(|| ExtractionError::CoordOutOfBounds {
                coord,
                bounds: (height, width),
            })
    }
}

impl TileGrid for TileMap {
    type Tile = Tile;

    fn get(&self, coord: Coord) -> Option<&Tile> {
        coord
            .to_index()
            .and_then(|index| self.cells.get(index))
            .and_then(Option::as_ref)
    }

    fn bounds(&self) -> (usize, usize) {
        self.cells.dim()
    }
}

// Saturates for positions beyond the i32 range so they still land out of bounds
fn round_to_cell(value: f32) -> i32 {
    let rounded = value.round_ties_even();
    if rounded >= i32::MAX as f32 {
        i32::MAX
    } else if rounded <= i32::MIN as f32 {
        i32::MIN
    } else {
        rounded as i32
    }
}

/// Clip an inclusive interval around a center to the valid index range
///
/// Returns the indices of `[center - before, center + after]` that fall in
/// `[0, len)`. The range is empty when the interval misses the grid
/// entirely or when either extent is negative.
pub fn clip_span(center: i32, before: i32, after: i32, len: usize) -> Range<usize> {
    if before < 0 || after < 0 {
        return 0..0;
    }

    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let low = (center as i64 - before as i64).max(0);
    // Exclusive end
    let high = (center as i64 + after as i64 + 1).min(len);

    if low >= high {
        0..0
    } else {
        (low as usize)..(high as usize)
    }
}
