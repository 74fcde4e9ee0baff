//! Walkable tile extraction for discs, rings, boxes and frames
//!
//! Every operation follows the same pipeline: validate the parameters and the
//! anchor, clip the shape's bounding box to the grid, scan it row-major, keep
//! cells whose geometry matches, then keep only cells holding an admissible
//! tile. Results come back in ascending row order, then ascending column
//! order, with each coordinate at most once. Nothing is mutated.

use std::ops::Range;

use crate::extraction::shapes::{
    BoxMode, RectangleSize, in_circle, in_rectangle, on_circle_outline, on_rectangle_outline,
    validate_radius,
};
use crate::io::error::{ExtractionError, Result};
use crate::spatial::coord::Coord;
use crate::spatial::grid::{TileGrid, clip_span};
use crate::spatial::tile::GridTile;

/// Which present tiles a query admits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileFilter {
    /// Only walkable tiles
    #[default]
    Walkable,
    /// Any present tile, walls included
    Any,
}

impl TileFilter {
    /// Whether a tile passes the filter
    pub fn admits<T: GridTile>(self, tile: &T) -> bool {
        match self {
            Self::Walkable => tile.is_walkable(),
            Self::Any => true,
        }
    }
}

/// Walkable tiles within `radius` of `center`
///
/// Membership uses squared integer distance, `dr² + dc² <= radius²`. With
/// `include_center` false the center tile is left out even when walkable.
///
/// # Errors
///
/// Returns an error if `radius` is negative or `center` is not a tile on the grid
pub fn walkable_tiles_in_circle<G: TileGrid>(
    grid: &G,
    center: Coord,
    radius: i32,
    include_center: bool,
) -> Result<Vec<&G::Tile>> {
    tiles_in_circle(grid, center, radius, include_center, TileFilter::Walkable)
}

/// Walkable tiles on the discrete ring of `radius` around `center`
///
/// The ring is the disc of `radius` minus the disc of `radius - 1`; radius 0
/// yields the center alone.
///
/// # Errors
///
/// Returns an error if `radius` is negative or `center` is not a tile on the grid
pub fn walkable_tiles_on_circle_outline<G: TileGrid>(
    grid: &G,
    center: Coord,
    radius: i32,
) -> Result<Vec<&G::Tile>> {
    tiles_on_circle_outline(grid, center, radius, TileFilter::Walkable)
}

/// Walkable tiles in the box spanning `anchor ± size`
///
/// # Errors
///
/// Returns an error if either extent is negative or `anchor` is not a tile on the grid
pub fn walkable_tiles_in_rectangle<G: TileGrid>(
    grid: &G,
    anchor: Coord,
    size: RectangleSize,
    include_center: bool,
) -> Result<Vec<&G::Tile>> {
    tiles_in_rectangle(
        grid,
        anchor,
        size,
        BoxMode::HalfExtent,
        include_center,
        TileFilter::Walkable,
    )
}

/// Walkable tiles on the perimeter of the box spanning `anchor ± size`
///
/// # Errors
///
/// Returns an error if either extent is negative or `anchor` is not a tile on the grid
pub fn walkable_tiles_on_rectangle_outline<G: TileGrid>(
    grid: &G,
    anchor: Coord,
    size: RectangleSize,
) -> Result<Vec<&G::Tile>> {
    tiles_on_rectangle_outline(
        grid,
        anchor,
        size,
        BoxMode::HalfExtent,
        TileFilter::Walkable,
    )
}

/// Tiles admitted by `filter` within `radius` of `center`
///
/// # Errors
///
/// Returns an error if `radius` is negative or `center` is not a tile on the grid
pub fn tiles_in_circle<G: TileGrid>(
    grid: &G,
    center: Coord,
    radius: i32,
    include_center: bool,
    filter: TileFilter,
) -> Result<Vec<&G::Tile>> {
    validate_radius(radius)?;
    check_anchor(grid, center)?;

    let (rows, cols) = spans(grid, center, (radius, radius), (radius, radius));
    Ok(scan(grid, rows, cols, filter, |coord| {
        (include_center || coord != center) && in_circle(center, coord, radius)
    }))
}

/// Tiles admitted by `filter` on the discrete ring of `radius` around `center`
///
/// # Errors
///
/// Returns an error if `radius` is negative or `center` is not a tile on the grid
pub fn tiles_on_circle_outline<G: TileGrid>(
    grid: &G,
    center: Coord,
    radius: i32,
    filter: TileFilter,
) -> Result<Vec<&G::Tile>> {
    validate_radius(radius)?;
    check_anchor(grid, center)?;

    let (rows, cols) = spans(grid, center, (radius, radius), (radius, radius));
    Ok(scan(grid, rows, cols, filter, |coord| {
        on_circle_outline(center, coord, radius)
    }))
}

/// Tiles admitted by `filter` in the box described by `size` and `mode`
///
/// # Errors
///
/// Returns an error if `size` is invalid for `mode` or `anchor` is not a tile on the grid
pub fn tiles_in_rectangle<G: TileGrid>(
    grid: &G,
    anchor: Coord,
    size: RectangleSize,
    mode: BoxMode,
    include_center: bool,
    filter: TileFilter,
) -> Result<Vec<&G::Tile>> {
    size.validate(mode)?;
    check_anchor(grid, anchor)?;

    let (row_extents, col_extents) = size.extents(mode);
    let (rows, cols) = spans(grid, anchor, row_extents, col_extents);
    Ok(scan(grid, rows, cols, filter, |coord| {
        (include_center || coord != anchor) && in_rectangle(anchor, coord, size, mode)
    }))
}

/// Tiles admitted by `filter` on the perimeter of the box described by `size` and `mode`
///
/// # Errors
///
/// Returns an error if `size` is invalid for `mode` or `anchor` is not a tile on the grid
pub fn tiles_on_rectangle_outline<G: TileGrid>(
    grid: &G,
    anchor: Coord,
    size: RectangleSize,
    mode: BoxMode,
    filter: TileFilter,
) -> Result<Vec<&G::Tile>> {
    size.validate(mode)?;
    check_anchor(grid, anchor)?;

    let (row_extents, col_extents) = size.extents(mode);
    let (rows, cols) = spans(grid, anchor, row_extents, col_extents);
    Ok(scan(grid, rows, cols, filter, |coord| {
        on_rectangle_outline(anchor, coord, size, mode)
    }))
}

fn check_anchor<G: TileGrid>(grid: &G, anchor: Coord) -> Result<()> {
    if grid.get(anchor).is_none() {
        return Err(ExtractionError::AnchorNotOnGrid {
            anchor,
            bounds: grid.bounds(),
        });
    }
    Ok(())
}

// Extents are (before, after) the anchor along each axis
fn spans<G: TileGrid>(
    grid: &G,
    anchor: Coord,
    row_extents: (i32, i32),
    col_extents: (i32, i32),
) -> (Range<usize>, Range<usize>) {
    let (height, width) = grid.bounds();
    (
        clip_span(anchor.row, row_extents.0, row_extents.1, height),
        clip_span(anchor.col, col_extents.0, col_extents.1, width),
    )
}

fn scan<G, F>(
    grid: &G,
    rows: Range<usize>,
    cols: Range<usize>,
    filter: TileFilter,
    mut matches: F,
) -> Vec<&G::Tile>
where
    G: TileGrid,
    F: FnMut(Coord) -> bool,
{
    let mut extracted = Vec::new();
    for row in rows {
        for col in cols.clone() {
            let coord = Coord::new(row as i32, col as i32);
            if !matches(coord) {
                continue;
            }
            // Geometry first, then presence and walkability
            if let Some(tile) = grid.get(coord).filter(|tile| filter.admits(*tile)) {
                extracted.push(tile);
            }
        }
    }
    extracted
}
