//! Walkable tile extraction over fixed-size 2D grids
//!
//! Given a grid of tiles, each walkable or blocked, and an anchor tile, the
//! engine reports the walkable tiles inside a filled disc, on a disc's ring,
//! inside a box, or on a box's frame. Queries are pure: they read a grid
//! snapshot and return a fresh, row-major ordered list of tile references.

#![forbid(unsafe_code)]

/// Shape predicates, the extraction operations and query dispatch
pub mod extraction;
/// Map loading, rendering, configuration and error handling
pub mod io;
/// Coordinates, tiles, grids and cell masks
pub mod spatial;

pub use extraction::{
    BoxMode, ExtractOptions, RectangleSize, ShapeQuery, TileFilter, extract, extract_with,
    walkable_tiles_in_circle, walkable_tiles_in_rectangle, walkable_tiles_on_circle_outline,
    walkable_tiles_on_rectangle_outline,
};
pub use io::error::{ExtractionError, Result};
pub use spatial::{Coord, GridTile, Tile, TileGrid, TileMap, TileMask};
