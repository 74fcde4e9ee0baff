//! Spatial data structures
//!
//! This module contains the grid-side collaborators of extraction:
//! - Signed coordinates
//! - Tiles and the tile read contract
//! - Fixed-extent grids and span clipping
//! - Cell membership masks

/// Signed row-major coordinates
pub mod coord;
/// Fixed-extent grids and the grid read contract
pub mod grid;
/// Cell membership masks backed by bit vectors
pub mod mask;
/// Tiles and the tile read contract
pub mod tile;

pub use coord::Coord;
pub use grid::{TileGrid, TileMap};
pub use mask::TileMask;
pub use tile::{GridTile, Tile};
