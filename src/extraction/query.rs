//! Tagged shape queries and the single dispatch entry point
//!
//! Callers that switch between shapes at runtime describe the shape as a
//! [`ShapeQuery`] value and hand it to [`extract`], instead of selecting one
//! of the engine functions themselves.

use std::fmt;

use crate::extraction::engine::{
    TileFilter, tiles_in_circle, tiles_in_rectangle, tiles_on_circle_outline,
    tiles_on_rectangle_outline,
};
use crate::extraction::shapes::{BoxMode, RectangleSize};
use crate::io::error::Result;
use crate::spatial::coord::Coord;
use crate::spatial::grid::TileGrid;

/// One shape extraction, described as data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeQuery {
    /// Filled disc of a radius
    FilledCircle {
        /// Disc radius in cells
        radius: i32,
        /// Whether the center tile may be reported
        include_center: bool,
    },
    /// Discrete ring of a radius
    CircleOutline {
        /// Ring radius in cells
        radius: i32,
    },
    /// Filled box around the anchor
    FilledRectangle {
        /// Box size, interpreted by [`ExtractOptions::box_mode`]
        size: RectangleSize,
        /// Whether the anchor tile may be reported
        include_center: bool,
    },
    /// Perimeter of the box around the anchor
    RectangleOutline {
        /// Box size, interpreted by [`ExtractOptions::box_mode`]
        size: RectangleSize,
    },
}

impl ShapeQuery {
    /// Short human-readable name of the shape
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FilledCircle { .. } => "circle",
            Self::CircleOutline { .. } => "circle outline",
            Self::FilledRectangle { .. } => "rectangle",
            Self::RectangleOutline { .. } => "rectangle outline",
        }
    }
}

impl fmt::Display for ShapeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FilledCircle {
                radius,
                include_center,
            } => write!(
                f,
                "{} (radius {radius}, center {})",
                self.name(),
                if *include_center { "included" } else { "excluded" }
            ),
            Self::CircleOutline { radius } => write!(f, "{} (radius {radius})", self.name()),
            Self::FilledRectangle {
                size,
                include_center,
            } => write!(
                f,
                "{} ({}x{}, center {})",
                self.name(),
                size.width,
                size.height,
                if *include_center { "included" } else { "excluded" }
            ),
            Self::RectangleOutline { size } => {
                write!(f, "{} ({}x{})", self.name(), size.width, size.height)
            }
        }
    }
}

/// Settings shared by every query kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractOptions {
    /// How rectangle sizes map to boxes
    pub box_mode: BoxMode,
    /// Which present tiles are admitted
    pub filter: TileFilter,
}

/// Run a shape query with walkable tiles and half-extent boxes
///
/// # Errors
///
/// Returns an error if the query's parameters are invalid or `anchor` is not a tile on the grid
pub fn extract<'g, G: TileGrid>(
    grid: &'g G,
    anchor: Coord,
    query: &ShapeQuery,
) -> Result<Vec<&'g G::Tile>> {
    extract_with(grid, anchor, query, ExtractOptions::default())
}

/// Run a shape query with explicit options
///
/// # Errors
///
/// Returns an error if the query's parameters are invalid or `anchor` is not a tile on the grid
pub fn extract_with<'g, G: TileGrid>(
    grid: &'g G,
    anchor: Coord,
    query: &ShapeQuery,
    options: ExtractOptions,
) -> Result<Vec<&'g G::Tile>> {
    match *query {
        ShapeQuery::FilledCircle {
            radius,
            include_center,
        } => tiles_in_circle(grid, anchor, radius, include_center, options.filter),
        ShapeQuery::CircleOutline { radius } => {
            tiles_on_circle_outline(grid, anchor, radius, options.filter)
        }
        ShapeQuery::FilledRectangle {
            size,
            include_center,
        } => tiles_in_rectangle(
            grid,
            anchor,
            size,
            options.box_mode,
            include_center,
            options.filter,
        ),
        ShapeQuery::RectangleOutline { size } => {
            tiles_on_rectangle_outline(grid, anchor, size, options.box_mode, options.filter)
        }
    }
}
