//! Shape membership predicates and parameter validation
//!
//! Every predicate is a pure function of the anchor, the probed coordinate
//! and the shape parameters. None of them look at a grid: whether a cell
//! exists or is walkable is decided afterwards by the engine.

use crate::io::error::{Result, invalid_shape_parameter};
use crate::spatial::coord::Coord;

/// How a rectangle size maps to a box around its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxMode {
    /// `size` is a half-extent: the box spans `anchor ± size` on each axis
    #[default]
    HalfExtent,
    /// `size` is the full box size in cells, containing the anchor
    ///
    /// Odd sizes center on the anchor. Even sizes put the extra cell after
    /// the anchor (higher row or column).
    FullExtent,
}

/// Rectangle size as a `(width, height)` pair in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectangleSize {
    /// Extent along columns (world X)
    pub width: i32,
    /// Extent along rows (world Y)
    pub height: i32,
}

impl RectangleSize {
    /// Create a rectangle size
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Check that the size describes a non-empty box under a mode
    ///
    /// # Errors
    ///
    /// Returns an error if either extent is negative, or zero under
    /// [`BoxMode::FullExtent`]
    pub const fn validate(self, mode: BoxMode) -> Result<()> {
        let minimum = match mode {
            BoxMode::HalfExtent => 0,
            BoxMode::FullExtent => 1,
        };
        let reason = match mode {
            BoxMode::HalfExtent => "half-extent must be non-negative",
            BoxMode::FullExtent => "full extent must be at least one cell",
        };
        if self.width < minimum {
            return Err(invalid_shape_parameter("width", self.width, reason));
        }
        if self.height < minimum {
            return Err(invalid_shape_parameter("height", self.height, reason));
        }
        Ok(())
    }

    /// Unclipped inclusive `(min, max)` corners of the box around an anchor
    pub const fn corners(self, anchor: Coord, mode: BoxMode) -> (Coord, Coord) {
        let (before_row, after_row) = axis_extents(self.height, mode);
        let (before_col, after_col) = axis_extents(self.width, mode);
        (
            anchor.offset(-before_row, -before_col),
            anchor.offset(after_row, after_col),
        )
    }

    /// Cells before and after the anchor as `((rows), (cols))`
    pub const fn extents(self, mode: BoxMode) -> ((i32, i32), (i32, i32)) {
        (
            axis_extents(self.height, mode),
            axis_extents(self.width, mode),
        )
    }
}

impl From<(i32, i32)> for RectangleSize {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

const fn axis_extents(size: i32, mode: BoxMode) -> (i32, i32) {
    match mode {
        BoxMode::HalfExtent => (size, size),
        BoxMode::FullExtent => ((size - 1) / 2, size / 2),
    }
}

/// Check that a circle radius is usable
///
/// # Errors
///
/// Returns an error if the radius is negative
pub const fn validate_radius(radius: i32) -> Result<()> {
    if radius < 0 {
        return Err(invalid_shape_parameter(
            "radius",
            radius,
            "radius must be non-negative",
        ));
    }
    Ok(())
}

/// Whether a coordinate lies in the filled disc of a radius
pub const fn in_circle(center: Coord, coord: Coord, radius: i32) -> bool {
    if radius < 0 {
        return false;
    }
    let r = radius as i128;
    center.squared_distance(coord) <= r * r
}

/// Whether a coordinate lies on the discrete ring of a radius
///
/// The ring is the disc of `radius` minus the disc of `radius - 1`, so rings
/// of successive radii partition the disc with no gaps or overlaps. The ring
/// of radius 0 is the center alone.
pub const fn on_circle_outline(center: Coord, coord: Coord, radius: i32) -> bool {
    if radius == 0 {
        return center.squared_distance(coord) == 0;
    }
    in_circle(center, coord, radius) && !in_circle(center, coord, radius - 1)
}

/// Whether a coordinate lies in the filled box around an anchor
pub const fn in_rectangle(anchor: Coord, coord: Coord, size: RectangleSize, mode: BoxMode) -> bool {
    let (min, max) = size.corners(anchor, mode);
    coord.row >= min.row && coord.row <= max.row && coord.col >= min.col && coord.col <= max.col
}

/// Whether a coordinate lies on the perimeter of the box around an anchor
///
/// The perimeter is that of the geometric box, not of the part of it that
/// overlaps a grid. A degenerate axis (`min == max`) puts every cell of the
/// box on the perimeter.
pub const fn on_rectangle_outline(
    anchor: Coord,
    coord: Coord,
    size: RectangleSize,
    mode: BoxMode,
) -> bool {
    if !in_rectangle(anchor, coord, size, mode) {
        return false;
    }
    let (min, max) = size.corners(anchor, mode);
    coord.row == min.row || coord.row == max.row || coord.col == min.col || coord.col == max.col
}
