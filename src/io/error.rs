//! Error types for extraction queries, grid edits and map I/O

use std::fmt;
use std::path::PathBuf;

use crate::spatial::coord::Coord;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum ExtractionError {
    /// A shape parameter is outside its valid range
    ///
    /// Raised before any cell is scanned, so no partial result exists.
    InvalidShapeParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Provided value
        value: i32,
        /// Explanation of the valid range
        reason: &'static str,
    },

    /// The query anchor is outside the grid or has no tile
    AnchorNotOnGrid {
        /// Requested anchor
        anchor: Coord,
        /// Grid extent (height, width)
        bounds: (usize, usize),
    },

    /// A grid edit addressed a coordinate outside the grid
    CoordOutOfBounds {
        /// The offending coordinate
        coord: Coord,
        /// Grid extent (height, width)
        bounds: (usize, usize),
    },

    /// A grid edit addressed an empty cell
    MissingTile {
        /// The empty cell
        coord: Coord,
    },

    /// Failed to load a map image from the filesystem
    MapLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered map to disk
    MapExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Map data cannot be turned into a grid
    InvalidMapData {
        /// Description of what's wrong with the map data
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShapeParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid shape parameter '{parameter}' = {value}: {reason}")
            }
            Self::AnchorNotOnGrid { anchor, bounds } => {
                write!(
                    f,
                    "Anchor {anchor} is not a tile on the grid (grid size {}x{})",
                    bounds.0, bounds.1
                )
            }
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(
                    f,
                    "Coordinate {coord} is out of bounds: [0, {}) x [0, {})",
                    bounds.0, bounds.1
                )
            }
            Self::MissingTile { coord } => {
                write!(f, "No tile placed at {coord}")
            }
            Self::MapLoad { path, source } => {
                write!(f, "Failed to load map '{}': {source}", path.display())
            }
            Self::MapExport { path, source } => {
                write!(f, "Failed to export map to '{}': {source}", path.display())
            }
            Self::InvalidMapData { reason } => {
                write!(f, "Invalid map data: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for ExtractionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MapLoad { source, .. } | Self::MapExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, ExtractionError>;

impl From<std::io::Error> for ExtractionError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid shape parameter error
pub const fn invalid_shape_parameter(
    parameter: &'static str,
    value: i32,
    reason: &'static str,
) -> ExtractionError {
    ExtractionError::InvalidShapeParameter {
        parameter,
        value,
        reason,
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ExtractionError {
    ExtractionError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
