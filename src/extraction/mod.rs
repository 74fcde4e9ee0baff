//! Shape extraction over tile grids

/// The extraction operations and their shared scan
pub mod engine;
/// Shape queries as data and their dispatch
pub mod query;
/// Membership predicates, rectangle sizing and validation
pub mod shapes;

pub use engine::{
    TileFilter, walkable_tiles_in_circle, walkable_tiles_in_rectangle,
    walkable_tiles_on_circle_outline, walkable_tiles_on_rectangle_outline,
};
pub use query::{ExtractOptions, ShapeQuery, extract, extract_with};
pub use shapes::{BoxMode, RectangleSize};
