//! Tile descriptors and the read contract the extraction engine relies on

use crate::spatial::coord::Coord;

/// Read-only view of a grid cell as seen by the extraction engine
///
/// Any tile type can take part in extraction by exposing its fixed position
/// and its current walkability.
pub trait GridTile {
    /// Position of the tile on its grid, fixed after placement
    fn position(&self) -> Coord;

    /// Whether the tile can currently be walked on
    fn is_walkable(&self) -> bool;
}

/// A placed tile with a fixed position and a mutable walkability flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    position: Coord,
    walkable: bool,
}

impl Tile {
    /// Create a tile at a position
    pub const fn new(position: Coord, walkable: bool) -> Self {
        Self { position, walkable }
    }

    /// Change walkability; the position never changes
    pub const fn set_walkable(&mut self, walkable: bool) {
        self.walkable = walkable;
    }
}

impl GridTile for Tile {
    fn position(&self) -> Coord {
        self.position
    }

    fn is_walkable(&self) -> bool {
        self.walkable
    }
}

impl<T: GridTile + ?Sized> GridTile for &T {
    fn position(&self) -> Coord {
        (**self).position()
    }

    fn is_walkable(&self) -> bool {
        (**self).is_walkable()
    }
}
