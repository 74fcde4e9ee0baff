//! Tests for fixed-extent tile grids and span clipping

#[cfg(test)]
mod tests {
    use gridextract::spatial::grid::clip_span;
    use gridextract::{Coord, ExtractionError, GridTile, Result, TileGrid, TileMap};

    // Tests that a new grid has its extent but no tiles
    // Verified by constructing with filled()
    #[test]
    fn test_new_grid_is_empty() {
        let map = TileMap::new(3, 4);
        assert_eq!(map.bounds(), (3, 4));
        assert_eq!(map.rows(), 3);
        assert_eq!(map.cols(), 4);
        assert_eq!(map.tiles().count(), 0);
        assert!(map.get(Coord::new(1, 1)).is_none());
    }

    // Tests that filled grids place tiles at their own coordinates
    // Verified by swapping row and column in filled()
    #[test]
    fn test_filled_grid_positions() {
        let map = TileMap::filled(2, 3, true);
        assert_eq!(map.tiles().count(), 6);
        for row in 0..2 {
            for col in 0..3 {
                let coord = Coord::new(row, col);
                assert_eq!(map.get(coord).map(GridTile::position), Some(coord));
            }
        }
        assert_eq!(map.walkable_count(), 6);
        assert_eq!(TileMap::filled(2, 3, false).walkable_count(), 0);
    }

    // Tests that probing outside the grid resolves to absent without panicking
    // Verified by indexing the array directly
    #[test]
    fn test_get_out_of_bounds_is_absent() {
        let map = TileMap::filled(3, 3, true);
        for coord in [
            Coord::new(-1, 0),
            Coord::new(0, -1),
            Coord::new(3, 0),
            Coord::new(0, 3),
            Coord::new(i32::MAX, i32::MAX),
            Coord::new(i32::MIN, 1),
        ] {
            assert!(map.get(coord).is_none(), "{coord} should be absent");
            assert!(!map.contains(coord));
        }
        assert!(map.contains(Coord::new(2, 2)));
    }

    // Tests placing, replacing and removing tiles
    // Verified by ignoring the walkable argument in place()
    #[test]
    fn test_place_and_remove() -> Result<()> {
        let mut map = TileMap::new(2, 2);
        map.place(Coord::new(0, 1), false)?;
        assert!(map.get(Coord::new(0, 1)).is_some_and(|t| !t.is_walkable()));

        map.place(Coord::new(0, 1), true)?;
        assert!(map.get(Coord::new(0, 1)).is_some_and(GridTile::is_walkable));

        let removed = map.remove(Coord::new(0, 1));
        assert_eq!(removed.map(|t| t.position()), Some(Coord::new(0, 1)));
        assert!(map.get(Coord::new(0, 1)).is_none());
        assert!(map.remove(Coord::new(0, 1)).is_none());
        assert!(map.remove(Coord::new(5, 5)).is_none());
        Ok(())
    }

    // Tests that out-of-bounds placement is rejected
    // Verified by silently ignoring out-of-bounds placement
    #[test]
    fn test_place_out_of_bounds() {
        let mut map = TileMap::new(2, 2);
        let result = map.place(Coord::new(2, 0), true);
        assert!(matches!(
            result,
            Err(ExtractionError::CoordOutOfBounds { bounds: (2, 2), .. })
        ));
    }

    // Tests walkability edits on present, empty and out-of-bounds cells
    // Verified by creating a tile when the cell is empty
    #[test]
    fn test_set_walkable() -> Result<()> {
        let mut map = TileMap::filled(2, 2, true);
        map.set_walkable(Coord::new(1, 0), false)?;
        assert_eq!(map.walkable_count(), 3);

        map.remove(Coord::new(1, 1));
        assert!(matches!(
            map.set_walkable(Coord::new(1, 1), false),
            Err(ExtractionError::MissingTile { .. })
        ));
        assert!(matches!(
            map.set_walkable(Coord::new(-1, 0), false),
            Err(ExtractionError::CoordOutOfBounds { .. })
        ));
        Ok(())
    }

    // Tests world positions round to cells with X as column and Y as row
    // Verified by rounding halfway values away from zero
    #[test]
    fn test_from_placements_rounding() -> Result<()> {
        let map = TileMap::from_placements(
            5,
            5,
            [
                (1.2, 3.9, true),
                (2.5, 0.0, false),
                (3.5, 0.4, true),
                (-0.4, 4.49, true),
            ],
        )?;

        assert!(map.get(Coord::new(4, 1)).is_some_and(GridTile::is_walkable));
        // 2.5 rounds to the even column 2, 3.5 to column 4
        assert!(map.get(Coord::new(0, 2)).is_some_and(|t| !t.is_walkable()));
        assert!(map.get(Coord::new(0, 4)).is_some_and(GridTile::is_walkable));
        assert!(map.get(Coord::new(4, 0)).is_some_and(GridTile::is_walkable));
        assert_eq!(map.tiles().count(), 4);
        Ok(())
    }

    // Tests that later placements replace earlier ones on the same cell
    // Verified by keeping the first placement
    #[test]
    fn test_from_placements_replaces() -> Result<()> {
        let map = TileMap::from_placements(2, 2, [(0.9, 1.1, true), (1.2, 0.8, false)])?;
        assert_eq!(map.tiles().count(), 1);
        assert!(map.get(Coord::new(1, 1)).is_some_and(|t| !t.is_walkable()));
        Ok(())
    }

    // Tests invalid placements are reported instead of dropped
    // Verified by skipping placements outside the grid
    #[test]
    fn test_from_placements_errors() {
        assert!(matches!(
            TileMap::from_placements(2, 2, [(2.6, 0.0, true)]),
            Err(ExtractionError::CoordOutOfBounds { .. })
        ));
        assert!(matches!(
            TileMap::from_placements(2, 2, [(f32::NAN, 0.0, true)]),
            Err(ExtractionError::InvalidMapData { .. })
        ));
        assert!(matches!(
            TileMap::from_placements(2, 2, [(1.0e20, 0.0, true)]),
            Err(ExtractionError::CoordOutOfBounds { .. })
        ));
    }

    // Tests tile iteration follows row-major order
    // Verified by iterating the transposed array
    #[test]
    fn test_tiles_row_major() {
        let map = TileMap::filled(2, 2, true);
        let order: Vec<Coord> = map.tiles().map(GridTile::position).collect();
        assert_eq!(
            order,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 1)
            ]
        );
    }

    // Tests span clipping at the edges, inside, and fully outside the grid
    // Verified by omitting the lower clamp
    #[test]
    fn test_clip_span() {
        assert_eq!(clip_span(2, 1, 1, 5), 1..4);
        assert_eq!(clip_span(0, 1, 1, 5), 0..2);
        assert_eq!(clip_span(4, 2, 2, 5), 2..5);
        assert_eq!(clip_span(2, 0, 0, 5), 2..3);
        assert_eq!(clip_span(2, 0, 1, 5), 2..4);
        assert_eq!(clip_span(-5, 1, 1, 5), 0..0);
        assert_eq!(clip_span(9, 1, 1, 5), 0..0);
        assert_eq!(clip_span(2, -1, 1, 5), 0..0);
        assert_eq!(clip_span(2, i32::MAX, i32::MAX, 5), 0..5);
        assert_eq!(clip_span(0, 0, 0, 0), 0..0);
    }
}
