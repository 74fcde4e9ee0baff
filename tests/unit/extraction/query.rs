//! Tests for shape queries as data and their dispatch

#[cfg(test)]
mod tests {
    use crate::positions;
    use gridextract::{
        BoxMode, Coord, ExtractOptions, ExtractionError, RectangleSize, Result, ShapeQuery,
        TileFilter, TileMap, extract, extract_with, walkable_tiles_in_circle,
        walkable_tiles_in_rectangle, walkable_tiles_on_circle_outline,
        walkable_tiles_on_rectangle_outline,
    };

    fn demo_map() -> Result<TileMap> {
        let mut map = TileMap::filled(7, 9, true);
        for coord in [Coord::new(2, 4), Coord::new(3, 5), Coord::new(5, 3)] {
            map.set_walkable(coord, false)?;
        }
        Ok(map)
    }

    // Tests each query variant dispatches to its engine operation
    // Verified by routing outlines to the filled operations
    #[test]
    fn test_dispatch_matches_direct_calls() -> Result<()> {
        let map = demo_map()?;
        let anchor = Coord::new(3, 4);
        let size = RectangleSize::new(2, 1);

        assert_eq!(
            extract(&map, anchor, &ShapeQuery::FilledCircle { radius: 2, include_center: false })?,
            walkable_tiles_in_circle(&map, anchor, 2, false)?
        );
        assert_eq!(
            extract(&map, anchor, &ShapeQuery::CircleOutline { radius: 3 })?,
            walkable_tiles_on_circle_outline(&map, anchor, 3)?
        );
        assert_eq!(
            extract(&map, anchor, &ShapeQuery::FilledRectangle { size, include_center: true })?,
            walkable_tiles_in_rectangle(&map, anchor, size, true)?
        );
        assert_eq!(
            extract(&map, anchor, &ShapeQuery::RectangleOutline { size })?,
            walkable_tiles_on_rectangle_outline(&map, anchor, size)?
        );
        Ok(())
    }

    // Tests options switch box mode and tile filter
    // Verified by ignoring options in extract_with
    #[test]
    fn test_extract_with_options() -> Result<()> {
        let map = demo_map()?;
        let anchor = Coord::new(3, 4);
        let query = ShapeQuery::FilledRectangle {
            size: RectangleSize::new(2, 1),
            include_center: true,
        };

        let full = extract_with(
            &map,
            anchor,
            &query,
            ExtractOptions {
                box_mode: BoxMode::FullExtent,
                filter: TileFilter::Walkable,
            },
        )?;
        assert_eq!(positions(&full), vec![(3, 4)]);

        let with_walls = extract_with(
            &map,
            anchor,
            &ShapeQuery::CircleOutline { radius: 1 },
            ExtractOptions {
                box_mode: BoxMode::HalfExtent,
                filter: TileFilter::Any,
            },
        )?;
        assert_eq!(positions(&with_walls), vec![(2, 4), (3, 3), (3, 5), (4, 4)]);
        Ok(())
    }

    // Tests errors from the engine surface through dispatch
    // Verified by mapping errors to empty results
    #[test]
    fn test_dispatch_propagates_errors() -> Result<()> {
        let map = demo_map()?;
        assert!(matches!(
            extract(&map, Coord::new(3, 4), &ShapeQuery::CircleOutline { radius: -1 }),
            Err(ExtractionError::InvalidShapeParameter { .. })
        ));
        assert!(matches!(
            extract(
                &map,
                Coord::new(7, 0),
                &ShapeQuery::RectangleOutline {
                    size: RectangleSize::new(1, 1)
                }
            ),
            Err(ExtractionError::AnchorNotOnGrid { .. })
        ));
        Ok(())
    }

    // Tests names and display text of each variant
    // Verified by swapping two names
    #[test]
    fn test_names_and_display() {
        let size = RectangleSize::new(3, 2);
        assert_eq!(
            ShapeQuery::FilledCircle { radius: 2, include_center: true }.to_string(),
            "circle (radius 2, center included)"
        );
        assert_eq!(ShapeQuery::CircleOutline { radius: 4 }.name(), "circle outline");
        assert_eq!(
            ShapeQuery::FilledRectangle { size, include_center: false }.to_string(),
            "rectangle (3x2, center excluded)"
        );
        assert_eq!(
            ShapeQuery::RectangleOutline { size }.to_string(),
            "rectangle outline (3x2)"
        );
    }

    // Tests default options are half-extent boxes over walkable tiles
    // Verified by changing the derived defaults
    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert_eq!(options.box_mode, BoxMode::HalfExtent);
        assert_eq!(options.filter, TileFilter::Walkable);
    }
}
