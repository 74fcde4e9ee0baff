//! PNG rendering of maps with extraction results highlighted

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::{
    ABSENT_COLOR, EXTRACTED_COLOR, FLOOR_COLOR, MAX_IMAGE_DIMENSION, MAX_SCALE, TARGET_COLOR,
    WALL_COLOR,
};
use crate::io::error::{ExtractionError, Result, invalid_parameter};
use crate::spatial::coord::Coord;
use crate::spatial::grid::{TileGrid, TileMap};
use crate::spatial::mask::TileMask;
use crate::spatial::tile::GridTile;

/// What to draw on top of the base map
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay<'a> {
    /// Extracted cells
    pub extracted: Option<&'a TileMask>,
    /// Query anchor, drawn over everything else
    pub anchor: Option<Coord>,
}

/// Colour of one cell
pub fn cell_color(map: &TileMap, coord: Coord, overlay: Overlay<'_>) -> [u8; 4] {
    if overlay.anchor == Some(coord) {
        return TARGET_COLOR;
    }
    if overlay.extracted.is_some_and(|mask| mask.contains(coord)) {
        return EXTRACTED_COLOR;
    }
    match map.get(coord) {
        Some(tile) if tile.is_walkable() => FLOOR_COLOR,
        Some(_) => WALL_COLOR,
        None => ABSENT_COLOR,
    }
}

/// Render a map as an image with `scale` pixels per cell side
///
/// # Errors
///
/// Returns an error if `scale` is zero or above the maximum scale, or if the
/// scaled image would exceed the maximum image dimension
pub fn render_map(map: &TileMap, overlay: Overlay<'_>, scale: u32) -> Result<RgbaImage> {
    if scale == 0 || scale > MAX_SCALE {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("must be between 1 and {MAX_SCALE}"),
        ));
    }

    let width = scaled_dimension(map.cols(), scale)?;
    let height = scaled_dimension(map.rows(), scale)?;
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let coord = Coord::new((y / scale) as i32, (x / scale) as i32);
        Rgba(cell_color(map, coord, overlay))
    });
    Ok(img)
}

fn scaled_dimension(cells: usize, scale: u32) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(scale))
        .filter(|&pixels| pixels <= MAX_IMAGE_DIMENSION)
        .ok_or_else(|| {
            invalid_parameter(
                "scale",
                &scale,
                &format!(
                    "{cells} cells at {scale} pixels each exceed the maximum image dimension {MAX_IMAGE_DIMENSION}"
                ),
            )
        })
}

/// Render a map and save it as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is invalid
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_map_png(
    map: &TileMap,
    overlay: Overlay<'_>,
    scale: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_map(map, overlay, scale)?;

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| ExtractionError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| ExtractionError::MapExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
