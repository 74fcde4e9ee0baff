//! Map decoding from PNG images and ASCII text, and seeded map generation
//!
//! Each source produces a finished [`TileMap`]; the engine never discovers
//! tiles on its own.

use std::path::Path;

use image::RgbaImage;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{ABSENT_ALPHA_THRESHOLD, MAX_MAP_DIMENSION, WALL_LUMA_THRESHOLD};
use crate::io::error::{ExtractionError, Result, invalid_parameter};
use crate::spatial::coord::Coord;
use crate::spatial::grid::TileMap;

/// Character for a walkable tile in ASCII maps
pub const FLOOR_CHAR: char = '.';
/// Character for a blocked tile in ASCII maps
pub const WALL_CHAR: char = '#';
/// Characters for an empty cell in ASCII maps
pub const ABSENT_CHARS: [char; 2] = [' ', '_'];

/// Load a PNG map, one cell per pixel
///
/// # Errors
///
/// Returns an error if the file cannot be decoded or the map is too large
pub fn load_png_map(path: &Path) -> Result<TileMap> {
    let img = image::open(path).map_err(|e| ExtractionError::MapLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    decode_map(&img.to_rgba8())
}

/// Decode an RGBA image into a map
///
/// Pixel `(x, y)` becomes cell `(row = y, col = x)`. Mostly transparent
/// pixels (alpha below half) are empty cells, dark pixels are walls and everything else is floor.
///
/// # Errors
///
/// Returns an error if the image is empty or exceeds the maximum map dimension
pub fn decode_map(img: &RgbaImage) -> Result<TileMap> {
    let (width, height) = img.dimensions();
    let (height, width) = (height as usize, width as usize);
    check_dimensions(height, width)?;

    let mut map = TileMap::new(height, width);
    for (x, y, pixel) in img.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        if a < ABSENT_ALPHA_THRESHOLD {
            continue;
        }
        let walkable = luma(r, g, b) >= WALL_LUMA_THRESHOLD;
        map.place(Coord::new(y as i32, x as i32), walkable)?;
    }
    Ok(map)
}

/// Parse an ASCII map
///
/// `.` is floor, `#` is wall, and a space or `_` is an empty cell. Short
/// lines are padded with empty cells up to the longest line.
///
/// # Errors
///
/// Returns an error if the text has no rows, contains an unknown character,
/// or exceeds the maximum map dimension
pub fn parse_ascii_map(text: &str) -> Result<TileMap> {
    let lines: Vec<&str> = text.lines().collect();
    let height = lines.len();
    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    check_dimensions(height, width)?;

    let mut map = TileMap::new(height, width);
    for (row, line) in lines.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let coord = Coord::new(row as i32, col as i32);
            match ch {
                FLOOR_CHAR => map.place(coord, true)?,
                WALL_CHAR => map.place(coord, false)?,
                c if ABSENT_CHARS.contains(&c) => {}
                other => {
                    return Err(ExtractionError::InvalidMapData {
                        reason: format!("unknown map character '{other}' at {coord}"),
                    });
                }
            }
        }
    }
    Ok(map)
}

/// Generate a fully populated map with randomly placed walls
///
/// The same seed always yields the same map.
///
/// # Errors
///
/// Returns an error if `wall_density` is outside `[0, 1]` or the dimensions are invalid
pub fn random_map(height: usize, width: usize, wall_density: f64, seed: u64) -> Result<TileMap> {
    if !(0.0..=1.0).contains(&wall_density) {
        return Err(invalid_parameter(
            "wall_density",
            &wall_density,
            &"must be between 0 and 1",
        ));
    }
    check_dimensions(height, width)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut map = TileMap::new(height, width);
    for row in 0..height {
        for col in 0..width {
            let walkable = !rng.random_bool(wall_density);
            map.place(Coord::new(row as i32, col as i32), walkable)?;
        }
    }
    Ok(map)
}

fn check_dimensions(height: usize, width: usize) -> Result<()> {
    if height == 0 || width == 0 {
        return Err(ExtractionError::InvalidMapData {
            reason: format!("map must have at least one cell (got {height}x{width})"),
        });
    }
    if height > MAX_MAP_DIMENSION || width > MAX_MAP_DIMENSION {
        return Err(ExtractionError::InvalidMapData {
            reason: format!(
                "map size {height}x{width} exceeds the maximum dimension {MAX_MAP_DIMENSION}"
            ),
        });
    }
    Ok(())
}

// ITU-R BT.601 weights
fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    (weighted / 1000) as u8
}
