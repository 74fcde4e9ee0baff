//! Demo defaults, palette and map decoding constants

// Query defaults mirror the demo scene
/// Default circle radius
pub const DEFAULT_RADIUS: i32 = 2;
/// Default rectangle width (half-extent unless full extent is requested)
pub const DEFAULT_RECT_WIDTH: i32 = 2;
/// Default rectangle height (half-extent unless full extent is requested)
pub const DEFAULT_RECT_HEIGHT: i32 = 2;
/// Default anchor row
pub const DEFAULT_TARGET_ROW: i32 = 4;
/// Default anchor column
pub const DEFAULT_TARGET_COL: i32 = 8;

/// Rows of a generated demo map
pub const DEMO_MAP_HEIGHT: usize = 21;
/// Columns of a generated demo map
pub const DEMO_MAP_WIDTH: usize = 24;

/// Fixed seed for reproducible map generation
pub const DEFAULT_SEED: u64 = 42;
/// Fraction of generated tiles that are walls
pub const DEFAULT_WALL_DENSITY: f64 = 0.2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed map dimension
pub const MAX_MAP_DIMENSION: usize = 10_000;

/// Default pixels per cell in rendered output
pub const DEFAULT_SCALE: u32 = 8;
/// Maximum pixels per cell in rendered output
pub const MAX_SCALE: u32 = 64;
/// Maximum width or height of a rendered image in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;

// Map decoding
/// Pixels darker than this luma decode as walls
pub const WALL_LUMA_THRESHOLD: u8 = 128;
/// Pixels with alpha below this decode as empty cells
pub const ABSENT_ALPHA_THRESHOLD: u8 = 128;

// Palette
/// Walkable tile colour
pub const FLOOR_COLOR: [u8; 4] = [214, 214, 204, 255];
/// Blocked tile colour
pub const WALL_COLOR: [u8; 4] = [48, 48, 56, 255];
/// Empty cell colour
pub const ABSENT_COLOR: [u8; 4] = [0, 0, 0, 0];
/// Extracted tile colour
pub const EXTRACTED_COLOR: [u8; 4] = [92, 184, 112, 255];
/// Anchor tile colour
pub const TARGET_COLOR: [u8; 4] = [212, 64, 64, 255];

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_extracted";
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
