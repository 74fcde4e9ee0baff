//! Command-line interface for running shape extractions over PNG maps

use crate::extraction::query::{ExtractOptions, ShapeQuery, extract_with};
use crate::extraction::engine::TileFilter;
use crate::extraction::shapes::{BoxMode, RectangleSize};
use crate::io::configuration::{
    DEFAULT_RADIUS, DEFAULT_RECT_HEIGHT, DEFAULT_RECT_WIDTH, DEFAULT_SCALE, DEFAULT_SEED,
    DEFAULT_TARGET_COL, DEFAULT_TARGET_ROW, DEFAULT_WALL_DENSITY, DEMO_MAP_HEIGHT,
    DEMO_MAP_WIDTH, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{Overlay, export_map_png};
use crate::io::map::{load_png_map, random_map};
use crate::io::progress::ProgressManager;
use crate::spatial::coord::Coord;
use crate::spatial::grid::TileGrid;
use crate::spatial::mask::TileMask;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Shape selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeKind {
    /// Filled disc
    Circle,
    /// Ring of the disc
    CircleOutline,
    /// Filled box
    Rectangle,
    /// Frame of the box
    RectangleOutline,
}

#[derive(Parser)]
#[command(name = "gridextract")]
#[command(
    author,
    version,
    about = "Highlight the walkable tiles of a map that fall inside a shape"
)]
/// Command-line arguments for the extraction tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG map or directory of maps
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Shape to extract
    #[arg(short = 'S', long, value_enum, default_value_t = ShapeKind::Circle)]
    pub shape: ShapeKind,

    /// Circle radius in cells
    #[arg(short, long, default_value_t = DEFAULT_RADIUS, allow_negative_numbers = true)]
    pub radius: i32,

    /// Rectangle width (half-extent unless --full-extent)
    #[arg(short = 'w', long, default_value_t = DEFAULT_RECT_WIDTH, allow_negative_numbers = true)]
    pub width: i32,

    /// Rectangle height (half-extent unless --full-extent)
    #[arg(short = 'H', long, default_value_t = DEFAULT_RECT_HEIGHT, allow_negative_numbers = true)]
    pub height: i32,

    /// Anchor row
    #[arg(long, default_value_t = DEFAULT_TARGET_ROW, allow_negative_numbers = true)]
    pub row: i32,

    /// Anchor column
    #[arg(long, default_value_t = DEFAULT_TARGET_COL, allow_negative_numbers = true)]
    pub col: i32,

    /// Leave the anchor tile out of filled shapes
    #[arg(short = 'x', long)]
    pub exclude_center: bool,

    /// Treat rectangle width and height as the full box size
    #[arg(short, long)]
    pub full_extent: bool,

    /// Extract walls as well as walkable tiles
    #[arg(long)]
    pub include_walls: bool,

    /// Pixels per cell in the output image
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Generate a random map at TARGET before extracting
    #[arg(short, long)]
    pub generate: bool,

    /// Random seed for map generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Fraction of generated tiles that are walls
    #[arg(short, long, default_value_t = DEFAULT_WALL_DENSITY)]
    pub density: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process maps even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Anchor cell requested on the command line
    pub const fn anchor(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    /// Shape query described by the arguments
    pub const fn query(&self) -> ShapeQuery {
        let size = RectangleSize::new(self.width, self.height);
        match self.shape {
            ShapeKind::Circle => ShapeQuery::FilledCircle {
                radius: self.radius,
                include_center: !self.exclude_center,
            },
            ShapeKind::CircleOutline => ShapeQuery::CircleOutline {
                radius: self.radius,
            },
            ShapeKind::Rectangle => ShapeQuery::FilledRectangle {
                size,
                include_center: !self.exclude_center,
            },
            ShapeKind::RectangleOutline => ShapeQuery::RectangleOutline { size },
        }
    }

    /// Extraction options described by the arguments
    pub const fn options(&self) -> ExtractOptions {
        ExtractOptions {
            box_mode: if self.full_extent {
                BoxMode::FullExtent
            } else {
                BoxMode::HalfExtent
            },
            filter: if self.include_walls {
                TileFilter::Any
            } else {
                TileFilter::Walkable
            },
        }
    }
}

/// Orchestrates batch extraction over PNG maps with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process maps according to CLI arguments
    ///
    /// Returns the number of maps written.
    ///
    /// # Errors
    ///
    /// Returns an error if map generation, target validation, loading,
    /// extraction or export fails
    pub fn process(&mut self) -> Result<usize> {
        if self.cli.generate {
            self.generate_map()?;
        }

        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(0);
        }

        self.progress_manager.initialize(files.len());
        for file in &files {
            if let Err(e) = self.process_file(file) {
                self.progress_manager.abandon(file);
                return Err(e);
            }
        }
        self.progress_manager.finish();

        Ok(files.len())
    }

    /// Tiles extracted across all processed maps
    pub const fn extracted_total(&self) -> usize {
        self.progress_manager.extracted_total()
    }

    /// Progress display of the current batch
    pub const fn progress(&self) -> &ProgressManager {
        &self.progress_manager
    }

    fn generate_map(&self) -> Result<()> {
        if self.cli.target.extension().and_then(|s| s.to_str()) != Some("png") {
            return Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"generated maps must be written to a .png path",
            ));
        }
        let map = random_map(
            DEMO_MAP_HEIGHT,
            DEMO_MAP_WIDTH,
            self.cli.density,
            self.cli.seed,
        )?;
        export_map_png(&map, Overlay::default(), 1, &self.cli.target)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if target.extension().and_then(|s| s.to_str()) != Some("png") {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a PNG image",
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && !Self::is_output_path(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        self.progress_manager.start_map(input_path);

        let map = load_png_map(input_path)?;
        let anchor = self.cli.anchor();
        let extracted = extract_with(&map, anchor, &self.cli.query(), self.cli.options())?;
        let mask = TileMask::from_tiles(map.bounds(), extracted.iter().copied());

        let overlay = Overlay {
            extracted: Some(&mask),
            anchor: Some(anchor),
        };
        export_map_png(
            &map,
            overlay,
            self.cli.scale,
            &Self::get_output_path(input_path),
        )?;

        self.progress_manager.complete_map(extracted.len());
        Ok(())
    }

    fn is_output_path(path: &Path) -> bool {
        path.file_stem()
            .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
    }

    /// Output path for a map: `<stem>_extracted.<ext>` beside the input
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
