//! Batch progress tracking for multi-map extraction runs

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Maps: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for a batch of maps
pub struct ProgressManager {
    bar: ProgressBar,
    extracted_total: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Create a progress manager that draws nothing
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target);
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            extracted_total: 0,
        }
    }

    /// Set the number of maps in the batch
    pub fn initialize(&mut self, map_count: usize) {
        self.bar.set_length(map_count as u64);
        self.bar.set_position(0);
        self.extracted_total = 0;
    }

    /// Show which map is being processed
    pub fn start_map(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Record a finished map and the number of tiles it yielded
    pub fn complete_map(&mut self, extracted: usize) {
        self.extracted_total += extracted;
        self.bar.inc(1);
    }

    /// Maps finished so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Tiles extracted across all finished maps
    pub const fn extracted_total(&self) -> usize {
        self.extracted_total
    }

    /// Stop the display on a failed map, keeping the bar where it stopped
    pub fn abandon(&self, path: &Path) {
        self.bar.abandon_with_message(format!(
            "failed on {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        ));
    }

    /// Whether the display has been finished or abandoned
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} tiles extracted",
            self.extracted_total
        ));
    }
}
