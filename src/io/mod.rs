//! Input/output around the extraction engine
//!
//! Maps come in as PNG images or ASCII text and go out as rendered PNGs.
//! Nothing here is needed to run a query; it is the demo shell.

/// Command-line interface and batch processing
pub mod cli;
/// Compile-time defaults and palette
pub mod configuration;
/// Error types for all crate operations
pub mod error;
/// Rendering of maps and extraction results
pub mod image;
/// Map decoding and generation
pub mod map;
/// Batch progress display
pub mod progress;
