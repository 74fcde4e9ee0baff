//! CLI entry point for shape extraction over PNG maps

use clap::Parser;
use gridextract::io::cli::{Cli, FileProcessor};

fn main() -> gridextract::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
