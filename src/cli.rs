//! Command-line interface implementation for refdocs.
//! Every argument is optional; running without any reproduces the
//! default layout of the starter template.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for refdocs.
#[derive(Parser, Debug)]
#[command(author, version, about = "refdocs: build API reference pages from Python packages", long_about = None)]
pub struct Args {
    /// Path to a config file (defaults to refdocs.json, refdocs.yml or refdocs.yaml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory containing the packages to document
    #[arg(long, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Directory where the reference pages are written
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Branch used when linking to source files
    #[arg(long)]
    pub branch: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
