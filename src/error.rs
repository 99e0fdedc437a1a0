//! Error handling for refdocs.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Errors that can occur while building reference documentation.
///
/// Per-package errors are logged and skipped by the builder; everything else
/// propagates to `main` where [`default_error_handler`] reports it.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors in the config file or command-line overrides
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The documentation generator could not be run or exited unsuccessfully
    #[error("Generator error for '{module_path}': {message}.")]
    GeneratorError { module_path: String, message: String },

    /// The documentation generator finished without writing its output file
    #[error("Generator produced no output at '{path}'.")]
    MissingOutputError { path: String },

    /// Represents errors while rendering frontmatter or index templates
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents invalid package exclude patterns
    #[error("Exclude pattern error: {0}.")]
    ExcludePatternError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
