//! refdocs builds API reference pages for the packages of a Python starter
//! project. It runs an external documentation generator per package, cleans
//! the generated markdown and writes pages plus an index for a static site.

/// Reference build orchestration
pub mod builder;

/// Ordered cleanup rules for generated markdown
pub mod cleanup;

/// Command-line interface module for refdocs
pub mod cli;

/// Configuration handling
/// Supports JSON and YAML formats (refdocs.json, refdocs.yml, refdocs.yaml)
pub mod config;

/// Default names and directories
pub mod constants;

/// Package discovery in the source directory
pub mod discovery;

/// Error types and handling for refdocs
pub mod error;

/// External documentation generator invocation
pub mod generator;

pub mod logger;

/// Module path to source file mapping
pub mod module_path;

/// Git remote lookup and source link prefixes
pub mod remote;

/// Frontmatter and index page templates
pub mod renderer;
