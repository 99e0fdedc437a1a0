//! Common constants used throughout refdocs.

/// Supported configuration file names, tried in order
pub const CONFIG_FILES: [&str; 3] = ["refdocs.json", "refdocs.yml", "refdocs.yaml"];

/// Directory scanned for packages
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Directory the reference pages are written to
pub const DEFAULT_OUTPUT_DIR: &str = "docs/astro/src/content/docs/api";

/// File whose presence marks a directory as a package
pub const DEFAULT_PACKAGE_MARKER: &str = "__init__.py";

/// File name a package's `__init__` maps to, without extension
pub const PACKAGE_INIT_MODULE: &str = "__init__";

pub const DEFAULT_SOURCE_EXTENSION: &str = "py";
pub const DEFAULT_CODE_LANGUAGE: &str = "python";

pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_BRANCH: &str = "main";

/// Program invoked to render a module as markdown
pub const DEFAULT_GENERATOR: &str = "griffe2md";

pub const DEFAULT_PACKAGE_DOC_FILE: &str = "index.md";
pub const DEFAULT_INDEX_FILE: &str = "index.mdx";
pub const DEFAULT_INDEX_TITLE: &str = "API Reference";
pub const DEFAULT_INDEX_SIDEBAR_LABEL: &str = "API";
