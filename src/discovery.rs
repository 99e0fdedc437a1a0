//! Package discovery below the source directory.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A package found in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Directory name, which is also the module name
    pub name: String,
    pub path: PathBuf,
}

impl Package {
    /// Human readable title, underscores replaced by spaces.
    pub fn title(&self) -> String {
        self.name.replace('_', " ")
    }
}

/// Compiles package exclude patterns into a GlobSet.
///
/// # Errors
/// * `Error::ExcludePatternError` if a pattern is not a valid glob
pub fn build_exclude_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::ExcludePatternError(format!("invalid pattern '{pattern}': {e}"))
        })?);
    }
    builder.build().map_err(|e| Error::ExcludePatternError(e.to_string()))
}

/// Lists the packages directly below `source_root`.
///
/// A directory is a package when its name does not start with `_` or `.`,
/// it contains `marker`, and it matches none of the `exclude` patterns.
/// Nested packages are not visited. Results are sorted by name.
///
/// # Errors
/// * `Error::IoError` if `source_root` cannot be read
pub fn discover_packages<P: AsRef<Path>>(
    source_root: P,
    marker: &str,
    exclude: &GlobSet,
) -> Result<Vec<Package>> {
    let source_root = source_root.as_ref();
    let mut packages = Vec::new();

    for entry in WalkDir::new(source_root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('_') || name.starts_with('.') {
            debug!("Skipping private directory '{name}'");
            continue;
        }
        if exclude.is_match(&name) {
            debug!("Skipping excluded directory '{name}'");
            continue;
        }
        if !entry.path().join(marker).is_file() {
            debug!("Skipping '{name}': no {marker}");
            continue;
        }

        packages.push(Package { name, path: entry.path().to_path_buf() });
    }

    Ok(packages)
}
