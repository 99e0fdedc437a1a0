//! Configuration handling for refdocs.
//! Settings come from an optional config file in the working directory
//! (JSON or YAML) and are then overridden by command-line arguments.

use crate::cli::Args;
use crate::constants::{
    CONFIG_FILES, DEFAULT_BRANCH, DEFAULT_CODE_LANGUAGE, DEFAULT_GENERATOR,
    DEFAULT_INDEX_FILE, DEFAULT_INDEX_SIDEBAR_LABEL, DEFAULT_INDEX_TITLE,
    DEFAULT_OUTPUT_DIR, DEFAULT_PACKAGE_DOC_FILE, DEFAULT_PACKAGE_MARKER, DEFAULT_REMOTE,
    DEFAULT_SOURCE_DIR, DEFAULT_SOURCE_EXTENSION,
};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

/// External generator invocation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Program to execute
    pub program: String,
    /// Extra arguments placed before `<module> -o <file>`
    pub args: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { program: DEFAULT_GENERATOR.to_string(), args: Vec::new() }
    }
}

/// Settings for a reference documentation build.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    /// First segment of every module path; the source directory name when unset
    pub root_module: Option<String>,
    /// Location of the source directory inside the repository, used for links;
    /// the source directory when unset
    pub source_url_path: Option<String>,
    pub package_marker: String,
    pub source_extension: String,
    pub code_language: String,
    pub remote: String,
    pub branch: String,
    /// Glob patterns matched against package directory names
    pub exclude: Vec<String>,
    pub generator: GeneratorConfig,
    pub package_doc_file: String,
    pub index_file: String,
    pub index_title: String,
    pub index_sidebar_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            root_module: None,
            source_url_path: None,
            package_marker: DEFAULT_PACKAGE_MARKER.to_string(),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            code_language: DEFAULT_CODE_LANGUAGE.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            exclude: Vec::new(),
            generator: GeneratorConfig::default(),
            package_doc_file: DEFAULT_PACKAGE_DOC_FILE.to_string(),
            index_file: DEFAULT_INDEX_FILE.to_string(),
            index_title: DEFAULT_INDEX_TITLE.to_string(),
            index_sidebar_label: DEFAULT_INDEX_SIDEBAR_LABEL.to_string(),
        }
    }
}

impl Config {
    /// Module path root, e.g. `src` for packages under `src/`.
    pub fn root_module(&self) -> String {
        match &self.root_module {
            Some(root) => root.clone(),
            None => self
                .source_dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_SOURCE_DIR.to_string()),
        }
    }

    /// Path of the source directory inside the repository, with forward
    /// slashes and no surrounding separators.
    ///
    /// When unset it is derived from `source_dir`, which only yields the right
    /// path for a `source_dir` relative to the repository root.
    pub fn source_url_path(&self) -> String {
        let raw = match &self.source_url_path {
            Some(path) => path.clone(),
            None => self
                .source_dir
                .components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("/"),
        };
        raw.trim_matches('/').to_string()
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(source_dir) = &args.source_dir {
            self.source_dir = source_dir.clone();
        }
        if let Some(output_dir) = &args.output_dir {
            self.output_dir = output_dir.clone();
        }
        if let Some(branch) = &args.branch {
            self.branch = branch.clone();
        }
        self
    }
}

/// Finds the config file to use.
///
/// An explicit path must exist; otherwise the first of [`CONFIG_FILES`]
/// present in `base_dir` is used, if any.
pub fn find_config_file<P: AsRef<Path>>(
    base_dir: P,
    explicit: Option<&Path>,
) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::ConfigError(format!(
                "config file '{}' does not exist",
                path.display()
            )));
        }
        return Ok(Some(path.to_path_buf()));
    }

    Ok(CONFIG_FILES
        .iter()
        .map(|file| base_dir.as_ref().join(file))
        .find(|path| path.exists()))
}

/// Parses config content, trying JSON first and YAML as fallback.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
///   for the [`Config`] schema
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads the config for a run rooted at `base_dir`.
///
/// Without a config file the defaults are used; CLI arguments win either way.
pub fn get_config<P: AsRef<Path>>(base_dir: P, args: &Args) -> Result<Config> {
    let config = match find_config_file(base_dir, args.config.as_deref())? {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            parse_config(&content)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };
    Ok(config.with_args(args))
}
