//! Reference documentation build orchestration.
//! Ties discovery, generation, cleanup and rendering together for one run.

use crate::cleanup::{Cleaner, CleanupOptions};
use crate::config::Config;
use crate::discovery::{build_exclude_set, discover_packages, Package};
use crate::error::Result;
use crate::generator::{generate_raw_docs, DocGenerator};
use crate::module_path::package_module_path;
use crate::remote::{resolve_source_base_url, RemoteUrlSource};
use crate::renderer::{IndexEntry, PageRenderer};
use log::{debug, error, info};
use std::fs;
use std::path::PathBuf;

/// Outcome of a [`DocBuilder::build_reference_docs`] run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Packages listed on the index, in processing order
    pub packages: Vec<String>,
    /// Packages whose page was written
    pub generated: Vec<String>,
    /// Packages that failed, with the error message
    pub failed: Vec<(String, String)>,
    /// Index page path, if one was written
    pub index_file: Option<PathBuf>,
}

/// Builds API reference pages for every package in the source directory.
pub struct DocBuilder<'a> {
    config: &'a Config,
    generator: &'a dyn DocGenerator,
    remote: &'a dyn RemoteUrlSource,
}

impl<'a> DocBuilder<'a> {
    /// Creates a new DocBuilder instance.
    pub fn new(
        config: &'a Config,
        generator: &'a dyn DocGenerator,
        remote: &'a dyn RemoteUrlSource,
    ) -> Self {
        Self { config, generator, remote }
    }

    /// Prefix for source links: the browsing URL plus the source directory.
    fn link_base_url(&self, source_base_url: &str) -> String {
        if source_base_url.is_empty() {
            return String::new();
        }
        match self.config.source_url_path().as_str() {
            "" => source_base_url.to_string(),
            path => format!("{source_base_url}/{path}"),
        }
    }

    /// Generates, cleans and writes the page for one package.
    fn build_package(
        &self,
        package: &Package,
        cleaner: &Cleaner,
        renderer: &PageRenderer,
        out_file: &std::path::Path,
    ) -> Result<()> {
        let module_path = package_module_path(&self.config.root_module(), &package.name);
        debug!("Documenting {} from {}", module_path, package.path.display());
        let raw = generate_raw_docs(self.generator, &module_path, out_file)?;
        let page = renderer.package_page(&package.title(), &cleaner.clean(&raw))?;
        fs::write(out_file, page)?;
        Ok(())
    }

    /// Builds the reference documentation.
    ///
    /// # Flow
    /// 1. Resolves the source browsing URL once
    /// 2. Discovers packages; stops without writing anything if there are none
    /// 3. Creates the output directory
    /// 4. Generates, cleans and writes one page per package
    /// 5. Writes the index page
    ///
    /// A package is listed on the index before its page is generated, so a
    /// package whose generation fails still gets an index entry.
    ///
    /// # Errors
    /// * Only errors outside the per-package step propagate (unreadable
    ///   source directory, unwritable output directory, bad exclude patterns)
    pub fn build_reference_docs(&self) -> Result<BuildReport> {
        let config = self.config;
        let mut report = BuildReport::default();

        let source_base_url = resolve_source_base_url(self.remote, &config.branch);
        if source_base_url.is_empty() {
            info!("No valid git remote found, using internal links");
        } else {
            info!("Will link to source code at: {source_base_url}");
        }

        let exclude = build_exclude_set(&config.exclude)?;
        let packages = discover_packages(&config.source_dir, &config.package_marker, &exclude)?;
        if packages.is_empty() {
            info!("No packages found in {}", config.source_dir.display());
            return Ok(report);
        }

        fs::create_dir_all(&config.output_dir)?;

        let options = CleanupOptions {
            base_url: self.link_base_url(&source_base_url),
            root_module: config.root_module(),
            source_extension: config.source_extension.clone(),
            code_language: config.code_language.clone(),
        };
        let cleaner = Cleaner::new(&options);
        let renderer = PageRenderer::new()?;
        let mut entries = Vec::with_capacity(packages.len());

        for package in &packages {
            entries.push(IndexEntry { name: package.name.clone(), title: package.title() });
            report.packages.push(package.name.clone());

            let package_out_dir = config.output_dir.join(&package.name);
            fs::create_dir_all(&package_out_dir)?;
            let out_file = package_out_dir.join(&config.package_doc_file);

            match self.build_package(package, &cleaner, &renderer, &out_file) {
                Ok(()) => {
                    info!("Generated documentation for {}", package.name);
                    report.generated.push(package.name.clone());
                }
                Err(e) => {
                    error!("Error generating documentation for {}: {}", package.name, e);
                    report.failed.push((package.name.clone(), e.to_string()));
                }
            }
        }

        let index_file = config.output_dir.join(&config.index_file);
        let index =
            renderer.index_page(&config.index_title, &config.index_sidebar_label, &entries)?;
        fs::write(&index_file, index)?;
        info!("Generated API index at {}", index_file.display());
        report.index_file = Some(index_file);

        Ok(report)
    }
}
