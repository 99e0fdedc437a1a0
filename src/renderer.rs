//! Frontmatter and index page rendering for refdocs.
//! Page skeletons are MiniJinja templates registered once per renderer.
use crate::error::{Error, Result};
use minijinja::{context, Environment};
use serde::Serialize;

const FRONTMATTER_TEMPLATE: &str = "---
title: {{ title }}
sidebar_label: {{ sidebar_label }}
---

";

const INDEX_TEMPLATE: &str = "{{ frontmatter }}# {{ title }}

This section contains the API documentation for all packages.

## Packages

{% for package in packages %}- [{{ package.title }}](./{{ package.name }}/) - Documentation for the {{ package.name }} package
{% endfor %}";

/// A package line on the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub name: String,
    pub title: String,
}

/// MiniJinja-based page renderer.
pub struct PageRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl std::fmt::Debug for PageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderer").finish_non_exhaustive()
    }
}

impl PageRenderer {
    /// Creates a new PageRenderer with the built-in templates.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if a built-in template fails to compile
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_template("frontmatter.md", FRONTMATTER_TEMPLATE).map_err(Error::MinijinjaError)?;
        env.add_template("index.mdx", INDEX_TEMPLATE).map_err(Error::MinijinjaError)?;
        Ok(Self { env })
    }

    /// Renders the frontmatter header, including the blank line after it.
    pub fn frontmatter(&self, title: &str, sidebar_label: &str) -> Result<String> {
        let tmpl = self.env.get_template("frontmatter.md")?;
        Ok(tmpl.render(context! { title, sidebar_label })?)
    }

    /// Renders a package page: frontmatter, cleaned body and a final newline.
    pub fn package_page(&self, title: &str, body: &str) -> Result<String> {
        let frontmatter = self.frontmatter(&format!("{title} API"), title)?;
        Ok(format!("{frontmatter}{body}\n"))
    }

    /// Renders the index page listing `packages`.
    pub fn index_page(
        &self,
        title: &str,
        sidebar_label: &str,
        packages: &[IndexEntry],
    ) -> Result<String> {
        let frontmatter = self.frontmatter(title, sidebar_label)?;
        let tmpl = self.env.get_template("index.mdx")?;
        Ok(tmpl.render(context! { frontmatter, title, packages })?)
    }
}
