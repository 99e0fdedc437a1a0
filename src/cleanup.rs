//! Cleanup pipeline for generated reference markdown.
//!
//! Each rule is a [`CleanupRule`] applied in sequence by a [`Cleaner`]. Every
//! rule is idempotent on its own, and the cleaner reruns the sequence until
//! the text settles, so cleaning is idempotent.

use std::sync::LazyLock;

use log::trace;
use regex::{Captures, Regex};

use crate::constants::{DEFAULT_CODE_LANGUAGE, DEFAULT_SOURCE_DIR, DEFAULT_SOURCE_EXTENSION};
use crate::module_path::module_path_to_source_file;

/// A single text transformation of the cleanup pipeline.
pub trait CleanupRule {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Applies the rule to the whole document.
    fn apply(&self, text: &str) -> String;
}

/// Settings that shape the cleanup rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Prefix for rewritten anchor links; empty disables rewriting
    pub base_url: String,
    /// First segment of every module path
    pub root_module: String,
    /// Extension of mapped source files
    pub source_extension: String,
    /// Language label of example code fences
    pub code_language: String,
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            root_module: DEFAULT_SOURCE_DIR.to_string(),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            code_language: DEFAULT_CODE_LANGUAGE.to_string(),
        }
    }
}

impl CleanupOptions {
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }
}

// ---------------------------------------------------------------------------
// Rule 1: dangling dashes
// ---------------------------------------------------------------------------

/// Removes the ` –` the generator leaves after links without a description.
#[derive(Debug, Default)]
pub struct StripDanglingDash;

impl CleanupRule for StripDanglingDash {
    fn name(&self) -> &'static str {
        "strip-dangling-dash"
    }

    fn apply(&self, text: &str) -> String {
        static DANGLING_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"(?m)(\[[^\]\n]*\]\([^)\n]+\)) –[ \t]*$").expect("valid regex")
        });

        DANGLING_RE.replace_all(text, "$1").into_owned()
    }
}

// ---------------------------------------------------------------------------
// Rule 2: anchor links to source links
// ---------------------------------------------------------------------------

/// Points `[label](#root.pkg.module...)` links at the source file instead.
///
/// Anchors that are not rooted module paths are kept as they are.
#[derive(Debug)]
pub struct RewriteAnchorLinks {
    base_url: String,
    root_module: String,
    source_extension: String,
}

impl RewriteAnchorLinks {
    pub fn new(options: &CleanupOptions) -> Self {
        Self {
            base_url: options.base_url.trim_end_matches('/').to_string(),
            root_module: options.root_module.clone(),
            source_extension: options.source_extension.clone(),
        }
    }
}

impl CleanupRule for RewriteAnchorLinks {
    fn name(&self) -> &'static str {
        "rewrite-anchor-links"
    }

    fn apply(&self, text: &str) -> String {
        static ANCHOR_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"\[([^\]\n]*)\]\(#([^)\s]+)\)").expect("valid regex")
        });

        if self.base_url.is_empty() {
            return text.to_string();
        }

        ANCHOR_LINK_RE
            .replace_all(text, |caps: &Captures<'_>| {
                match module_path_to_source_file(
                    &caps[2],
                    &self.root_module,
                    &self.source_extension,
                ) {
                    Some(file) => format!("[{}]({}/{})", &caps[1], self.base_url, file),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

// ---------------------------------------------------------------------------
// Rule 3: example blocks
// ---------------------------------------------------------------------------

/// Turns collapsible example blocks into labelled code fences.
///
/// A body that already carries its own fences is kept as markdown.
#[derive(Debug)]
pub struct ExampleBlocks {
    language: String,
}

impl ExampleBlocks {
    pub fn new<S: Into<String>>(language: S) -> Self {
        Self { language: language.into() }
    }

    fn render(&self, body: &str) -> String {
        let body = body.trim();
        if body.contains("```") {
            format!("\n**Example:**\n\n{body}\n")
        } else {
            format!("\n**Example:**\n\n```{}\n{}\n```\n", self.language, body)
        }
    }
}

impl CleanupRule for ExampleBlocks {
    fn name(&self) -> &'static str {
        "example-blocks"
    }

    fn apply(&self, text: &str) -> String {
        static EXAMPLE_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(
                r#"(?s)<details class="example"[^>]*>\s*<summary>Example</summary>\s*(.*?)\s*</details>"#,
            )
            .expect("valid regex")
        });

        // Nested blocks only surface after the outer one is replaced.
        let mut result = text.to_string();
        while EXAMPLE_RE.is_match(&result) {
            result = EXAMPLE_RE
                .replace_all(&result, |caps: &Captures<'_>| self.render(&caps[1]))
                .into_owned();
        }
        result
    }
}

// ---------------------------------------------------------------------------
// Rule 4: heading prefixes
// ---------------------------------------------------------------------------

/// Drops the root module from `##` to `####` headings: `## src.pkg` becomes `## pkg`.
#[derive(Debug)]
pub struct StripHeadingRoot {
    prefix: String,
}

impl StripHeadingRoot {
    pub fn new(root_module: &str) -> Self {
        Self { prefix: format!("{root_module}.") }
    }
}

impl CleanupRule for StripHeadingRoot {
    fn name(&self) -> &'static str {
        "strip-heading-root"
    }

    fn apply(&self, text: &str) -> String {
        static HEADING_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"(?m)^(#{2,4}) ([^\n]*)$").expect("valid regex"));

        HEADING_RE
            .replace_all(text, |caps: &Captures<'_>| {
                let mut title = &caps[2];
                while let Some(rest) = title.strip_prefix(self.prefix.as_str()) {
                    title = rest;
                }
                format!("{} {}", &caps[1], title)
            })
            .into_owned()
    }
}

// ---------------------------------------------------------------------------
// Rule 5: empty section labels
// ---------------------------------------------------------------------------

/// Removes `**Modules:**` and `**Functions:**` labels with nothing below them
/// before the next heading or the end of the document.
#[derive(Debug, Default)]
pub struct DropEmptySectionLabels;

impl CleanupRule for DropEmptySectionLabels {
    fn name(&self) -> &'static str {
        "drop-empty-section-labels"
    }

    fn apply(&self, text: &str) -> String {
        static EMPTY_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"(?m)^(?:\*\*(?:Modules|Functions):\*\*\s*)+(\z|#{1,6} )").expect("valid regex")
        });

        EMPTY_LABEL_RE.replace_all(text, "$1").into_owned()
    }
}

// ---------------------------------------------------------------------------
// Rule 6: blank lines
// ---------------------------------------------------------------------------

/// Collapses runs of blank lines into a single blank line.
#[derive(Debug, Default)]
pub struct CollapseBlankLines;

impl CleanupRule for CollapseBlankLines {
    fn name(&self) -> &'static str {
        "collapse-blank-lines"
    }

    fn apply(&self, text: &str) -> String {
        static MULTI_BLANK_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

        MULTI_BLANK_RE.replace_all(text, "\n\n").into_owned()
    }
}

// ---------------------------------------------------------------------------
// Rule 7: typed links
// ---------------------------------------------------------------------------

/// Replaces `<code>[str](#str)</code>` type links with plain inline code.
#[derive(Debug, Default)]
pub struct SimplifyTypedLinks;

impl CleanupRule for SimplifyTypedLinks {
    fn name(&self) -> &'static str {
        "simplify-typed-links"
    }

    fn apply(&self, text: &str) -> String {
        static TYPED_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"<code>\[([^\]]+)\]\([^)]+\)</code>").expect("valid regex")
        });

        // Each replacement consumes a `<code>`, exposing the enclosing one.
        let mut result = text.to_string();
        while TYPED_LINK_RE.is_match(&result) {
            result = TYPED_LINK_RE.replace_all(&result, "`$1`").into_owned();
        }
        result
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// The ordered cleanup pipeline.
pub struct Cleaner {
    rules: Vec<Box<dyn CleanupRule>>,
}

impl std::fmt::Debug for Cleaner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rule_names()).finish()
    }
}

impl Cleaner {
    /// Builds the standard pipeline for `options`.
    pub fn new(options: &CleanupOptions) -> Self {
        Self {
            rules: vec![
                Box::new(StripDanglingDash),
                Box::new(RewriteAnchorLinks::new(options)),
                Box::new(ExampleBlocks::new(options.code_language.clone())),
                Box::new(StripHeadingRoot::new(&options.root_module)),
                Box::new(DropEmptySectionLabels),
                Box::new(CollapseBlankLines),
                Box::new(SimplifyTypedLinks),
            ],
        }
    }

    /// Builds a pipeline from custom rules, applied in the given order.
    ///
    /// [`Cleaner::clean`] reruns the rules until the text settles, so they must
    /// not undo each other's changes.
    pub fn with_rules(rules: Vec<Box<dyn CleanupRule>>) -> Self {
        Self { rules }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    fn run_once(&self, text: &str) -> String {
        let mut result = text.trim().to_string();
        for rule in &self.rules {
            result = rule.apply(&result);
            trace!("Applied cleanup rule {}", rule.name());
        }
        result.trim().to_string()
    }

    /// Cleans a generated document.
    ///
    /// The pipeline is rerun until it no longer changes the text, so a rule
    /// that exposes a match for an earlier one (an example body ending in a
    /// dangling dash) settles within a single call. Only consuming a
    /// `<details>` or `<code>` element exposes new matches and no rule emits
    /// either, so the reruns terminate.
    pub fn clean(&self, text: &str) -> String {
        let mut current = self.run_once(text);
        loop {
            let next = self.run_once(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }
}

/// Cleans `text` with the default layout, rewriting anchors against `base_url`.
pub fn clean(text: &str, base_url: &str) -> String {
    Cleaner::new(&CleanupOptions::default().with_base_url(base_url)).clean(text)
}
