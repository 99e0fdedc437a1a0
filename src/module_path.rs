//! Mapping between dotted module paths and source files.
//!
//! The layout is fixed at two levels below the root: `root.pkg` is the
//! package's `__init__` file, `root.pkg.module` is a module file, and anything
//! deeper names a symbol inside that module file.

use crate::constants::PACKAGE_INIT_MODULE;

/// Builds the module path for a package, e.g. `src.hello_world`.
pub fn package_module_path(root: &str, package: &str) -> String {
    format!("{root}.{package}")
}

/// Maps a module path to a source file path relative to the source root.
///
/// # Examples
/// ```
/// use refdocs::module_path::module_path_to_source_file;
///
/// assert_eq!(
///     module_path_to_source_file("src.pkg", "src", "py").as_deref(),
///     Some("pkg/__init__.py")
/// );
/// assert_eq!(
///     module_path_to_source_file("src.pkg.mod.func", "src", "py").as_deref(),
///     Some("pkg/mod.py")
/// );
/// ```
///
/// # Returns
/// * `None` if the path is not rooted at `root` or names no package
pub fn module_path_to_source_file(module_path: &str, root: &str, extension: &str) -> Option<String> {
    let rest = module_path.strip_prefix(root)?.strip_prefix('.')?;
    let mut segments = rest.split('.');

    let package = segments.next().filter(|s| !s.is_empty())?;
    let stem = match segments.next() {
        None => PACKAGE_INIT_MODULE,
        Some("") => return None,
        Some(module) => module,
    };

    if extension.is_empty() {
        Some(format!("{package}/{stem}"))
    } else {
        Some(format!("{package}/{stem}.{extension}"))
    }
}
