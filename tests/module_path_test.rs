use refdocs::module_path::{module_path_to_source_file, package_module_path};

#[test]
fn test_package_maps_to_init() {
    assert_eq!(
        module_path_to_source_file("root.pkg", "root", "py").as_deref(),
        Some("pkg/__init__.py")
    );
}

#[test]
fn test_module_maps_to_module_file() {
    assert_eq!(
        module_path_to_source_file("root.pkg.mod", "root", "py").as_deref(),
        Some("pkg/mod.py")
    );
}

#[test]
fn test_symbols_map_to_containing_module() {
    let module = module_path_to_source_file("root.pkg.mod", "root", "py");
    assert_eq!(module_path_to_source_file("root.pkg.mod.symbol", "root", "py"), module);
    assert_eq!(module_path_to_source_file("root.pkg.mod.Class.method", "root", "py"), module);
}

#[test]
fn test_empty_extension() {
    assert_eq!(
        module_path_to_source_file("root.pkg", "root", "").as_deref(),
        Some("pkg/__init__")
    );
}

#[test]
fn test_unrooted_paths_have_no_file() {
    assert_eq!(module_path_to_source_file("root", "root", "py"), None);
    assert_eq!(module_path_to_source_file("root.", "root", "py"), None);
    assert_eq!(module_path_to_source_file("rootless.pkg", "root", "py"), None);
    assert_eq!(module_path_to_source_file("other.pkg.mod", "root", "py"), None);
    assert_eq!(module_path_to_source_file("root.pkg..f", "root", "py"), None);
}

#[test]
fn test_package_module_path() {
    assert_eq!(package_module_path("src", "hello_world"), "src.hello_world");
}
