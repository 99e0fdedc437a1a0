use refdocs::config::GeneratorConfig;
use refdocs::error::Error;
use refdocs::generator::{generate_raw_docs, CommandGenerator, DocGenerator};
use tempfile::TempDir;

#[test]
fn test_unknown_program_is_a_generator_error() {
    let temp_dir = TempDir::new().unwrap();
    let generator = CommandGenerator::new("refdocs-no-such-generator", Vec::new());

    match generator.generate("src.pkg", &temp_dir.path().join("index.md")) {
        Err(Error::GeneratorError { module_path, message }) => {
            assert_eq!(module_path, "src.pkg");
            assert!(message.contains("refdocs-no-such-generator"));
        }
        other => panic!("Expected GeneratorError, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn test_non_zero_exit_is_a_generator_error() {
    let temp_dir = TempDir::new().unwrap();
    let generator = CommandGenerator::new("false", Vec::new());

    assert!(matches!(
        generator.generate("src.pkg", &temp_dir.path().join("index.md")),
        Err(Error::GeneratorError { .. })
    ));
}

#[cfg(unix)]
#[test]
fn test_generate_raw_docs_reads_output() {
    let temp_dir = TempDir::new().unwrap();
    // sh -c '<script>' <$0> <module> -o <file>
    let generator = CommandGenerator::from_config(&GeneratorConfig {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), "printf '## %s\\n' \"$1\" > \"$3\"".to_string(), "sh".to_string()],
    })
    .working_dir(temp_dir.path());

    let out_file = temp_dir.path().join("index.md");
    let raw = generate_raw_docs(&generator, "src.pkg", &out_file).unwrap();
    assert_eq!(raw, "## src.pkg\n");
}

#[cfg(unix)]
#[test]
fn test_generate_raw_docs_requires_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let generator = CommandGenerator::new("true", Vec::new());

    let result = generate_raw_docs(&generator, "src.pkg", &temp_dir.path().join("index.md"));
    assert!(matches!(result, Err(Error::MissingOutputError { .. })));
}

#[cfg(unix)]
#[test]
fn test_generate_raw_docs_ignores_previous_output() {
    let temp_dir = TempDir::new().unwrap();
    let out_file = temp_dir.path().join("index.md");
    std::fs::write(&out_file, "## from an earlier run\n").unwrap();
    let generator = CommandGenerator::new("true", Vec::new());

    let result = generate_raw_docs(&generator, "src.pkg", &out_file);
    assert!(matches!(result, Err(Error::MissingOutputError { .. })));
    assert!(!out_file.exists());
}
