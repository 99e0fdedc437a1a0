use std::io;

use refdocs::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::GeneratorError {
        module_path: "src.pkg".to_string(),
        message: "exit status: 1".to_string(),
    };
    assert_eq!(err.to_string(), "Generator error for 'src.pkg': exit status: 1.");

    let err = Error::MissingOutputError { path: "api/pkg/index.md".to_string() };
    assert_eq!(err.to_string(), "Generator produced no output at 'api/pkg/index.md'.");
}
