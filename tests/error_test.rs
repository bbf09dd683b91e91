use std::error::Error as _;
use std::io;

use gogen::error::Error;

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
    let err = Error::ConfigError("invalid entity name '9lives'".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid entity name '9lives'.");

    let err = Error::TemplateNotFound { template: "templates/nope.tmpl".to_string() };
    assert_eq!(err.to_string(), "Template 'templates/nope.tmpl' not found in the template store.");

    let err = Error::CommandError { command: "go mod tidy".to_string(), stderr: "no network".to_string() };
    assert_eq!(err.to_string(), "Command 'go mod tidy' failed: no network");
}

#[test]
fn test_file_generation_error_names_path_and_cause() {
    let inner = Error::TemplateNotFound { template: "templates/main.tmpl".to_string() };
    let err = Error::FileGenerationError { path: "cmd/main.go".to_string(), source: Box::new(inner) };

    let message = err.to_string();
    assert!(message.starts_with("Failed to generate 'cmd/main.go': "));
    assert!(message.contains("templates/main.tmpl"));
    assert!(err.source().is_some());
}

#[test]
fn test_directory_error_keeps_io_source() {
    let err = Error::DirectoryError {
        path: "out/project/cmd".to_string(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };

    assert_eq!(err.to_string(), "Failed to create directory 'out/project/cmd': denied.");
    assert!(err.source().is_some());
}
