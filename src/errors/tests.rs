//! Unit tests for error types and their display formatting.

use std::io;
use std::path::PathBuf;

use crate::errors::errors::HighlightError;

#[test]
fn test_unsupported_extension_display() {
    let error = HighlightError::UnsupportedExtension {
        extension: "txt".to_string(),
    };

    assert_eq!(error.to_string(), "unsupported file extension: \"txt\"");
}

#[test]
fn test_read_failure_names_path() {
    let error = HighlightError::read(
        PathBuf::from("samples/missing.py"),
        io::Error::new(io::ErrorKind::NotFound, "no such file"),
    );

    let message = error.to_string();
    assert!(message.contains("failed to read"));
    assert!(message.contains("missing.py"));
}

#[test]
fn test_write_failure_names_path() {
    let error = HighlightError::write(
        PathBuf::from("results/out.html"),
        io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    );

    let message = error.to_string();
    assert!(message.contains("failed to write"));
    assert!(message.contains("out.html"));
}
