use std::path::PathBuf;

use thiserror::Error;

/// Per-file failure raised by the batch driver. The scan itself never
/// fails: a character no rule covers becomes an Error token, so the only
/// failure paths left are language detection and file I/O.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("unsupported file extension: {extension:?}")]
    UnsupportedExtension { extension: String },
    #[error("failed to read {path:?}: {source}")]
    ReadFailure {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path:?}: {source}")]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl HighlightError {
    pub fn read(path: PathBuf, source: std::io::Error) -> Self {
        HighlightError::ReadFailure { path, source }
    }

    pub fn write(path: PathBuf, source: std::io::Error) -> Self {
        HighlightError::WriteFailure { path, source }
    }
}
