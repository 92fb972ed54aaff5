//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror` ([`crate::lookup::LookupError`],
//! [`crate::mapper::MapError`], [`crate::marc::MarcError`]); those are contained per
//! identifier by the batch driver and never surface here. This module covers
//! the errors that do end a run: reading the identifier file and writing the
//! two output files.

use std::path::PathBuf;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// MARC serialization error
    #[error("MARC error: {0}")]
    Marc(#[from] crate::marc::MarcError),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Identifier input file problem
    #[error("Identifier file {path}: {message}")]
    Input { path: PathBuf, message: String },
}

impl Error {
    /// Create an input-file error.
    pub fn input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        let err = Error::input("/tmp/barcodes.txt", "not found");
        let msg = err.to_string();
        assert!(msg.contains("barcodes.txt"));
        assert!(msg.contains("not found"));
    }
}
