//! Error types for delimited text parsing and writing.

use std::path::PathBuf;

use csvtab_model::ModelError;
use thiserror::Error;

/// Errors that can occur while reading, parsing, serializing or writing.
#[derive(Debug, Error)]
pub enum ParseError {
    // === Configuration Errors ===
    /// `read_entire_file` or `write` called before `set_filename`.
    #[error("no filename configured")]
    NoFilename,

    /// Delimiter or quote settings that cannot be tokenized unambiguously.
    #[error("invalid parser configuration: {reason}")]
    InvalidConfig { reason: String },

    // === File System Errors ===
    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be read.
    #[error("failed to read file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created or written.
    #[error("failed to write file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Content Errors ===
    /// File content is not valid UTF-8.
    #[error("file {path} is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidEncoding { path: PathBuf, valid_up_to: usize },

    /// Quoted field still open at end of input.
    #[error("unterminated quoted field in record {record}")]
    UnterminatedQuote { record: usize },

    // === Access Errors ===
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ParseError {
    /// Create an InvalidConfig error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Map a read failure, keeping not-found distinct.
    pub(crate) fn from_read(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Read { path, source }
        }
    }

    /// Whether this is a FileNotFound/IOError kind failure.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. } | Self::Read { .. } | Self::Write { .. }
        )
    }

    /// Whether this wraps an index-out-of-range access failure.
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::Model(err) if err.is_index_out_of_range())
    }
}

/// Result type for parser operations.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/file.csv");

        let err = ParseError::invalid_config("field delimiter must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid parser configuration: field delimiter must not be empty"
        );
    }

    #[test]
    fn test_not_found_is_distinct() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ParseError::from_read(PathBuf::from("a.csv"), missing);
        assert!(matches!(err, ParseError::FileNotFound { .. }));
        assert!(err.is_io());

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no");
        let err = ParseError::from_read(PathBuf::from("a.csv"), denied);
        assert!(matches!(err, ParseError::Read { .. }));
        assert!(err.is_io());
    }

    #[test]
    fn test_error_from_model() {
        let err: ParseError = ModelError::RecordOutOfRange { index: 1, len: 0 }.into();
        assert!(err.is_index_out_of_range());
        assert!(!err.is_io());
        assert_eq!(err.to_string(), "record index 1 out of range (table has 0 records)");
    }
}
