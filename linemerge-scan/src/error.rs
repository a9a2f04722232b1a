//! Error types for line scanning

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing, driving or resetting a line scanner
#[derive(Error, Debug)]
pub enum ScanError {
    /// The supplied stream cannot report or change its position
    #[error("stream is not seekable: {0}")]
    NotSeekable(#[source] io::Error),

    /// Seeking back to the start of the stream failed
    #[error("cannot reset scanner: {0}")]
    ResetUnsupported(#[source] io::Error),

    /// A read from the underlying stream failed partway through
    #[error("read failed after {lines_read} lines: {source}")]
    Io {
        /// Number of lines emitted before the failure
        lines_read: u64,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A line was not valid UTF-8
    #[error("invalid UTF-8 in line {line}")]
    InvalidUtf8 {
        /// 1-based number of the offending line
        line: u64,
    },

    /// A file could not be opened for scanning
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// The path that failed to open
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Invalid scanner configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for scanning operations
pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_progress() {
        let error = ScanError::Io {
            lines_read: 42,
            source: io::Error::new(io::ErrorKind::UnexpectedEof, "disk went away"),
        };
        assert_eq!(error.to_string(), "read failed after 42 lines: disk went away");
    }

    #[test]
    fn test_open_error_display_includes_path() {
        let error = ScanError::Open {
            path: PathBuf::from("/tmp/run-0007.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = error.to_string();
        assert!(msg.contains("run-0007.txt"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as _;

        let error = ScanError::ResetUnsupported(io::Error::other("pipe"));
        assert!(error.source().is_some());

        let error = ScanError::InvalidUtf8 { line: 3 };
        assert!(error.source().is_none());
        assert_eq!(error.to_string(), "invalid UTF-8 in line 3");
    }
}
