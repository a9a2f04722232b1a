//! Top-level error type

use linemerge_kmerge::MergeError;
use linemerge_scan::ScanError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the `linemerge` facade
#[derive(Error, Debug)]
pub enum Error {
    /// Scanner error (open, read, decode)
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// Merge diagnostics error
    #[error("merge error: {0}")]
    Merge(#[from] MergeError),

    /// Configuration file could not be read
    #[error("configuration error in {}: {source}", path.display())]
    ConfigFile {
        /// The configuration file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be parsed or is invalid
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for facade operations
pub type Result<T> = std::result::Result<T, Error>;
