//! Streaming building blocks for external sorting
//!
//! `linemerge` pairs a bounded-memory line scanner with a lazy k-way merge:
//! sort chunks that fit in memory, write each chunk to its own file, then
//! stream the files back through [`merge_files`] to get one sorted sequence
//! without ever holding more than a window per file.
//!
//! # Example
//!
//! ```rust
//! use linemerge::{merge_files, Config};
//! use std::fs;
//!
//! let dir = tempfile::tempdir()?;
//! let runs = [dir.path().join("0.txt"), dir.path().join("1.txt")];
//! fs::write(&runs[0], "apple\ncherry\n")?;
//! fs::write(&runs[1], "banana\ndate")?;
//!
//! let lines = merge_files(&runs, &Config::default())?
//!     .collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(lines, ["apple", "banana", "cherry", "date"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The scanner and merge crates are re-exported as [`scan`] and [`kmerge`].

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod files;

pub use linemerge_kmerge as kmerge;
pub use linemerge_scan as scan;

// Re-export key types
pub use config::Config;
pub use error::{Error, Result};
pub use files::{merge_files, merge_sources, FileMerge};
pub use linemerge_kmerge::{
    merge, merge_heap, merge_validated, try_merge, FrontierKind, KWayMerge, MergeConfig,
    MergeError, TryKWayMerge,
};
pub use linemerge_scan::{
    FileLineSource, IoErrorPolicy, LineScanner, ScanError, ScannerConfig, Terminator,
};
