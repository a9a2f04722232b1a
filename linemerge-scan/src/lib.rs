//! Bounded-memory line scanning for external sorting
//!
//! This crate reads arbitrarily large text files line by line through a
//! fixed two-page window. Resident memory is O(page size) plus the length of
//! the longest line, no matter how large the file is.
//!
//! # Architecture
//!
//! - [`Window`]: fixed 2×P byte arena that slides one page at a time
//! - [`LineAccumulator`]: growable buffer keeping line bytes across slides
//! - [`LineScanner`]: lazy iterator of lines over any `Read + Seek` stream
//! - [`FileLineSource`]: opens a fresh scanner per pass over a file
//!
//! Terminators are always explicit ([`Terminator`]); lines are decoded as
//! UTF-8.

#![warn(missing_docs)]

pub mod accumulator;
pub mod config;
pub mod error;
pub mod scanner;
pub mod source;
pub mod terminator;
pub mod window;

// Re-export key types
pub use accumulator::LineAccumulator;
pub use config::{IoErrorPolicy, ScannerConfig, ScannerConfigBuilder};
pub use error::{Result, ScanError};
pub use scanner::LineScanner;
pub use source::{FileLineSource, Pass};
pub use terminator::Terminator;
pub use window::Window;
