//! Merge error types

use thiserror::Error;

/// Errors raised by the merge diagnostics
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// An input was not sorted ascending
    #[error("input {input} is out of order at item {position}")]
    OrderingViolation {
        /// Index of the offending input
        input: usize,
        /// 0-based position of the first item smaller than its predecessor
        position: usize,
    },
}

/// Result type for merge operations
pub type Result<T> = std::result::Result<T, MergeError>;
