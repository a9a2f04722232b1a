//! Lazy k-way merge of pre-sorted sequences
//!
//! Given N iterators that each yield items in ascending order, the merge
//! produces one iterator over all items in ascending order, pulling from the
//! inputs only as the consumer asks for more. Equal items are emitted in
//! input-index order.
//!
//! # Example
//!
//! ```rust
//! use linemerge_kmerge::{merge, merge_heap};
//!
//! let runs = vec![vec!["apple", "melon"], vec!["banana", "cherry"], vec![]];
//! let merged: Vec<&str> = merge(runs.clone()).collect();
//! assert_eq!(merged, ["apple", "banana", "cherry", "melon"]);
//!
//! // Same order, O(log N) selection
//! assert!(merge_heap(runs).eq(merged));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod frontier;
pub mod merge;
mod state;
pub mod try_merge;
pub mod validate;

// Re-export key types
pub use config::{FrontierKind, MergeConfig};
pub use error::{MergeError, Result};
pub use frontier::{AnyFrontier, Frontier, HeapFrontier, LinearFrontier};
pub use merge::{merge, merge_heap, merge_with_config, KWayMerge};
pub use try_merge::{try_merge, try_merge_with_config, TryKWayMerge};
pub use validate::{merge_validated, validate_sorted};
