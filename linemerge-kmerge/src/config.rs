//! Merge configuration

use crate::frontier::{AnyFrontier, HeapFrontier, LinearFrontier};
use serde::Deserialize;

/// Default configuration constants
pub mod defaults {
    /// Emit a progress log line every this many merged items
    pub const PROGRESS_INTERVAL: u64 = 100_000;
}

/// How the merge picks the smallest head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierKind {
    /// Scan every head, O(N) per item
    #[default]
    Linear,
    /// Binary heap, O(log N) per item
    Heap,
}

impl FrontierKind {
    /// Build an empty frontier of this kind
    pub fn build<T: Ord>(self, fan_in: usize) -> AnyFrontier<T> {
        match self {
            FrontierKind::Linear => AnyFrontier::Linear(LinearFrontier::with_capacity(fan_in)),
            FrontierKind::Heap => AnyFrontier::Heap(HeapFrontier::with_capacity(fan_in)),
        }
    }
}

/// Merge configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeConfig {
    /// Frontier strategy
    pub frontier: FrontierKind,
    /// Items between progress log lines; 0 disables them
    pub progress_interval: u64,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            frontier: FrontierKind::default(),
            progress_interval: defaults::PROGRESS_INTERVAL,
        }
    }
}
