//! K-way merge over fallible inputs
//!
//! File-backed inputs yield `Result<T, E>`. [`TryKWayMerge`] merges the `Ok`
//! items exactly like [`KWayMerge`](crate::KWayMerge) and hands the first
//! error it meets to the consumer, after which it yields nothing more.

use crate::config::MergeConfig;
use crate::frontier::{AnyFrontier, Frontier, LinearFrontier};
use crate::state::MergeCore;

/// Merge of inputs producing `Result<T, E>`
#[derive(Debug)]
pub struct TryKWayMerge<I, F> {
    core: MergeCore<I, F>,
}

impl<I, T, E, F> TryKWayMerge<I, F>
where
    I: Iterator<Item = Result<T, E>>,
    T: Ord,
    F: Frontier<T>,
{
    /// Create a merge over `inputs` using an explicit frontier
    pub fn with_frontier<S>(inputs: S, frontier: F) -> Self
    where
        S: IntoIterator,
        S::Item: IntoIterator<IntoIter = I>,
    {
        let inputs = inputs.into_iter().map(IntoIterator::into_iter).collect();
        Self {
            core: MergeCore::new(inputs, frontier),
        }
    }

    /// Log progress every `interval` items; 0 disables it
    pub fn progress_interval(mut self, interval: u64) -> Self {
        self.core.set_progress_interval(interval);
        self
    }

    /// Number of inputs
    pub fn fan_in(&self) -> usize {
        self.core.fan_in()
    }

    /// Number of items emitted so far
    pub fn emitted(&self) -> u64 {
        self.core.emitted()
    }

    /// Give back the inputs, consumed as far as the merge got
    pub fn into_inputs(self) -> Vec<I> {
        self.core.into_inputs()
    }
}

impl<I, T, E, F> Iterator for TryKWayMerge<I, F>
where
    I: Iterator<Item = Result<T, E>>,
    T: Ord,
    F: Frontier<T>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.core.is_done() {
            return None;
        }

        if let Err(e) = self.core.refill(Iterator::next) {
            self.core.abort();
            return Some(Err(e));
        }
        self.core.emit().map(Ok)
    }
}

impl<I, T, E, F> std::iter::FusedIterator for TryKWayMerge<I, F>
where
    I: Iterator<Item = Result<T, E>>,
    T: Ord,
    F: Frontier<T>,
{
}

/// Merge fallible sorted inputs with the linear-scan frontier
pub fn try_merge<S, I, T, E>(inputs: S) -> TryKWayMerge<I, LinearFrontier<T>>
where
    S: IntoIterator,
    S::Item: IntoIterator<IntoIter = I>,
    I: Iterator<Item = Result<T, E>>,
    T: Ord,
{
    TryKWayMerge::with_frontier(inputs, LinearFrontier::default())
}

/// Merge fallible sorted inputs with the frontier chosen by `config`
pub fn try_merge_with_config<S, I, T, E>(
    inputs: S,
    config: &MergeConfig,
) -> TryKWayMerge<I, AnyFrontier<T>>
where
    S: IntoIterator,
    S::Item: IntoIterator<IntoIter = I>,
    I: Iterator<Item = Result<T, E>>,
    T: Ord,
{
    let inputs: Vec<I> = inputs.into_iter().map(IntoIterator::into_iter).collect();
    let frontier = config.frontier.build(inputs.len());
    TryKWayMerge::with_frontier(inputs, frontier).progress_interval(config.progress_interval)
}
