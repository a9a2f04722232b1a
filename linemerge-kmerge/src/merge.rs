//! Lazy k-way merge of sorted iterators
//!
//! Inputs are primed on the first call to `next`, and after that each
//! emitted item costs exactly one pull from exactly one input: the one that
//! supplied the previous item. That pull is deferred until the following
//! request, so an input is never read more than one item ahead of what the
//! consumer has taken.

use crate::config::{FrontierKind, MergeConfig};
use crate::frontier::{AnyFrontier, Frontier, HeapFrontier, LinearFrontier};
use crate::state::MergeCore;
use std::convert::Infallible;

/// Iterator yielding the items of several sorted inputs in ascending order
///
/// Equal items are emitted in ascending input-index order. Inputs are
/// assumed to be sorted; unsorted inputs produce unsorted output rather than
/// an error. The merge never closes its inputs: callers who need them
/// afterwards either pass `&mut` iterators or recover them with
/// [`into_inputs`](Self::into_inputs).
#[derive(Debug)]
pub struct KWayMerge<I, F> {
    core: MergeCore<I, F>,
}

impl<I, F> KWayMerge<I, F>
where
    I: Iterator,
    I::Item: Ord,
    F: Frontier<I::Item>,
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

impl<I, F> Iterator for KWayMerge<I, F>
where
    I: Iterator,
    I::Item: Ord,
    F: Frontier<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.core.is_done() {
            return None;
        }

        self.core
            .refill(|input| input.next().map(Ok::<_, Infallible>))
            .unwrap_or_else(|never| match never {});
        self.core.emit()
    }
}

impl<I, F> std::iter::FusedIterator for KWayMerge<I, F>
where
    I: Iterator,
    I::Item: Ord,
    F: Frontier<I::Item>,
{
}

/// Merge sorted inputs with the linear-scan frontier
///
/// ```rust
/// use linemerge_kmerge::merge;
///
/// let merged: Vec<i32> = merge([vec![1, 3, 5], vec![2, 4, 6]]).collect();
/// assert_eq!(merged, [1, 2, 3, 4, 5, 6]);
/// ```
pub fn merge<S, I>(inputs: S) -> KWayMerge<I, LinearFrontier<I::Item>>
where
    S: IntoIterator,
    S::Item: IntoIterator<IntoIter = I>,
    I: Iterator,
    I::Item: Ord,
{
    KWayMerge::with_frontier(inputs, LinearFrontier::default())
}

/// Merge sorted inputs with the binary-heap frontier
pub fn merge_heap<S, I>(inputs: S) -> KWayMerge<I, HeapFrontier<I::Item>>
where
    S: IntoIterator,
    S::Item: IntoIterator<IntoIter = I>,
    I: Iterator,
    I::Item: Ord,
{
    KWayMerge::with_frontier(inputs, HeapFrontier::default())
}

/// Merge sorted inputs with the frontier and logging chosen by `config`
pub fn merge_with_config<S, I>(inputs: S, config: &MergeConfig) -> KWayMerge<I, AnyFrontier<I::Item>>
where
    S: IntoIterator,
    S::Item: IntoIterator<IntoIter = I>,
    I: Iterator,
    I::Item: Ord,
{
    let inputs: Vec<I> = inputs.into_iter().map(IntoIterator::into_iter).collect();
    let frontier = config.frontier.build(inputs.len());
    KWayMerge::with_frontier(inputs, frontier).progress_interval(config.progress_interval)
}

impl<I> KWayMerge<I, AnyFrontier<<I as Iterator>::Item>>
where
    I: Iterator,
    I::Item: Ord,
{
    /// Create a merge with the given frontier strategy
    pub fn with_kind<S>(inputs: S, kind: FrontierKind) -> Self
    where
        S: IntoIterator,
        S::Item: IntoIterator<IntoIter = I>,
    {
        merge_with_config(
            inputs,
            &MergeConfig {
                frontier: kind,
                ..MergeConfig::default()
            },
        )
    }
}
