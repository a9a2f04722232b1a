//! Merge frontier: the current head of every active input
//!
//! A frontier only ever answers one question, "which input holds the
//! smallest head?". Ties always go to the lowest input index, so every
//! implementation produces the same sequence for the same inputs.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Storage for the head items of active inputs
pub trait Frontier<T> {
    /// Register `item` as the head of `input`
    ///
    /// Each input has at most one head in the frontier at a time.
    fn insert(&mut self, input: usize, item: T);

    /// Remove and return the minimal head together with its input index
    fn pop_min(&mut self) -> Option<(usize, T)>;

    /// Number of inputs currently holding a head
    fn len(&self) -> usize;

    /// Whether no input holds a head
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Frontier that scans every head on each selection
///
/// O(N) per item. Heads are kept in input order, so the first minimum found
/// is the one from the lowest-indexed input.
#[derive(Debug, Clone)]
pub struct LinearFrontier<T> {
    heads: Vec<(usize, T)>,
}

impl<T> LinearFrontier<T> {
    /// Create a frontier with room for `fan_in` inputs
    pub fn with_capacity(fan_in: usize) -> Self {
        Self {
            heads: Vec::with_capacity(fan_in),
        }
    }
}

impl<T> Default for LinearFrontier<T> {
    fn default() -> Self {
        Self { heads: Vec::new() }
    }
}

impl<T: Ord> Frontier<T> for LinearFrontier<T> {
    fn insert(&mut self, input: usize, item: T) {
        let at = self.heads.partition_point(|(i, _)| *i < input);
        self.heads.insert(at, (input, item));
    }

    fn pop_min(&mut self) -> Option<(usize, T)> {
        let mut best = 0;
        for (idx, (_, item)) in self.heads.iter().enumerate().skip(1) {
            if *item < self.heads[best].1 {
                best = idx;
            }
        }

        if self.heads.is_empty() {
            return None;
        }
        Some(self.heads.remove(best))
    }

    fn len(&self) -> usize {
        self.heads.len()
    }
}

/// Frontier backed by a binary min-heap
///
/// O(log N) per item; worthwhile for large fan-in.
#[derive(Debug, Clone)]
pub struct HeapFrontier<T> {
    heap: BinaryHeap<Reverse<HeapEntry<T>>>,
}

impl<T: Ord> HeapFrontier<T> {
    /// Create a frontier with room for `fan_in` inputs
    pub fn with_capacity(fan_in: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(fan_in),
        }
    }
}

impl<T: Ord> Default for HeapFrontier<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl<T: Ord> Frontier<T> for HeapFrontier<T> {
    fn insert(&mut self, input: usize, item: T) {
        self.heap.push(Reverse(HeapEntry { item, input }));
    }

    fn pop_min(&mut self) -> Option<(usize, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.input, entry.item))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Heap entry ordered by item, then by input index
#[derive(Debug, Clone)]
struct HeapEntry<T> {
    item: T,
    input: usize,
}

impl<T: Ord> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.item
            .cmp(&other.item)
            .then_with(|| self.input.cmp(&other.input))
    }
}

impl<T: Ord> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for HeapEntry<T> {}

/// Frontier chosen at runtime from [`FrontierKind`](crate::FrontierKind)
#[derive(Debug, Clone)]
pub enum AnyFrontier<T> {
    /// Linear scan
    Linear(LinearFrontier<T>),
    /// Binary heap
    Heap(HeapFrontier<T>),
}

impl<T: Ord> Frontier<T> for AnyFrontier<T> {
    fn insert(&mut self, input: usize, item: T) {
        match self {
            AnyFrontier::Linear(f) => f.insert(input, item),
            AnyFrontier::Heap(f) => f.insert(input, item),
        }
    }

    fn pop_min(&mut self) -> Option<(usize, T)> {
        match self {
            AnyFrontier::Linear(f) => f.pop_min(),
            AnyFrontier::Heap(f) => f.pop_min(),
        }
    }

    fn len(&self) -> usize {
        match self {
            AnyFrontier::Linear(f) => f.len(),
            AnyFrontier::Heap(f) => f.len(),
        }
    }
}
