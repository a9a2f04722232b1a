//! State shared by the infallible and fallible merges

use crate::config::defaults::PROGRESS_INTERVAL;
use crate::frontier::Frontier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing pulled yet
    Unprimed,
    /// Input `last` produced the previous item and still has to advance
    Running { last: usize },
    /// Every input is exhausted, or one of them failed
    Done,
}

/// Inputs, frontier and bookkeeping behind [`KWayMerge`](crate::KWayMerge)
/// and [`TryKWayMerge`](crate::TryKWayMerge)
///
/// The two iterators differ only in how an input's next item is read; the
/// caller hands that in as a closure.
#[derive(Debug)]
pub(crate) struct MergeCore<I, F> {
    inputs: Vec<I>,
    frontier: F,
    phase: Phase,
    emitted: u64,
    progress_interval: u64,
}

impl<I, F> MergeCore<I, F> {
    pub(crate) fn new(inputs: Vec<I>, frontier: F) -> Self {
        Self {
            inputs,
            frontier,
            phase: Phase::Unprimed,
            emitted: 0,
            progress_interval: PROGRESS_INTERVAL,
        }
    }

    pub(crate) fn set_progress_interval(&mut self, interval: u64) {
        self.progress_interval = interval;
    }

    pub(crate) fn fan_in(&self) -> usize {
        self.inputs.len()
    }

    pub(crate) fn emitted(&self) -> u64 {
        self.emitted
    }

    pub(crate) fn into_inputs(self) -> Vec<I> {
        self.inputs
    }

    pub(crate) fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Stop for good after an input failure
    pub(crate) fn abort(&mut self) {
        log::debug!("merge stopped by input error after {} items", self.emitted);
        self.phase = Phase::Done;
    }

    /// Bring the frontier up to date before choosing the next item
    ///
    /// Primes every input on the first call; afterwards pulls once from the
    /// input that supplied the previous item.
    pub(crate) fn refill<T, E, G>(&mut self, mut next: G) -> Result<(), E>
    where
        F: Frontier<T>,
        G: FnMut(&mut I) -> Option<Result<T, E>>,
    {
        match self.phase {
            Phase::Unprimed => {
                for index in 0..self.inputs.len() {
                    self.pull(index, &mut next)?;
                }
                log::debug!(
                    "merge primed: {} of {} inputs non-empty",
                    self.frontier.len(),
                    self.inputs.len()
                );
            }
            Phase::Running { last } => self.pull(last, &mut next)?,
            Phase::Done => {}
        }
        Ok(())
    }

    fn pull<T, E, G>(&mut self, index: usize, next: &mut G) -> Result<(), E>
    where
        F: Frontier<T>,
        G: FnMut(&mut I) -> Option<Result<T, E>>,
    {
        match self.inputs.get_mut(index).and_then(&mut *next) {
            Some(item) => self.frontier.insert(index, item?),
            None => log::trace!("merge input {index} exhausted"),
        }
        Ok(())
    }

    /// Take the smallest head off the frontier, or finish when none is left
    pub(crate) fn emit<T>(&mut self) -> Option<T>
    where
        F: Frontier<T>,
    {
        let Some((index, item)) = self.frontier.pop_min() else {
            self.phase = Phase::Done;
            log::debug!("merge finished after {} items", self.emitted);
            return None;
        };

        self.phase = Phase::Running { last: index };
        self.emitted += 1;
        if self.progress_interval != 0 && self.emitted % self.progress_interval == 0 {
            log::trace!("{} items merged", self.emitted);
        }
        Some(item)
    }
}
