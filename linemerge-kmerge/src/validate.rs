//! Opt-in sortedness check for merge inputs
//!
//! Validation materializes every input in memory, which defeats the point of
//! a streaming merge. It exists for debugging suspicious output and is never
//! part of [`merge`](crate::merge).

use crate::error::{MergeError, Result};
use crate::frontier::LinearFrontier;
use crate::merge::{merge, KWayMerge};
use std::time::Instant;

/// Collect every input and check it is non-decreasing
///
/// Returns the materialized inputs so they can still be merged.
pub fn validate_sorted<S, T>(inputs: S) -> Result<Vec<Vec<T>>>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
    T: Ord,
{
    let started = Instant::now();
    let mut collected = Vec::new();

    for (input, items) in inputs.into_iter().enumerate() {
        let items: Vec<T> = items.into_iter().collect();
        if let Some(position) = first_descent(&items) {
            log::debug!("input {input} out of order at item {position}");
            return Err(MergeError::OrderingViolation { input, position });
        }
        collected.push(items);
    }

    log::debug!(
        "validated {} inputs in {}ms",
        collected.len(),
        started.elapsed().as_millis()
    );
    Ok(collected)
}

/// Validate every input, then merge them
///
/// Nothing is emitted unless all inputs pass.
pub fn merge_validated<S, T>(
    inputs: S,
) -> Result<KWayMerge<std::vec::IntoIter<T>, LinearFrontier<T>>>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
    T: Ord,
{
    Ok(merge(validate_sorted(inputs)?))
}

/// Position of the first item smaller than the one before it
fn first_descent<T: Ord>(items: &[T]) -> Option<usize> {
    items
        .windows(2)
        .position(|pair| pair[1] < pair[0])
        .map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_inputs_pass() {
        let inputs = vec![vec![1, 1, 2], vec![], vec![0, 5]];
        let collected = validate_sorted(inputs.clone()).unwrap();
        assert_eq!(collected, inputs);
    }

    #[test]
    fn test_violation_reports_input_and_position() {
        let inputs = vec![vec![1, 2, 3], vec![4, 6, 5, 7]];
        assert_eq!(
            validate_sorted(inputs),
            Err(MergeError::OrderingViolation {
                input: 1,
                position: 2
            })
        );
    }

    #[test]
    fn test_merge_validated_aborts_before_output() {
        let result = merge_validated([vec!["b", "a"], vec!["c"]]);
        assert!(matches!(
            result,
            Err(MergeError::OrderingViolation {
                input: 0,
                position: 1
            })
        ));
    }

    #[test]
    fn test_merge_validated_merges() {
        let merged: Vec<&str> = merge_validated([vec!["a", "c"], vec!["b"]])
            .unwrap()
            .collect();
        assert_eq!(merged, ["a", "b", "c"]);
    }
}
