//! Top-k most frequent values.
//!
//! Two passes: a hash-map count of every distinct value, then the
//! `(count, value)` pairs stream through the bounded heap ranked by count
//! (the [`Ranked`](physalia_core::Ranked) impl for pairs). O(n + d log k)
//! for d distinct values, O(d) space.

use std::collections::HashMap;
use std::hash::Hash;

use physalia_core::{PhysaliaError, Result};

use crate::topk::BoundedMinHeap;

/// The `k` most frequent values of `items`, in unspecified order.
///
/// Ties between equally frequent values are broken arbitrarily.
///
/// # Errors
///
/// Rejects `k < 1` and `k` greater than the number of distinct values.
///
/// # Example
///
/// ```
/// use physalia_select::top_k_frequent;
///
/// let mut frequent = top_k_frequent(&[1, 1, 1, 2, 2, 3], 2).unwrap();
/// frequent.sort_unstable();
/// assert_eq!(frequent, vec![1, 2]);
/// ```
pub fn top_k_frequent<T: Eq + Hash + Clone>(items: &[T], k: usize) -> Result<Vec<T>> {
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }

    let distinct = counts.len();
    if k < 1 || k > distinct {
        return Err(PhysaliaError::InvalidInput(format!(
            "k must be in [1, {distinct}] (distinct values), got {k}"
        )));
    }

    let mut heap = BoundedMinHeap::new(k);
    for (value, count) in counts {
        heap.push((count, value.clone()));
    }
    Ok(heap.into_vec().into_iter().map(|(_, v)| v).collect())
}
