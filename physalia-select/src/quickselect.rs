//! Randomized quickselect: k-th order statistic in expected O(n).
//!
//! The heap path in [`topk`](crate::topk) is O(n log k); when only a single
//! order statistic is wanted, a randomized partial partition does less
//! work. Pivots come from a caller-supplied [`Xorshift64`], so a fixed seed
//! gives a fully deterministic run.

use physalia_core::{PhysaliaError, Result, Xorshift64};

/// The k-th largest element of `items` (k = 1 is the maximum), by
/// randomized-pivot partial partitioning of a scratch copy.
///
/// # Errors
///
/// Rejects `k < 1` and `k > items.len()`.
pub fn quickselect_kth_largest<T: Ord + Clone>(
    items: &[T],
    k: usize,
    rng: &mut Xorshift64,
) -> Result<T> {
    let n = items.len();
    if k < 1 || k > n {
        return Err(PhysaliaError::InvalidInput(format!(
            "k must be in [1, {n}], got {k}"
        )));
    }

    let mut scratch = items.to_vec();
    // k-th largest is the (n - k)-th smallest, 0-based.
    let target = n - k;
    let mut lo = 0usize;
    let mut hi = n - 1;

    loop {
        if lo == hi {
            return Ok(scratch[lo].clone());
        }
        let pivot = lo + rng.next_usize(hi - lo + 1);
        let p = partition(&mut scratch, lo, hi, pivot);
        match target.cmp(&p) {
            std::cmp::Ordering::Equal => return Ok(scratch[p].clone()),
            std::cmp::Ordering::Less => hi = p - 1,
            std::cmp::Ordering::Greater => lo = p + 1,
        }
    }
}

/// Lomuto partition of `slice[lo..=hi]` around the value at `pivot`;
/// returns the pivot's final position.
fn partition<T: Ord>(slice: &mut [T], lo: usize, hi: usize, pivot: usize) -> usize {
    slice.swap(pivot, hi);
    let mut store = lo;
    for i in lo..hi {
        if slice[i] < slice[hi] {
            slice.swap(i, store);
            store += 1;
        }
    }
    slice.swap(store, hi);
    store
}
