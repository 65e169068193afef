//! Bounded-k selection via a capped min-heap.
//!
//! The heap holds at most `k` entries keyed by [`Ranked::rank`]. Streaming
//! an input through it keeps the k largest-ranked items seen so far: once
//! full, a new item only enters by evicting the smallest-of-the-best at the
//! root. O(n log k) time, O(k) space.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use physalia_core::{PhysaliaError, Ranked, Result};

/// Heap entry; the rank is computed once at push time.
struct Entry<T: Ranked> {
    rank: T::Rank,
    item: T,
}

impl<T: Ranked + Clone> Clone for Entry<T> {
    fn clone(&self) -> Self {
        Self {
            rank: self.rank,
            item: self.item.clone(),
        }
    }
}

impl<T: Ranked> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl<T: Ranked> Eq for Entry<T> {}

impl<T: Ranked> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ranked> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

/// A min-heap that never grows past its capacity.
///
/// Pushing into a full heap either evicts the current minimum (when the new
/// item out-ranks it) or drops the new item. The retained set is therefore
/// always the capacity-many largest-ranked items pushed so far; ties are
/// broken arbitrarily.
pub struct BoundedMinHeap<T: Ranked> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    capacity: usize,
}

impl<T: Ranked + Clone> Clone for BoundedMinHeap<T> {
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
            capacity: self.capacity,
        }
    }
}

impl<T: Ranked> std::fmt::Debug for BoundedMinHeap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedMinHeap")
            .field("len", &self.heap.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T: Ranked> BoundedMinHeap<T> {
    /// A heap retaining at most `capacity` items. Capacity zero retains
    /// nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            capacity,
        }
    }

    /// Offer an item; keeps the capacity-many largest seen.
    pub fn push(&mut self, item: T) {
        let rank = item.rank();
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(Entry { rank, item }));
        } else if let Some(Reverse(min)) = self.heap.peek() {
            if rank > min.rank {
                self.heap.pop();
                self.heap.push(Reverse(Entry { rank, item }));
            }
        }
    }

    /// The smallest retained item, i.e. the k-th largest seen once the heap
    /// is full.
    pub fn peek_min(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(e)| &e.item)
    }

    /// Number of retained items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether nothing has been retained.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The construction-time capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drain into an unordered vector.
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_iter().map(|Reverse(e)| e.item).collect()
    }
}

fn check_k(k: usize, n: usize) -> Result<()> {
    if k < 1 || k > n {
        return Err(PhysaliaError::InvalidInput(format!(
            "k must be in [1, {n}], got {k}"
        )));
    }
    Ok(())
}

/// The `k` largest-ranked items of `items`, in unspecified order.
///
/// # Errors
///
/// Rejects `k < 1` and `k > items.len()`.
///
/// # Example
///
/// ```
/// use physalia_select::top_k;
///
/// let mut best = top_k(&[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5], 5).unwrap();
/// best.sort_unstable_by(|a, b| b.cmp(a));
/// assert_eq!(best, vec![9, 6, 5, 5, 5]);
/// ```
pub fn top_k<T: Ranked + Clone>(items: &[T], k: usize) -> Result<Vec<T>> {
    check_k(k, items.len())?;
    let mut heap = BoundedMinHeap::new(k);
    for item in items {
        heap.push(item.clone());
    }
    Ok(heap.into_vec())
}

/// The k-th largest-ranked item of `items` (k = 1 is the maximum).
///
/// # Errors
///
/// Rejects `k < 1` and `k > items.len()`.
pub fn kth_largest<T: Ranked + Clone>(items: &[T], k: usize) -> Result<T> {
    check_k(k, items.len())?;
    let mut heap = BoundedMinHeap::new(k);
    for item in items {
        heap.push(item.clone());
    }
    let min = heap
        .peek_min()
        .cloned()
        .expect("heap is non-empty after streaming k <= n items");
    Ok(min)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn top_k_is_the_k_largest_multiset(
            items in proptest::collection::vec(-100i64..100, 1..64),
            k_seed in 0usize..64,
        ) {
            let k = k_seed % items.len() + 1;
            let mut got = top_k(&items, k).unwrap();
            got.sort_unstable();

            let mut sorted = items.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            let mut expect: Vec<i64> = sorted[..k].to_vec();
            expect.sort_unstable();

            prop_assert_eq!(got, expect);
        }

        #[test]
        fn kth_largest_matches_sorting(
            items in proptest::collection::vec(-100i64..100, 1..64),
            k_seed in 0usize..64,
        ) {
            let k = k_seed % items.len() + 1;
            let mut sorted = items.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            prop_assert_eq!(kth_largest(&items, k).unwrap(), sorted[k - 1]);
        }

        #[test]
        fn no_outsider_beats_an_insider(
            items in proptest::collection::vec(-100i64..100, 2..64),
        ) {
            let k = items.len() / 2;
            prop_assume!(k >= 1);
            let inside = top_k(&items, k).unwrap();
            let inside_min = *inside.iter().min().unwrap();

            // Count multiplicities so duplicates inside/outside line up.
            let mut remaining = items.clone();
            for v in &inside {
                let pos = remaining.iter().position(|x| x == v).unwrap();
                remaining.swap_remove(pos);
            }
            for outsider in remaining {
                prop_assert!(outsider <= inside_min);
            }
        }
    }
}
