//! Validated range-query facade over the Fenwick and segment tree engines.

use core::ops::{Add, Sub};

use physalia_core::{PhysaliaError, Result};

use crate::fenwick::FenwickTree;
use crate::segment::SegmentTree;

/// Which engine a [`RangeIndex`] runs on. Chosen at construction; there is
/// no runtime dispatch beyond this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Backend {
    /// Binary indexed tree. Smallest memory footprint (n + 1 nodes).
    Fenwick,
    /// Iterative segment tree. Power-of-two padded (up to 4n nodes).
    Segment,
}

#[derive(Debug, Clone)]
enum Engine<T> {
    Fenwick(FenwickTree<T>),
    Segment(SegmentTree<T>),
}

/// A mutable numeric sequence supporting point updates and range sums.
///
/// Every operation validates its indices and returns
/// [`PhysaliaError::InvalidInput`] on a bad argument, with no partial
/// mutation. A shadow copy of the current values backs `point_set` and
/// `get`, since the Fenwick layout stores only partial sums.
///
/// # Example
///
/// ```
/// use physalia_index::{Backend, RangeIndex};
///
/// let mut idx = RangeIndex::new(&[1i64, 3, 5, 7, 9, 11], Backend::Fenwick);
/// assert_eq!(idx.prefix_sum(5).unwrap(), 36);
/// assert_eq!(idx.range_sum(1, 3).unwrap(), 15);
///
/// idx.point_set(1, 10).unwrap();
/// assert_eq!(idx.range_sum(0, 2).unwrap(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct RangeIndex<T> {
    values: Vec<T>,
    engine: Engine<T>,
}

impl<T: Copy + Default + Add<Output = T> + Sub<Output = T>> RangeIndex<T> {
    /// Build an index over `values` with the given back-end.
    pub fn new(values: &[T], backend: Backend) -> Self {
        let engine = match backend {
            Backend::Fenwick => Engine::Fenwick(FenwickTree::from_slice(values)),
            Backend::Segment => Engine::Segment(SegmentTree::from_slice(values)),
        };
        Self {
            values: values.to_vec(),
            engine,
        }
    }

    /// The back-end this index was constructed with.
    pub fn backend(&self) -> Backend {
        match self.engine {
            Engine::Fenwick(_) => Backend::Fenwick,
            Engine::Segment(_) => Backend::Segment,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i >= self.values.len() {
            return Err(PhysaliaError::InvalidInput(format!(
                "index {} out of range for length {}",
                i,
                self.values.len()
            )));
        }
        Ok(())
    }

    /// Current value at index `i`.
    pub fn get(&self, i: usize) -> Result<T> {
        self.check_index(i)?;
        Ok(self.values[i])
    }

    /// Replace the value at index `i` with `v`.
    pub fn point_set(&mut self, i: usize, v: T) -> Result<()> {
        self.check_index(i)?;
        let delta = v - self.values[i];
        self.apply_delta(i, delta);
        self.values[i] = v;
        Ok(())
    }

    /// Add `delta` to the value at index `i`.
    pub fn point_add(&mut self, i: usize, delta: T) -> Result<()> {
        self.check_index(i)?;
        self.apply_delta(i, delta);
        let current = self.values[i];
        self.values[i] = current + delta;
        Ok(())
    }

    fn apply_delta(&mut self, i: usize, delta: T) {
        match &mut self.engine {
            Engine::Fenwick(ft) => ft.update(i, delta),
            Engine::Segment(st) => st.update(i, delta),
        }
    }

    /// Sum of values in `[0, i]` (inclusive).
    pub fn prefix_sum(&self, i: usize) -> Result<T> {
        self.check_index(i)?;
        Ok(match &self.engine {
            Engine::Fenwick(ft) => ft.prefix_sum(i),
            Engine::Segment(st) => st.prefix_sum(i),
        })
    }

    /// Sum of values in `[l, r]` (inclusive).
    pub fn range_sum(&self, l: usize, r: usize) -> Result<T> {
        if l > r {
            return Err(PhysaliaError::InvalidInput(format!(
                "range start {l} exceeds range end {r}"
            )));
        }
        self.check_index(r)?;
        Ok(match &self.engine {
            Engine::Fenwick(ft) => ft.range_sum(l, r),
            Engine::Segment(st) => st.range_sum(l, r),
        })
    }
}
