//! Range-query indexes over mutable numeric sequences.
//!
//! Supports prefix sums, range sums, and point updates in O(log n) through
//! two interchangeable engines:
//!
//! - [`FenwickTree`] — binary indexed tree, n + 1 nodes
//! - [`SegmentTree`] — iterative heap-shaped segment tree
//! - [`RangeIndex`] — validated facade over either, chosen via [`Backend`]
//!
//! The raw trees panic on out-of-range indices (documented on each method);
//! the facade validates everything and returns `Result` instead.
//!
//! # Example
//!
//! ```
//! use physalia_index::{Backend, RangeIndex};
//!
//! let mut idx = RangeIndex::new(&[2i64, 4, 6], Backend::Segment);
//! idx.point_add(0, 1).unwrap();
//! assert_eq!(idx.range_sum(0, 2).unwrap(), 13);
//! ```

pub mod fenwick;
pub mod range_index;
pub mod segment;

pub use fenwick::FenwickTree;
pub use range_index::{Backend, RangeIndex};
pub use segment::SegmentTree;
