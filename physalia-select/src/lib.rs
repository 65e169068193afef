//! Bounded-k selection from unordered input.
//!
//! - [`top_k`] — the k largest items, O(n log k) time, O(k) space
//! - [`kth_largest`] — a single order statistic via the same stream
//! - [`top_k_frequent`] — the k most frequent values
//! - [`quickselect_kth_largest`] — expected-O(n) alternative for a single
//!   statistic, deterministic under a seeded RNG
//! - [`BoundedMinHeap`] — the underlying capped heap, usable directly
//!
//! Selection order is defined by [`physalia_core::Ranked`]: bare integers
//! rank as themselves, `(count, value)` pairs rank by count.

pub mod frequency;
pub mod quickselect;
pub mod topk;

pub use frequency::top_k_frequent;
pub use quickselect::quickselect_kth_largest;
pub use topk::{kth_largest, top_k, BoundedMinHeap};
