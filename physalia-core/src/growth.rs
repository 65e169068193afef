//! Amortized growth policy for push-heavy buffers.
//!
//! Enumerator stacks and selection heaps grow one element at a time but are
//! often pushed to millions of times. Doubling with a small floor keeps the
//! number of reallocations logarithmic in the final size.

/// Minimum capacity handed out for a non-empty buffer.
const MIN_CAPACITY: usize = 4;

/// Recommended new capacity for a buffer currently sized `current` that
/// needs to hold at least `needed` elements.
///
/// Doubles the current capacity (with a floor of 4) and never returns less
/// than `needed`.
pub fn recommended_capacity(current: usize, needed: usize) -> usize {
    let doubled = current.saturating_mul(2).max(MIN_CAPACITY);
    doubled.max(needed)
}
