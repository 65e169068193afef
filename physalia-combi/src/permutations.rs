//! Lazy enumeration of all permutations of a slice.
//!
//! Classic visited-bitmap backtracking on an explicit stack: each frame
//! scans for the next unused element, marks it, and descends; exhausted
//! frames unmark on the way out. Output order is lexicographic over
//! element indices.

use physalia_core::growth::recommended_capacity;
use physalia_core::{PhysaliaError, Result};

/// Iterator over all `n!` permutations of a slice.
///
/// The visited set is a `u64` bitmap, so inputs are limited to 64 elements;
/// [`Permutations::new`] rejects longer slices. (An enumeration of 65!
/// outputs would not terminate anyway.)
///
/// # Example
///
/// ```
/// use physalia_combi::Permutations;
///
/// let perms: Vec<Vec<i32>> = Permutations::new(&[1, 2, 3]).unwrap().collect();
/// assert_eq!(perms.len(), 6);
/// assert_eq!(perms[0], vec![1, 2, 3]);
/// assert_eq!(perms[5], vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    elements: Vec<T>,
    /// Chosen element indices, in order.
    path: Vec<usize>,
    /// Bit `i` set while element `i` is on the path.
    used: u64,
    /// One cursor per open frame: the next candidate index to try there.
    stack: Vec<usize>,
    started: bool,
}

impl<T: Clone> Permutations<T> {
    /// Enumerator over all permutations of `elements`.
    ///
    /// # Errors
    ///
    /// Rejects inputs longer than 64 elements (visited-bitmap width).
    pub fn new(elements: &[T]) -> Result<Self> {
        if elements.len() > 64 {
            return Err(PhysaliaError::InvalidInput(format!(
                "at most 64 elements supported, got {}",
                elements.len()
            )));
        }
        let n = elements.len();
        let cap = recommended_capacity(0, n + 1);
        let mut stack = Vec::with_capacity(cap);
        stack.push(0);
        Ok(Self {
            elements: elements.to_vec(),
            path: Vec::with_capacity(cap),
            used: 0,
            stack,
            started: false,
        })
    }

    fn materialize(&self) -> Vec<T> {
        self.path.iter().map(|&i| self.elements[i].clone()).collect()
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let n = self.elements.len();
        if !self.started {
            self.started = true;
            if n == 0 {
                // 0! = 1: the single empty permutation.
                self.stack.clear();
                return Some(Vec::new());
            }
        }
        loop {
            let cursor = self.stack.last_mut()?;
            // Next unused candidate at or after the cursor.
            let mut i = *cursor;
            while i < n && self.used & (1 << i) != 0 {
                i += 1;
            }
            if i < n {
                *cursor = i + 1;
                self.used |= 1 << i;
                self.path.push(i);
                if self.path.len() == n {
                    let out = self.materialize();
                    // Full path has no children; undo immediately.
                    self.used &= !(1 << i);
                    self.path.pop();
                    return Some(out);
                }
                self.stack.push(0);
            } else {
                self.stack.pop();
                if !self.stack.is_empty() {
                    let undone = self
                        .path
                        .pop()
                        .expect("non-root frame always has a chosen element");
                    self.used &= !(1 << undone);
                }
            }
        }
    }
}

impl<T: Clone> std::iter::FusedIterator for Permutations<T> {}
