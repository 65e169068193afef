//! Lazy enumeration of all candidate multisets summing to a target.
//!
//! Candidates are sorted ascending at construction; each frame scans
//! candidates from its start index and may reuse the one it just chose
//! (the child frame starts at the same index, not the next). Because the
//! scan is ascending, the first candidate exceeding the remaining target
//! ends the frame — the pruning that keeps dead branches short.
//!
//! Recursion depth would be `target / min(candidates)`, unbounded by the
//! input length, so the walk runs on an explicit frame stack.

use physalia_core::growth::recommended_capacity;
use physalia_core::{PhysaliaError, Result};

/// Iterator over all multisets of candidates summing exactly to a target.
///
/// Each output is ascending within itself, and outputs follow DFS order
/// over the sorted candidates. Every qualifying multiset appears exactly
/// once.
///
/// # Example
///
/// ```
/// use physalia_combi::CombinationSum;
///
/// let sums: Vec<Vec<i64>> = CombinationSum::new(&[2, 3, 6, 7], 7).unwrap().collect();
/// assert_eq!(sums, vec![vec![2, 2, 3], vec![7]]);
/// ```
#[derive(Debug, Clone)]
pub struct CombinationSum {
    /// Sorted ascending, distinct, all positive.
    candidates: Vec<i64>,
    /// Chosen candidate indices (non-decreasing).
    path: Vec<usize>,
    remaining: i64,
    stack: Vec<usize>,
    started: bool,
}

impl CombinationSum {
    /// Enumerator over all multisets from `candidates` summing to `target`.
    ///
    /// # Errors
    ///
    /// Rejects a negative target, candidates that are zero or negative
    /// (reuse would never terminate), duplicate candidates, and an empty
    /// candidate list with a nonzero target.
    pub fn new(candidates: &[i64], target: i64) -> Result<Self> {
        if target < 0 {
            return Err(PhysaliaError::InvalidInput(format!(
                "target must be non-negative, got {target}"
            )));
        }
        if candidates.is_empty() && target != 0 {
            return Err(PhysaliaError::InvalidInput(
                "no candidates to sum toward a nonzero target".into(),
            ));
        }
        if let Some(&bad) = candidates.iter().find(|&&c| c <= 0) {
            return Err(PhysaliaError::InvalidInput(format!(
                "candidates must be positive, got {bad}"
            )));
        }
        let mut sorted = candidates.to_vec();
        sorted.sort_unstable();
        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return Err(PhysaliaError::InvalidInput(
                "candidates must be distinct".into(),
            ));
        }

        // Depth is bounded by target / smallest candidate.
        let depth = match sorted.first() {
            Some(&min) => (target / min).min(1 << 16) as usize + 1,
            None => 1,
        };
        let cap = recommended_capacity(0, depth);
        let mut stack = Vec::with_capacity(cap.min(1 << 16));
        stack.push(0);
        Ok(Self {
            candidates: sorted,
            path: Vec::new(),
            remaining: target,
            stack,
            started: false,
        })
    }

    fn materialize(&self) -> Vec<i64> {
        self.path.iter().map(|&i| self.candidates[i]).collect()
    }
}

impl Iterator for CombinationSum {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Vec<i64>> {
        if !self.started {
            self.started = true;
            if self.remaining == 0 {
                // The empty multiset is the only one summing to zero.
                self.stack.clear();
                return Some(Vec::new());
            }
        }
        let n = self.candidates.len();
        loop {
            let cursor = self.stack.last_mut()?;
            let i = *cursor;
            if i < n && self.candidates[i] <= self.remaining {
                *cursor = i + 1;
                self.path.push(i);
                self.remaining -= self.candidates[i];
                if self.remaining == 0 {
                    let out = self.materialize();
                    self.remaining += self.candidates[i];
                    self.path.pop();
                    return Some(out);
                }
                // Child frame starts at `i`, permitting reuse.
                self.stack.push(i);
            } else {
                // Ascending sort: every later candidate overshoots too.
                self.stack.pop();
                if !self.stack.is_empty() {
                    let undone = self
                        .path
                        .pop()
                        .expect("non-root frame always has a chosen candidate");
                    self.remaining += self.candidates[undone];
                }
            }
        }
    }
}

impl std::iter::FusedIterator for CombinationSum {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_scenario() {
        let sums: Vec<Vec<i64>> = CombinationSum::new(&[2, 3, 6, 7], 7).unwrap().collect();
        let as_sets: HashSet<Vec<i64>> = sums.into_iter().collect();
        let expected: HashSet<Vec<i64>> =
            [vec![2, 2, 3], vec![7]].into_iter().collect();
        assert_eq!(as_sets, expected);
    }

    #[test]
    fn every_output_sums_to_target() {
        for combo in CombinationSum::new(&[2, 3, 5], 11).unwrap() {
            assert_eq!(combo.iter().sum::<i64>(), 11);
        }
    }

    #[test]
    fn reuse_of_a_single_candidate() {
        let sums: Vec<Vec<i64>> = CombinationSum::new(&[3], 9).unwrap().collect();
        assert_eq!(sums, vec![vec![3, 3, 3]]);
    }

    #[test]
    fn unreachable_target_yields_nothing() {
        let sums: Vec<Vec<i64>> = CombinationSum::new(&[4, 6], 7).unwrap().collect();
        assert!(sums.is_empty());
    }

    #[test]
    fn zero_target_yields_empty_multiset() {
        let sums: Vec<Vec<i64>> = CombinationSum::new(&[2, 3], 0).unwrap().collect();
        assert_eq!(sums, vec![Vec::<i64>::new()]);
    }

    #[test]
    fn unsorted_input_is_normalized() {
        let sums: Vec<Vec<i64>> = CombinationSum::new(&[7, 2, 6, 3], 7).unwrap().collect();
        let as_sets: HashSet<Vec<i64>> = sums.into_iter().collect();
        assert!(as_sets.contains(&vec![2, 2, 3]));
        assert!(as_sets.contains(&vec![7]));
    }

    #[test]
    fn outputs_are_distinct_multisets() {
        let sums: Vec<Vec<i64>> = CombinationSum::new(&[2, 3, 5], 10).unwrap().collect();
        let distinct: HashSet<Vec<i64>> = sums.iter().cloned().collect();
        assert_eq!(distinct.len(), sums.len());
    }

    #[test]
    fn invalid_inputs_rejected() {
        assert!(CombinationSum::new(&[2, 3], -1).is_err());
        assert!(CombinationSum::new(&[0, 3], 5).is_err());
        assert!(CombinationSum::new(&[-2, 3], 5).is_err());
        assert!(CombinationSum::new(&[2, 2, 3], 5).is_err());
        assert!(CombinationSum::new(&[], 5).is_err());
        // Empty candidates with a zero target is the trivial sequence.
        assert_eq!(CombinationSum::new(&[], 0).unwrap().count(), 1);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Oracle: recursive enumeration of qualifying multisets.
    fn brute_force(candidates: &[i64], target: i64) -> HashSet<Vec<i64>> {
        fn go(
            cands: &[i64],
            start: usize,
            remaining: i64,
            path: &mut Vec<i64>,
            out: &mut HashSet<Vec<i64>>,
        ) {
            if remaining == 0 {
                out.insert(path.clone());
                return;
            }
            for i in start..cands.len() {
                if cands[i] > remaining {
                    break;
                }
                path.push(cands[i]);
                go(cands, i, remaining - cands[i], path, out);
                path.pop();
            }
        }
        let mut sorted = candidates.to_vec();
        sorted.sort_unstable();
        let mut out = HashSet::new();
        go(&sorted, 0, target, &mut Vec::new(), &mut out);
        out
    }

    fn distinct_candidates() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::hash_set(1i64..12, 1..5)
            .prop_map(|s| s.into_iter().collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn matches_recursive_oracle(
            candidates in distinct_candidates(),
            target in 0i64..30,
        ) {
            let got: HashSet<Vec<i64>> =
                CombinationSum::new(&candidates, target).unwrap().collect();
            prop_assert_eq!(got, brute_force(&candidates, target));
        }
    }
}
