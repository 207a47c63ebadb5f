//! Sequence invariants for A005243.
//!
//! | Property | Description |
//! |----------|-------------|
//! | SeedTerms | The sequence starts `1, 2` |
//! | StrictlyIncreasing | `a_k > a_{k-1}` for every k >= 2 |
//! | Representable | `a_k` (k >= 3) is a sum of >= 2 consecutive terms of `a_1..a_{k-1}` |
//! | Minimal | No such sum lies strictly between `a_{k-1}` and `a_k` |

use std::collections::HashMap;

use crate::counterexample::{Counterexample, StateSnapshot};
use crate::property::{PropertyChecker, PropertyResult};
use crate::{FIRST_TERM, SECOND_TERM};

/// Number of terms shown before the failing position in a counterexample.
const WINDOW_TERMS_MAX: usize = 6;

/// Access to a term list for property checking.
pub trait SequenceProperties {
    /// Terms in order, `terms()[0]` being `a_1`.
    fn terms(&self) -> &[u64];
}

impl SequenceProperties for [u64] {
    fn terms(&self) -> &[u64] {
        self
    }
}

impl SequenceProperties for Vec<u64> {
    fn terms(&self) -> &[u64] {
        self.as_slice()
    }
}

/// Property checker for generated sequences.
pub struct SequencePropertyChecker<'a, T: SequenceProperties + ?Sized> {
    sequence: &'a T,
    terms_count: Option<u64>,
}

/// Every run-sum of >= 2 consecutive terms that does not exceed the
/// largest term, keyed by value, with the smallest 0-based end index
/// producing it.
fn run_sums_by_earliest_end(terms: &[u64]) -> HashMap<u64, usize> {
    let mut sums: HashMap<u64, usize> = HashMap::new();
    let cap = match terms.iter().max() {
        Some(&max) => max,
        None => return sums,
    };

    for end in 1..terms.len() {
        let mut sum = terms[end];
        for start in (0..end).rev() {
            sum = match sum.checked_add(terms[start]) {
                Some(s) if s <= cap => s,
                _ => break,
            };
            sums.entry(sum).or_insert(end);
        }
    }

    sums
}

impl<'a, T: SequenceProperties + ?Sized> SequencePropertyChecker<'a, T> {
    /// Create a new checker for the given sequence.
    #[must_use]
    pub fn new(sequence: &'a T) -> Self {
        Self {
            sequence,
            terms_count: None,
        }
    }

    /// Record the requested term count so counterexamples can name it.
    #[must_use]
    pub fn with_terms_count(mut self, terms_count: u64) -> Self {
        self.terms_count = Some(terms_count);
        self
    }

    fn counterexample(
        &self,
        position: usize,
        description: String,
        extra: (String, String),
    ) -> Counterexample {
        let terms = self.sequence.terms();
        let mut ce = match self.terms_count {
            Some(count) => Counterexample::with_terms_count(count),
            None => Counterexample::new(),
        };
        let end = position.min(terms.len());
        let start = end.saturating_sub(WINDOW_TERMS_MAX + 1);
        ce.add_state(StateSnapshot {
            step: position as u64,
            description,
            variables: vec![
                (
                    format!("a[{}..={}]", start + 1, end),
                    format!("{:?}", &terms[start..end]),
                ),
                extra,
            ],
        });
        ce
    }

    fn check_seed_terms(&self) -> PropertyResult {
        let terms = self.sequence.terms();
        for (position, expected) in [(1, FIRST_TERM), (2, SECOND_TERM)] {
            if let Some(&actual) = terms.get(position - 1) {
                if actual != expected {
                    return PropertyResult::fail(
                        "SeedTerms",
                        position,
                        format!("term {} is {}, expected {}", position, actual, expected),
                        None,
                    );
                }
            }
        }
        PropertyResult::pass("SeedTerms")
    }

    fn first_non_increasing(&self) -> Option<usize> {
        self.sequence
            .terms()
            .windows(2)
            .position(|w| w[1] <= w[0])
            .map(|i| i + 1)
    }

    fn check_strictly_increasing(&self) -> PropertyResult {
        let terms = self.sequence.terms();
        match self.first_non_increasing() {
            Some(idx) => {
                let position = idx + 1;
                let description = format!(
                    "term {} ({}) does not exceed term {} ({})",
                    position,
                    terms[idx],
                    idx,
                    terms[idx - 1]
                );
                let ce = self.counterexample(
                    position,
                    description.clone(),
                    ("value".to_string(), terms[idx].to_string()),
                );
                PropertyResult::fail("StrictlyIncreasing", position, description, Some(ce))
            }
            None => PropertyResult::pass("StrictlyIncreasing"),
        }
    }

    fn check_representable(&self, sums: &HashMap<u64, usize>) -> PropertyResult {
        let terms = self.sequence.terms();
        for (idx, &term) in terms.iter().enumerate().skip(2) {
            let produced_before = sums.get(&term).is_some_and(|&end| end < idx);
            if !produced_before {
                let position = idx + 1;
                let description = format!(
                    "term {} ({}) is not a sum of two or more consecutive earlier terms",
                    position, term
                );
                let ce = self.counterexample(
                    position,
                    description.clone(),
                    ("value".to_string(), term.to_string()),
                );
                return PropertyResult::fail("Representable", position, description, Some(ce));
            }
        }
        PropertyResult::pass("Representable")
    }

    /// Checked over the strictly increasing prefix only.
    fn check_minimal(&self) -> PropertyResult {
        let all = self.sequence.terms();
        let limit = self.first_non_increasing().unwrap_or(all.len());
        let terms = &all[..limit];
        let sums = run_sums_by_earliest_end(terms);

        // A run-sum not present as a term falls strictly between two
        // neighbours; the upper one is where minimality broke.
        let mut first: Option<(usize, u64)> = None;
        for &sum in sums.keys() {
            if terms.binary_search(&sum).is_ok() {
                continue;
            }
            let idx = terms.partition_point(|&t| t < sum);
            if first.map_or(true, |(best, value)| idx < best || (idx == best && sum < value)) {
                first = Some((idx, sum));
            }
        }

        match first {
            Some((idx, skipped)) => {
                let position = idx + 1;
                let description = format!(
                    "term {} ({}) skips representable sum {}",
                    position, terms[idx], skipped
                );
                let ce = self.counterexample(
                    position,
                    description.clone(),
                    ("skipped".to_string(), skipped.to_string()),
                );
                PropertyResult::fail("Minimal", position, description, Some(ce))
            }
            None => PropertyResult::pass("Minimal"),
        }
    }
}

impl<T: SequenceProperties + ?Sized> PropertyChecker for SequencePropertyChecker<'_, T> {
    fn check_all(&self) -> Vec<PropertyResult> {
        let sums = run_sums_by_earliest_end(self.sequence.terms());
        vec![
            self.check_seed_terms(),
            self.check_strictly_increasing(),
            self.check_representable(&sums),
            self.check_minimal(),
        ]
    }
}
