//! Suffix-sum cache for the newest term.
//!
//! For a prefix `a_1..a_k` the cache is `a_k, a_k + a_{k-1}, ...,
//! a_k + ... + a_1`, shortest suffix first. Each acceptance produces a new
//! cache; the old one is only read.

/// Ordered suffix sums ending at the most recently accepted term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixSums {
    sums: Vec<u64>,
}

impl SuffixSums {
    /// Build the cache for a non-empty prefix.
    ///
    /// Returns `None` if `terms` is empty or a sum overflows `u64`.
    #[must_use]
    pub fn from_terms(terms: &[u64]) -> Option<Self> {
        if terms.is_empty() {
            return None;
        }
        let mut sums = Vec::with_capacity(terms.len());
        let mut acc: u64 = 0;
        for &term in terms.iter().rev() {
            acc = acc.checked_add(term)?;
            sums.push(acc);
        }
        Some(Self { sums })
    }

    /// Cache for the prefix extended by `term`: `[term] ++ [term + s ...]`.
    ///
    /// Returns `None` if a sum overflows `u64`.
    #[must_use]
    pub fn extend(&self, term: u64) -> Option<Self> {
        let mut sums = Vec::with_capacity(self.sums.len() + 1);
        sums.push(term);
        for &s in &self.sums {
            sums.push(term.checked_add(s)?);
        }
        Some(Self { sums })
    }

    /// Run-sums of length >= 2 ending at `term` if it were appended.
    ///
    /// These are `s + term` for every cached `s`, in cache order. Yields
    /// `None` for a sum that overflows.
    pub fn runs_ending_at(&self, term: u64) -> impl Iterator<Item = Option<u64>> + '_ {
        self.sums.iter().map(move |&s| s.checked_add(term))
    }

    /// The newest term (the length-1 suffix).
    #[must_use]
    pub fn last_term(&self) -> u64 {
        self.sums[0]
    }

    /// Sum of the whole prefix.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.sums[self.sums.len() - 1]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.sums
    }

}
