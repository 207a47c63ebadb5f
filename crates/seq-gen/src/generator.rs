//! Sequence generator with candidate pool and suffix-sum cache.
//!
//! Implements the accept → extend pool → rebuild cache cycle.
//! Terms are produced lazily by [`SequenceGenerator`]; [`generate`] and
//! friends drive it to a requested length.

use std::time::{Duration, Instant};

use seq_core::{PropertyChecker, SequenceError, SequencePropertyChecker, FIRST_TERM, SECOND_TERM};
use tracing::debug;

use crate::pool::{CandidatePool, PushOutcome};
use crate::suffix::SuffixSums;

/// Generator configuration.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Emit a debug event every this many accepted terms (0 disables)
    pub progress_interval: usize,
    /// Check every sequence property on the finished terms
    pub verify: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            progress_interval: 10_000,
            verify: false,
        }
    }
}

impl GeneratorConfig {
    /// Quiet config for tests and library callers.
    pub fn quick() -> Self {
        Self {
            progress_interval: 0,
            ..Default::default()
        }
    }

    /// Config that re-checks the result before returning it.
    pub fn thorough() -> Self {
        Self {
            verify: true,
            ..Default::default()
        }
    }
}

/// Counters collected while generating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Terms accepted, seeds included
    pub accepted: u64,
    /// Candidates inserted into the pool
    pub candidates_pushed: u64,
    /// Pushes skipped because the value was already pending
    pub duplicates_skipped: u64,
    /// Pool values discarded for being <= the last accepted term
    pub stale_discarded: u64,
    /// Largest pool size observed
    pub pool_peak: u64,
}

/// Terms plus the counters and timing of the run that produced them.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Generated terms
    pub terms: Vec<u64>,
    /// Counters from the run
    pub stats: GenerationStats,
    /// Wall time spent generating (and verifying, if enabled)
    pub duration: Duration,
}

impl GenerationReport {
    /// Format as a summary string.
    pub fn format_summary(&self) -> String {
        let mut summary = format!(
            "Generated {} terms in {:.2}s\n",
            self.terms.len(),
            self.duration.as_secs_f64(),
        );

        if let Some(last) = self.terms.last() {
            summary.push_str(&format!("  Last term: a({}) = {}\n", self.terms.len(), last));
        }
        summary.push_str(&format!(
            "  Candidates pushed: {}\n",
            self.stats.candidates_pushed
        ));
        summary.push_str(&format!(
            "  Duplicate pushes skipped: {}\n",
            self.stats.duplicates_skipped
        ));
        summary.push_str(&format!(
            "  Stale candidates discarded: {}\n",
            self.stats.stale_discarded
        ));
        summary.push_str(&format!("  Peak pool size: {}\n", self.stats.pool_peak));

        summary
    }
}

/// Lazy A005243 generator.
///
/// Yields `a_1, a_2, ...` in order. After an error the iterator is fused
/// and yields `None`.
#[derive(Debug)]
pub struct SequenceGenerator {
    terms: Vec<u64>,
    pool: CandidatePool,
    cache: Option<SuffixSums>,
    stats: GenerationStats,
    config: GeneratorConfig,
    failed: bool,
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator {
    /// Create a generator with the quick config.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::quick())
    }

    /// Create a generator with the given config.
    #[must_use]
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            terms: Vec::new(),
            pool: CandidatePool::new(),
            cache: None,
            stats: GenerationStats::default(),
            config,
            failed: false,
        }
    }

    /// Terms accepted so far.
    #[must_use]
    pub fn terms(&self) -> &[u64] {
        &self.terms
    }

    /// Consume the generator, keeping its terms.
    #[must_use]
    pub fn into_terms(self) -> Vec<u64> {
        self.terms
    }

    #[must_use]
    pub fn stats(&self) -> GenerationStats {
        self.stats
    }

    /// Number of pending candidates.
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Append `term` and register every run that ends at it.
    fn accept(&mut self, term: u64) -> Result<(), SequenceError> {
        let index = self.terms.len() + 1;
        debug_assert!(self.cache.as_ref().map_or(true, |c| term > c.last_term()));

        let next_cache = match self.cache.take() {
            None => SuffixSums::from_terms(&[term]),
            Some(cache) => {
                for run in cache.runs_ending_at(term) {
                    let sum = run.ok_or(SequenceError::Overflow { index })?;
                    match self.pool.push(sum) {
                        PushOutcome::Inserted => self.stats.candidates_pushed += 1,
                        PushOutcome::Duplicate => self.stats.duplicates_skipped += 1,
                    }
                }
                cache.extend(term)
            }
        };

        self.cache = Some(next_cache.ok_or(SequenceError::Overflow { index })?);
        self.terms.push(term);
        self.stats.accepted += 1;
        self.stats.pool_peak = self.stats.pool_peak.max(self.pool.len() as u64);

        if self.config.progress_interval > 0 && index % self.config.progress_interval == 0 {
            debug!(
                index,
                term,
                pool = self.pool.len(),
                cache = self.cache.as_ref().map_or(0, |c| c.as_slice().len()),
                prefix_sum = self.cache.as_ref().map_or(0, SuffixSums::total),
                "generation progress"
            );
        }
        Ok(())
    }

    /// Smallest pending candidate above the last accepted term.
    fn next_candidate(&mut self) -> Result<u64, SequenceError> {
        let index = self.terms.len() + 1;
        let last = self.terms.last().copied().unwrap_or(0);
        loop {
            let candidate = self
                .pool
                .pop_min()
                .ok_or(SequenceError::PoolExhausted { index })?;
            if candidate > last {
                return Ok(candidate);
            }
            self.stats.stale_discarded += 1;
        }
    }

    fn advance(&mut self) -> Result<u64, SequenceError> {
        let term = match self.terms.len() {
            0 => FIRST_TERM,
            1 => SECOND_TERM,
            _ => self.next_candidate()?,
        };
        self.accept(term)?;
        Ok(term)
    }
}

impl Iterator for SequenceGenerator {
    type Item = Result<u64, SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.advance();
        self.failed = result.is_err();
        Some(result)
    }
}

/// Validate a signed term count.
pub fn term_count(count: i64) -> Result<usize, SequenceError> {
    if count < 0 {
        return Err(SequenceError::InvalidArgument(count));
    }
    usize::try_from(count).map_err(|_| SequenceError::InvalidArgument(count))
}

/// First `count` terms of A005243.
///
/// Fails with `InvalidArgument` for a negative count, before any work.
pub fn generate(count: i64) -> Result<Vec<u64>, SequenceError> {
    generate_terms(term_count(count)?)
}

/// First `count` terms of A005243.
pub fn generate_terms(count: usize) -> Result<Vec<u64>, SequenceError> {
    let mut generator = SequenceGenerator::new();
    drive(&mut generator, count)?;
    Ok(generator.into_terms())
}

/// First `count` terms with generation counters and timing.
///
/// With `config.verify` set, the terms are re-checked against every
/// sequence property and the first failure is returned as `Invariant`.
pub fn generate_with_stats(
    count: usize,
    config: GeneratorConfig,
) -> Result<GenerationReport, SequenceError> {
    let start = Instant::now();
    let verify = config.verify;

    let mut generator = SequenceGenerator::with_config(config);
    drive(&mut generator, count)?;
    let stats = generator.stats();
    let terms = generator.into_terms();

    if verify {
        verify_terms(&terms, count)?;
    }

    let duration = start.elapsed();
    debug!(
        terms = terms.len(),
        pushed = stats.candidates_pushed,
        pool_peak = stats.pool_peak,
        elapsed_ms = duration.as_millis() as u64,
        "generation complete"
    );

    Ok(GenerationReport {
        terms,
        stats,
        duration,
    })
}

fn drive(generator: &mut SequenceGenerator, count: usize) -> Result<(), SequenceError> {
    while generator.terms().len() < count {
        generator.advance()?;
    }
    Ok(())
}

/// First failing sequence property on `terms`, as `Invariant`.
fn verify_terms(terms: &[u64], count: usize) -> Result<(), SequenceError> {
    SequencePropertyChecker::new(terms)
        .with_terms_count(count as u64)
        .verify_all()
        .map_err(|failure| SequenceError::Invariant(failure.format_status()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(generate(0).unwrap(), Vec::<u64>::new());
        assert_eq!(generate(1).unwrap(), vec![1]);
        assert_eq!(generate(2).unwrap(), vec![1, 2]);
        assert_eq!(generate(3).unwrap(), vec![1, 2, 3]);
        assert_eq!(generate(4).unwrap(), vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_fifth_term_is_one_plus_two_plus_three() {
        assert_eq!(generate(5).unwrap(), vec![1, 2, 3, 5, 6]);
    }

    #[test]
    fn test_negative_count_rejected() {
        assert_eq!(generate(-1), Err(SequenceError::InvalidArgument(-1)));
        assert_eq!(
            generate(i64::MIN),
            Err(SequenceError::InvalidArgument(i64::MIN))
        );
    }

    #[test]
    fn test_seed_state_after_two_terms() {
        let mut generator = SequenceGenerator::new();
        assert_eq!(generator.next(), Some(Ok(1)));
        assert_eq!(generator.next(), Some(Ok(2)));

        // Only 1 + 2 is available from a two-term prefix.
        assert_eq!(generator.pool_len(), 1);
        assert_eq!(generator.pool.peek_min(), Some(3));
        assert_eq!(generator.cache.as_ref().unwrap().as_slice(), &[2, 3]);
    }

    #[test]
    fn test_pool_after_accepting_three() {
        let mut generator = SequenceGenerator::new();
        let terms: Vec<u64> = generator.by_ref().take(3).map(Result::unwrap).collect();
        assert_eq!(terms, vec![1, 2, 3]);

        // 2 + 3 and 1 + 2 + 3.
        assert!(generator.pool.contains(5));
        assert!(generator.pool.contains(6));
        assert_eq!(generator.pool_len(), 2);
        assert_eq!(generator.cache.as_ref().unwrap().as_slice(), &[3, 5, 6]);
    }

    #[test]
    fn test_duplicate_sums_not_pushed_twice() {
        // 11 = 5 + 6 = 1 + 2 + 3 + 5.
        let report = generate_with_stats(200, GeneratorConfig::quick()).unwrap();
        assert!(report.stats.duplicates_skipped > 0);
        assert_eq!(report.stats.accepted, 200);
    }

    #[test]
    fn test_verify_passes_on_correct_output() {
        let report = generate_with_stats(500, GeneratorConfig::thorough()).unwrap();
        assert_eq!(report.terms.len(), 500);
        assert!(report.format_summary().contains("Generated 500 terms"));
    }

    #[test]
    fn test_verify_rejects_skipped_sum() {
        // 6 = 1 + 2 + 3 belongs before 8.
        let err = verify_terms(&[1, 2, 3, 5, 8], 5).unwrap_err();
        match err {
            SequenceError::Invariant(status) => assert!(status.contains("Minimal"), "{}", status),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(verify_terms(&[1, 2, 3, 5, 6], 5).is_ok());
    }

    #[test]
    fn test_iterator_is_lazy_and_unbounded() {
        let first: Vec<u64> = SequenceGenerator::new()
            .take(10)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(first, vec![1, 2, 3, 5, 6, 8, 10, 11, 14, 16]);
    }

    #[test]
    fn test_overflow_fails_and_fuses() {
        let mut generator = SequenceGenerator::new();
        generator.terms = vec![1, u64::MAX - 2];
        generator.cache = SuffixSums::from_terms(&generator.terms);
        generator.pool.push(u64::MAX - 1);

        assert_eq!(
            generator.next(),
            Some(Err(SequenceError::Overflow { index: 3 }))
        );
        assert_eq!(generator.next(), None);
    }

    #[test]
    fn test_exhausted_pool_reported() {
        let mut generator = SequenceGenerator::new();
        generator.terms = vec![1, 2];
        generator.cache = SuffixSums::from_terms(&generator.terms);

        assert_eq!(
            generator.next(),
            Some(Err(SequenceError::PoolExhausted { index: 3 }))
        );
    }

    #[test]
    fn test_stale_candidates_discarded() {
        let mut generator = SequenceGenerator::new();
        generator.by_ref().take(3).for_each(drop);
        generator.pool.push(2);
        generator.pool.push(3);

        assert_eq!(generator.next(), Some(Ok(5)));
        assert_eq!(generator.stats().stale_discarded, 2);
    }
}
