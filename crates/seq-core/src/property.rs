//! Outcomes of checking a term list against the sequence properties.
//!
//! A check yields one [`PropertyResult`] per property. Failures carry the
//! 1-indexed term `a_k` where the property first breaks, which is what a
//! caller needs to re-run `generate(k)` and look at the neighbourhood.

use crate::counterexample::Counterexample;

/// One property, checked over a prefix.
#[derive(Debug, Clone)]
pub struct PropertyResult {
    /// Property name, e.g. "Minimal"
    pub name: &'static str,

    pub holds: bool,

    /// What went wrong at `position`
    pub violation: Option<String>,

    /// `k` of the first offending term `a_k`
    pub position: Option<usize>,

    /// Terms leading up to the offending one
    pub counterexample: Option<Counterexample>,
}

impl PropertyResult {
    #[must_use]
    pub fn pass(name: &'static str) -> Self {
        debug_assert!(!name.is_empty());

        Self {
            name,
            holds: true,
            violation: None,
            position: None,
            counterexample: None,
        }
    }

    /// Failure first observed at term `a_position`.
    #[must_use]
    pub fn fail(
        name: &'static str,
        position: usize,
        violation: String,
        counterexample: Option<Counterexample>,
    ) -> Self {
        debug_assert!(!name.is_empty());
        debug_assert!(position >= 1, "terms are numbered from a_1");

        Self {
            name,
            holds: false,
            violation: Some(violation),
            position: Some(position),
            counterexample,
        }
    }

    /// `[PASS] Name` or `[FAIL] Name at a_k: reason`.
    #[must_use]
    pub fn format_status(&self) -> String {
        match (&self.violation, self.position) {
            (Some(violation), Some(k)) if !self.holds => {
                format!("[FAIL] {} at a_{}: {}", self.name, k, violation)
            }
            _ if !self.holds => format!("[FAIL] {}", self.name),
            _ => format!("[PASS] {}", self.name),
        }
    }
}

/// Something that can be checked against every sequence property.
pub trait PropertyChecker {
    /// Results for every property, in a fixed order, passing ones included.
    fn check_all(&self) -> Vec<PropertyResult>;

    /// The first failing property, if any.
    fn verify_all(&self) -> Result<(), PropertyResult> {
        match self.check_all().into_iter().find(|r| !r.holds) {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }

    fn all_hold(&self) -> bool {
        self.verify_all().is_ok()
    }

    fn summary(&self) -> PropertySummary {
        PropertySummary::from_results(self.check_all())
    }
}

/// Tally of a full check.
#[derive(Debug, Clone)]
pub struct PropertySummary {
    pub passed: u64,
    pub failed: u64,
    pub total: u64,
    pub results: Vec<PropertyResult>,
}

impl PropertySummary {
    /// Tally `results` in one pass.
    #[must_use]
    pub fn from_results(results: Vec<PropertyResult>) -> Self {
        let failed = results.iter().filter(|r| !r.holds).count() as u64;
        let total = results.len() as u64;
        Self {
            passed: total - failed,
            failed,
            total,
            results,
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }

    /// Failing results in check order.
    pub fn failures(&self) -> impl Iterator<Item = &PropertyResult> {
        self.results.iter().filter(|r| !r.holds)
    }

    /// One status line per property, then the trace of the earliest failure.
    #[must_use]
    pub fn format_report(&self) -> String {
        let mut report = format!("Sequence properties: {}/{} hold\n", self.passed, self.total);
        for result in &self.results {
            report.push_str(&result.format_status());
            report.push('\n');
        }

        // Report the trace for the failure closest to the start of the sequence.
        let earliest = self
            .failures()
            .filter(|r| r.counterexample.is_some())
            .min_by_key(|r| r.position.unwrap_or(usize::MAX));
        if let Some(ce) = earliest.and_then(|r| r.counterexample.as_ref()) {
            report.push_str("\nCounterexample:\n");
            report.push_str(&ce.render_diagram());
        }

        report
    }
}
