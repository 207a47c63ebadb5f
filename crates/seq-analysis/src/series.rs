//! Derived series and their summaries.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use crate::error::AnalysisError;
use crate::growth::GrowthScale;

/// Excess `b_n = a_n - n` for each term, `n` 1-indexed.
///
/// Exact whenever `|a_n - n| < 2^63`.
pub fn excess(terms: &[u64]) -> Vec<i64> {
    terms
        .iter()
        .zip(1u64..)
        .map(|(&a, n)| a.wrapping_sub(n) as i64)
        .collect()
}

/// `(n, b_n / divisor(n))` for every `n` where the scale is defined.
pub fn normalized(excess: &[i64], scale: GrowthScale) -> Vec<(u64, f64)> {
    excess
        .iter()
        .zip(1u64..)
        .filter_map(|(&b, n)| scale.divisor(n).map(|d| (n, b as f64 / d)))
        .collect()
}

/// Summary statistics of one derived series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    /// Scale the series is normalized by
    pub scale: GrowthScale,
    /// Axis label
    pub label: &'static str,
    /// Number of defined points
    pub points: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Value at the largest `n`
    pub last: f64,
}

impl SeriesSummary {
    /// Summarize a normalized series; `None` if it has no points.
    pub fn from_points(scale: GrowthScale, points: &[(u64, f64)]) -> Option<Self> {
        let &(_, last) = points.last()?;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut total = 0.0;
        for &(_, y) in points {
            min = min.min(y);
            max = max.max(y);
            total += y;
        }

        Some(Self {
            scale,
            label: scale.label(),
            points: points.len(),
            min,
            max,
            mean: total / points.len() as f64,
            last,
        })
    }
}

/// Growth analysis of a generated prefix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Number of terms analyzed
    pub terms: usize,
    /// Last term, if any
    pub last_term: Option<u64>,
    /// One summary per scale that has at least one defined point
    pub series: Vec<SeriesSummary>,
}

impl AnalysisReport {
    /// Analyze `terms` across every growth scale.
    pub fn from_terms(terms: &[u64]) -> Self {
        let b = excess(terms);
        let series = GrowthScale::ALL
            .iter()
            .filter_map(|&scale| SeriesSummary::from_points(scale, &normalized(&b, scale)))
            .collect();

        Self {
            terms: terms.len(),
            last_term: terms.last().copied(),
            series,
        }
    }

    /// Summary for one scale.
    pub fn get(&self, scale: GrowthScale) -> Option<&SeriesSummary> {
        self.series.iter().find(|s| s.scale == scale)
    }

    /// Format as a report string.
    pub fn format_report(&self) -> String {
        let mut report = format!("A005243 growth analysis: {} terms\n", self.terms);
        if let Some(last) = self.last_term {
            let _ = writeln!(report, "  a({}) = {}", self.terms, last);
        }
        for s in &self.series {
            let _ = writeln!(
                report,
                "  {:<16} min {:>10.4}  max {:>10.4}  mean {:>10.4}  last {:>10.4}",
                s.label, s.min, s.max, s.mean, s.last
            );
        }
        report
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, AnalysisError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty-printed JSON to `path`.
    pub fn write_json(&self, path: &Path) -> Result<(), AnalysisError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
