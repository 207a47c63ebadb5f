//! Growth scales the excess `b_n` is normalized by.

use serde::Serialize;

/// Candidate growth rate for `b_n`.
///
/// Ordered as the panels are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthScale {
    /// `b_n` itself
    Identity = 0,
    /// `n^(1/5)`
    FifthRoot = 1,
    /// `n^(1/3)`
    CubeRoot = 2,
    /// `n^(1/2)`
    SquareRoot = 3,
    /// `ln n`
    Log = 4,
}

impl GrowthScale {
    /// All scales in plotting order.
    pub const ALL: [GrowthScale; 5] = [
        GrowthScale::Identity,
        GrowthScale::FifthRoot,
        GrowthScale::CubeRoot,
        GrowthScale::SquareRoot,
        GrowthScale::Log,
    ];

    /// Divisor at index `n`, or `None` where the series is undefined.
    pub fn divisor(&self, n: u64) -> Option<f64> {
        if n == 0 {
            return None;
        }
        let x = n as f64;
        match self {
            GrowthScale::Identity => Some(1.0),
            GrowthScale::FifthRoot => Some(x.powf(1.0 / 5.0)),
            GrowthScale::CubeRoot => Some(x.cbrt()),
            GrowthScale::SquareRoot => Some(x.sqrt()),
            GrowthScale::Log if n >= 2 => Some(x.ln()),
            GrowthScale::Log => None,
        }
    }

    /// Axis label for the normalized series.
    pub fn label(&self) -> &'static str {
        match self {
            GrowthScale::Identity => "b_n = a_n - n",
            GrowthScale::FifthRoot => "b_n / n^(1/5)",
            GrowthScale::CubeRoot => "b_n / n^(1/3)",
            GrowthScale::SquareRoot => "b_n / n^(1/2)",
            GrowthScale::Log => "b_n / log n",
        }
    }

    /// Panel title; the raw series is titled by name, the rest by formula.
    pub fn title(&self) -> &'static str {
        match self {
            GrowthScale::Identity => "b_n",
            _ => self.label(),
        }
    }

    /// Whether the series is drawn on log-log axes.
    pub fn is_log_log(&self) -> bool {
        matches!(self, GrowthScale::Identity)
    }
}
