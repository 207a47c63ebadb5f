//! Analyzer configuration.

/// Term count used when none is requested.
pub const DEFAULT_TERMS: usize = 30_000;

/// Plot output settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels (shared by all stacked panels)
    pub height: u32,
    /// Caption font size
    pub caption_size: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 1800,
            caption_size: 20,
        }
    }
}

impl PlotConfig {
    /// Smaller image for quick looks.
    pub fn compact() -> Self {
        Self {
            width: 600,
            height: 1200,
            caption_size: 16,
        }
    }
}

/// Analyzer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Number of terms to generate and analyze
    pub terms: usize,
    /// Plot settings
    pub plot: PlotConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            terms: DEFAULT_TERMS,
            plot: PlotConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Config for a specific term count.
    pub fn with_terms(terms: usize) -> Self {
        Self {
            terms,
            ..Default::default()
        }
    }
}
