//! # seq-analysis
//!
//! Reporting and growth analysis for generated A005243 terms.
//!
//! ## Reporter
//!
//! One line per term, `"<index>\t<value>\n"`, 1-indexed.
//!
//! ## Analyzer
//!
//! Derives the excess `b_n = a_n - n` and compares it against candidate
//! growth rates:
//!
//! | Scale | Series |
//! |-------|--------|
//! | Identity | `b_n` (plotted log-log) |
//! | FifthRoot | `b_n / n^(1/5)` |
//! | CubeRoot | `b_n / n^(1/3)` |
//! | SquareRoot | `b_n / n^(1/2)` |
//! | Log | `b_n / ln n`, undefined at n = 1 |

pub mod config;
pub mod error;
pub mod growth;
pub mod plot;
pub mod report;
pub mod series;

pub use config::{AnalyzerConfig, PlotConfig, DEFAULT_TERMS};
pub use error::AnalysisError;
pub use growth::GrowthScale;
pub use plot::{render_plots, Panel};
pub use report::{default_output_path, read_tsv, write_tsv, write_tsv_file};
pub use series::{excess, normalized, AnalysisReport, SeriesSummary};
