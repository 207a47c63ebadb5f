//! Errors for reporting and analysis.

use seq_core::SequenceError;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Plot error: {0}")]
    Plot(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("No terms to analyze")]
    Empty,

    #[error("Sequence error: {0}")]
    Sequence(#[from] SequenceError),
}
