//! Argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use seq_analysis::DEFAULT_TERMS;

/// Default prefix length for `check`.
pub const DEFAULT_CHECK_TERMS: i64 = 5_000;

#[derive(Debug, Parser)]
#[command(name = "a005243", version, about = "Generate and analyze OEIS A005243")]
pub struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write `<index>\t<value>` lines for the first N terms
    Write {
        /// Number of terms
        #[arg(short = 'n', long = "n", default_value_t = DEFAULT_TERMS as i64, allow_negative_numbers = true)]
        n: i64,

        /// Output file (default: A005243_first<N>.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Derive b_n = a_n - n, summarize the normalized series and plot them
    Analyze {
        /// Number of terms
        #[arg(short = 'n', long = "n", default_value_t = DEFAULT_TERMS as i64, allow_negative_numbers = true)]
        n: i64,

        /// Plot image (.svg for SVG, otherwise bitmap)
        #[arg(short, long, default_value = "a005243.png")]
        plot: PathBuf,

        /// Skip rendering the plot
        #[arg(long)]
        no_plot: bool,

        /// Render a smaller image
        #[arg(long)]
        compact: bool,

        /// Also write the summary as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Check every sequence property on the first N terms
    Check {
        /// Number of terms
        #[arg(short = 'n', long = "n", default_value_t = DEFAULT_CHECK_TERMS, allow_negative_numbers = true)]
        n: i64,
    },
}
