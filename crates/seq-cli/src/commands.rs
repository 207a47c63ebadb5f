//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use seq_analysis::{
    default_output_path, render_plots, write_tsv_file, AnalysisReport, AnalyzerConfig, PlotConfig,
};
use seq_core::{PropertyChecker, PropertySummary, SequencePropertyChecker};
use seq_gen::{generate, generate_with_stats, term_count, GenerationReport, GeneratorConfig};
use tracing::info;

use crate::cli::Commands;

/// Run a parsed subcommand. Returns whether it succeeded.
pub fn run(command: Commands) -> Result<bool> {
    match command {
        Commands::Write { n, output } => {
            let path = write(n, output)?;
            println!("Wrote {} terms to {}", n, path.display());
            Ok(true)
        }
        Commands::Analyze {
            n,
            plot,
            no_plot,
            compact,
            json,
        } => {
            let mut config = AnalyzerConfig::with_terms(term_count(n)?);
            if compact {
                config.plot = PlotConfig::compact();
            }
            let plot = if no_plot { None } else { Some(plot.as_path()) };
            let report = analyze(&config, plot, json.as_deref())?;
            print!("{}", report.format_report());
            Ok(true)
        }
        Commands::Check { n } => {
            let summary = check(n)?;
            print!("{}", summary.format_report());
            Ok(summary.is_clean())
        }
    }
}

fn generate_logged(count: usize) -> Result<GenerationReport> {
    info!(terms = count, "generating");
    let report = generate_with_stats(count, GeneratorConfig::default())
        .with_context(|| format!("generating {} terms", count))?;
    info!(
        elapsed_ms = report.duration.as_millis() as u64,
        pool_peak = report.stats.pool_peak,
        "generated"
    );
    Ok(report)
}

/// Write the listing for `n` terms; returns the path written.
pub fn write(n: i64, output: Option<PathBuf>) -> Result<PathBuf> {
    let terms = generate(n)?;
    let path = output.unwrap_or_else(|| default_output_path(terms.len()));
    write_tsv_file(&path, &terms)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), terms = terms.len(), "listing written");
    Ok(path)
}

/// Analyze `config.terms` terms, optionally rendering plots and writing JSON.
pub fn analyze(
    config: &AnalyzerConfig,
    plot: Option<&Path>,
    json: Option<&Path>,
) -> Result<AnalysisReport> {
    let generated = generate_logged(config.terms)?;
    let report = AnalysisReport::from_terms(&generated.terms);

    if let Some(path) = plot {
        render_plots(path, &generated.terms, &config.plot)
            .with_context(|| format!("rendering {}", path.display()))?;
        info!(path = %path.display(), "plots rendered");
    }
    if let Some(path) = json {
        report
            .write_json(path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "summary written");
    }
    Ok(report)
}

/// Check every sequence property on the first `n` terms.
pub fn check(n: i64) -> Result<PropertySummary> {
    let generated = generate_logged(term_count(n)?)?;
    let summary = SequencePropertyChecker::new(&generated.terms)
        .with_terms_count(generated.terms.len() as u64)
        .summary();
    info!(passed = summary.passed, failed = summary.failed, "properties checked");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_to_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("terms.txt");

        let path = write(5, Some(out.clone())).unwrap();
        assert_eq!(path, out);
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "1\t1\n2\t2\n3\t3\n4\t5\n5\t6\n"
        );
    }

    #[test]
    fn test_negative_count_is_invalid_argument() {
        let err = write(-1, None).unwrap_err();
        let seq_err = err.downcast_ref::<seq_core::SequenceError>().unwrap();
        assert!(seq_err.is_invalid_argument());

        assert!(check(-5).is_err());

        let err = run(Commands::Analyze {
            n: -2,
            plot: PathBuf::from("unused.png"),
            no_plot: true,
            compact: true,
            json: None,
        })
        .unwrap_err();
        assert!(err
            .downcast_ref::<seq_core::SequenceError>()
            .is_some_and(|e| e.is_invalid_argument()));
    }

    #[test]
    fn test_check_passes() {
        let summary = check(400).unwrap();
        assert!(summary.is_clean());
        assert_eq!(summary.total, 4);
    }

    #[test]
    fn test_analyze_without_plot_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("summary.json");

        let report = analyze(&AnalyzerConfig::with_terms(100), None, Some(&json)).unwrap();
        assert_eq!(report.last_term, Some(146));
        assert!(std::fs::read_to_string(&json).unwrap().contains("\"cube_root\""));
    }

    #[test]
    fn test_zero_terms() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.txt");
        write(0, Some(out.clone())).unwrap();
        assert!(std::fs::read_to_string(&out).unwrap().is_empty());

        let report = analyze(&AnalyzerConfig::with_terms(0), None, None).unwrap();
        assert_eq!(report.terms, 0);
        assert!(report.series.is_empty());
    }
}
