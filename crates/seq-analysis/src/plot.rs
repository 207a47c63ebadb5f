//! Stacked growth plots.
//!
//! Five panels, one per [`GrowthScale`]: the raw excess on log-log axes,
//! then the four normalized series on linear axes. Output format follows
//! the file extension (`.svg` for SVG, anything else as a bitmap).

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::config::PlotConfig;
use crate::error::AnalysisError;
use crate::growth::GrowthScale;
use crate::series::{excess, normalized};

/// Floor applied to `b_n` on the log-log panel, where zero cannot be drawn.
const LOG_FLOOR: f64 = 1e-12;

/// Data for one panel, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub scale: GrowthScale,
    pub title: String,
    pub y_label: &'static str,
    pub points: Vec<(f64, f64)>,
}

impl Panel {
    /// Build every panel for `terms`.
    pub fn all(terms: &[u64]) -> Vec<Panel> {
        let b = excess(terms);
        GrowthScale::ALL
            .iter()
            .map(|&scale| {
                let points = normalized(&b, scale)
                    .into_iter()
                    .map(|(n, y)| {
                        let y = if scale.is_log_log() { y.max(LOG_FLOOR) } else { y };
                        (n as f64, y)
                    })
                    .collect();
                let title = if scale.is_log_log() {
                    format!("A005243: {} (first {} terms)", scale.title(), terms.len())
                } else {
                    scale.title().to_string()
                };
                Panel {
                    scale,
                    title,
                    y_label: scale.label(),
                    points,
                }
            })
            .collect()
    }

    /// X range covering every point, at least `1..2`.
    pub fn x_range(&self) -> (f64, f64) {
        let x_max = self.points.last().map_or(2.0, |&(x, _)| x).max(2.0);
        (1.0, x_max)
    }

    /// Y range with padding; log panels are multiplicatively padded.
    pub fn y_range(&self) -> (f64, f64) {
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for &(_, y) in &self.points {
            if y.is_finite() {
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            return if self.scale.is_log_log() { (LOG_FLOOR, 1.0) } else { (0.0, 1.0) };
        }

        if self.scale.is_log_log() {
            return (y_min / 2.0, (y_max * 2.0).max(y_min * 4.0));
        }
        let range = y_max - y_min;
        let pad = if range > 1e-9 { 0.1 * range } else { 0.1 * y_max.abs().max(1.0) };
        (y_min - pad, y_max + pad)
    }
}

/// Render the five stacked panels for `terms` to `path`.
pub fn render_plots(path: &Path, terms: &[u64], config: &PlotConfig) -> Result<(), AnalysisError> {
    if terms.is_empty() {
        return Err(AnalysisError::Empty);
    }
    let panels = Panel::all(terms);
    let size = (config.width, config.height);

    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        draw(&SVGBackend::new(path, size).into_drawing_area(), &panels, config)?;
    } else {
        draw(&BitMapBackend::new(path, size).into_drawing_area(), &panels, config)?;
    }

    tracing::debug!(path = %path.display(), terms = terms.len(), "rendered plots");
    Ok(())
}

fn plot_err<E: std::fmt::Display>(e: E) -> AnalysisError {
    AnalysisError::Plot(e.to_string())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    panels: &[Panel],
    config: &PlotConfig,
) -> Result<(), AnalysisError> {
    root.fill(&WHITE).map_err(plot_err)?;
    let areas = root.split_evenly((panels.len(), 1));

    for (area, panel) in areas.iter().zip(panels) {
        let (x_lo, x_hi) = panel.x_range();
        let (y_lo, y_hi) = panel.y_range();
        let mut builder = ChartBuilder::on(area);
        builder
            .caption(&panel.title, ("sans-serif", config.caption_size))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(70);

        if panel.scale.is_log_log() {
            let mut chart = builder
                .build_cartesian_2d((x_lo..x_hi).log_scale(), (y_lo..y_hi).log_scale())
                .map_err(plot_err)?;
            chart
                .configure_mesh()
                .x_desc("n")
                .y_desc(panel.y_label)
                .draw()
                .map_err(plot_err)?;
            chart
                .draw_series(LineSeries::new(panel.points.iter().copied(), &BLUE))
                .map_err(plot_err)?;
        } else {
            let mut chart = builder
                .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
                .map_err(plot_err)?;
            chart
                .configure_mesh()
                .x_desc("n")
                .y_desc(panel.y_label)
                .draw()
                .map_err(plot_err)?;
            chart
                .draw_series(LineSeries::new(panel.points.iter().copied(), &BLUE))
                .map_err(plot_err)?;
        }
    }

    root.present().map_err(plot_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: [u64; 10] = [1, 2, 3, 5, 6, 8, 10, 11, 14, 16];

    #[test]
    fn test_five_panels_in_order() {
        let panels = Panel::all(&PREFIX);
        let scales: Vec<_> = panels.iter().map(|p| p.scale).collect();
        assert_eq!(scales, GrowthScale::ALL.to_vec());
        assert_eq!(panels[0].title, "A005243: b_n (first 10 terms)");
        assert_eq!(panels[2].title, "b_n / n^(1/3)");
        assert_eq!(panels[4].y_label, "b_n / log n");
    }

    #[test]
    fn test_log_panel_clamps_zero_excess() {
        let panels = Panel::all(&PREFIX);
        assert_eq!(panels[0].points[0], (1.0, LOG_FLOOR));
        assert_eq!(panels[0].points[3], (4.0, 1.0));
        // The linear panels keep the zeros.
        assert_eq!(panels[1].points[0], (1.0, 0.0));
    }

    #[test]
    fn test_log_n_panel_starts_at_two() {
        let panels = Panel::all(&PREFIX);
        assert_eq!(panels[4].points.len(), 9);
        assert_eq!(panels[4].points[0].0, 2.0);
    }

    #[test]
    fn test_ranges_are_non_degenerate() {
        for panel in Panel::all(&[1]) {
            let (x_lo, x_hi) = panel.x_range();
            let (y_lo, y_hi) = panel.y_range();
            assert!(x_lo < x_hi);
            assert!(y_lo < y_hi, "{:?}", panel.scale);
            if panel.scale.is_log_log() {
                assert!(y_lo > 0.0);
            }
        }
    }

    #[test]
    fn test_empty_terms_rejected() {
        let err = render_plots(Path::new("unused.png"), &[], &PlotConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::Empty));
    }
}
