//! Chart rendering
//!
//! Renders labeled sample sequences as line plots over a shared
//! sample-index axis, using plotters. The renderer is behind a narrow
//! trait so inspection logic can be tested without a drawing backend.

use crate::error::{Result, WavescopeError};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::PathBuf;

/// Chart dimensions in pixels
const CHART_SIZE: (u32, u32) = (1280, 480);

/// Cap on drawn points per series; longer series are thinned by striding
const MAX_DRAW_POINTS: usize = 8192;

/// One labeled sequence to plot
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub values: Vec<i32>,
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<i32>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Capability interface for chart output
pub trait ChartRenderer {
    /// Render all series onto one chart with a legend
    fn render(&self, series: &[Series]) -> Result<()>;
}

/// Plotters-based renderer writing to a file.
///
/// The backend is chosen by the output extension: `.svg` produces an SVG,
/// anything else a bitmap PNG.
#[derive(Debug, Clone)]
pub struct PlottersChart {
    output: PathBuf,
    caption: String,
}

impl PlottersChart {
    pub fn new(output: impl Into<PathBuf>, caption: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            caption: caption.into(),
        }
    }

}

impl ChartRenderer for PlottersChart {
    fn render(&self, series: &[Series]) -> Result<()> {
        let is_svg = self
            .output
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("svg"))
            .unwrap_or(false);

        if is_svg {
            let root = SVGBackend::new(&self.output, CHART_SIZE).into_drawing_area();
            draw_series_chart(&root, &self.caption, series)
        } else {
            let root = BitMapBackend::new(&self.output, CHART_SIZE).into_drawing_area();
            draw_series_chart(&root, &self.caption, series)
        }
    }
}

/// Axis bounds over all series, padded so constant lines at the extrema
/// stay clear of the frame
fn y_bounds(series: &[Series]) -> Result<(f64, f64)> {
    let mut min = i32::MAX;
    let mut max = i32::MIN;
    for s in series {
        for &v in &s.values {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min > max {
        return Err(WavescopeError::EmptyBuffer);
    }
    let span = ((max as f64) - (min as f64)).max(1.0);
    let pad = span * 0.05;
    Ok((min as f64 - pad, max as f64 + pad))
}

fn chart_err<E: std::fmt::Display>(e: E) -> WavescopeError {
    WavescopeError::Chart {
        details: e.to_string(),
    }
}

fn draw_series_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    caption: &str,
    series: &[Series],
) -> Result<()>
where
    DB: DrawingBackend,
{
    if series.is_empty() {
        return Err(WavescopeError::EmptyBuffer);
    }
    let num_points = series.iter().map(|s| s.values.len()).max().unwrap_or(0);
    if num_points == 0 {
        return Err(WavescopeError::EmptyBuffer);
    }

    let (y_min, y_max) = y_bounds(series)?;

    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(root)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..num_points as f64, y_min..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Sample index")
        .y_desc("Amplitude (raw)")
        .draw()
        .map_err(chart_err)?;

    let step = (num_points / MAX_DRAW_POINTS).max(1);

    for (idx, s) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let points: Vec<(f64, f64)> = s
            .values
            .iter()
            .enumerate()
            .step_by(step)
            .map(|(i, &v)| (i as f64, v as f64))
            .collect();

        chart
            .draw_series(LineSeries::new(points, &color))
            .map_err(chart_err)?
            .label(&s.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
