//! Chart rendering: observed samples with the fitted curve overlaid.

use crate::error::AnalyzeError;
use crate::fit::PolyFit;
use crate::samples::Sample;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

const CHART_SIZE: (u32, u32) = (1024, 768);
const CURVE_POINTS: usize = 200;
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Render the samples (record count on x, megabytes on y) as scatter
/// points with the fitted curve drawn across the sampled range, and
/// write the result as a PNG.
pub fn render_chart(samples: &[Sample], fit: &PolyFit, path: &Path) -> Result<(), AnalyzeError> {
    let x_max = samples
        .last()
        .map(|s| s.record_count as f64)
        .unwrap_or(1.0)
        * 1.05;
    let y_observed = samples
        .iter()
        .map(|s| s.size_in_bytes as f64)
        .fold(0.0, f64::max);
    let y_fitted = curve(fit, x_max)
        .map(|(_, y)| y * BYTES_PER_MB)
        .fold(0.0, f64::max);
    let y_max = (y_observed.max(y_fitted).max(1.0) / BYTES_PER_MB) * 1.05;

    // An unwritable path must fail before the backend buffers anything.
    std::fs::File::create(path)?;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(24)
        .x_label_area_size(32)
        .y_label_area_size(48)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(chart_error)?;

    // No font backend is compiled in, so the mesh is drawn without labels.
    chart
        .configure_mesh()
        .x_labels(0)
        .y_labels(0)
        .draw()
        .map_err(chart_error)?;

    chart
        .draw_series(LineSeries::new(curve(fit, x_max), &RED))
        .map_err(chart_error)?;

    chart
        .draw_series(samples.iter().map(|s| {
            Circle::new(
                (s.record_count as f64, s.size_in_bytes as f64 / BYTES_PER_MB),
                5,
                BLUE.filled(),
            )
        }))
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    info!("Chart written to '{}'", path.display());
    Ok(())
}

/// Dense sampling of the fitted curve over `[0, x_max]`, y in megabytes.
fn curve(fit: &PolyFit, x_max: f64) -> impl Iterator<Item = (f64, f64)> + '_ {
    (0..=CURVE_POINTS).map(move |i| {
        let x = x_max * i as f64 / CURVE_POINTS as f64;
        (x, fit.evaluate(x) / BYTES_PER_MB)
    })
}

fn chart_error<E: std::fmt::Display>(err: E) -> AnalyzeError {
    AnalyzeError::Chart(err.to_string())
}
