//! Growth analyzer for storage benchmarking.
//!
//! Reads a table of `(record_count, size_in_bytes)` measurements taken
//! after each bulk-load round, fits a least-squares polynomial to the
//! growth, and renders a chart of the samples with the fitted curve
//! overlaid.
//!
//! The samples are trusted, hand-collected input; whether they were
//! taken before or after compaction is the operator's concern, and the
//! fit simply describes whatever was measured.
//!
//! # Example
//!
//! ```ignore
//! use growth_analyzer::{run_analysis, AnalyzeArgs};
//!
//! let report = run_analysis(&args)?;
//! println!("{report}");
//! ```

pub mod args;
pub mod chart;
pub mod error;
pub mod fit;
pub mod report;
pub mod samples;

pub use args::AnalyzeArgs;
pub use error::AnalyzeError;
pub use fit::{fit_polynomial, PolyFit};
pub use report::{GrowthReport, Projection};
pub use samples::{load_samples, Sample};

use std::fs::File;
use tracing::info;

/// Run a full analysis: load samples, fit the curve, render the chart,
/// and optionally write the JSON report.
pub fn run_analysis(args: &AnalyzeArgs) -> Result<GrowthReport, AnalyzeError> {
    let samples = samples::load_samples(&args.input)?;
    let fitted = fit::fit_polynomial(&samples, args.degree)?;
    info!(
        "Fitted degree-{} polynomial over {} samples, r_squared = {:.6}",
        fitted.degree,
        samples.len(),
        fitted.r_squared
    );

    let projection = args.project.map(|record_count| Projection {
        record_count,
        size_in_bytes: fitted.evaluate(record_count as f64),
    });
    let report = GrowthReport::new(&samples, &fitted, projection);

    chart::render_chart(&samples, &fitted, &args.chart)?;

    if let Some(json_path) = &args.json {
        let file = File::create(json_path)?;
        serde_json::to_writer_pretty(file, &report)?;
        info!("Report written to '{}'", json_path.display());
    }

    Ok(report)
}
