//! CLI argument definitions for the growth analyzer.

use crate::fit;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Clone, Debug)]
pub struct AnalyzeArgs {
    /// Measurement CSV file ('record_count,size_in_bytes' with header)
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Polynomial degree of the fitted curve
    #[arg(long, default_value_t = fit::DEFAULT_DEGREE)]
    pub degree: usize,

    /// Output path for the rendered chart
    #[arg(long, default_value = "growth.png")]
    pub chart: PathBuf,

    /// Evaluate the fitted curve at this record count
    #[arg(long)]
    pub project: Option<u64>,

    /// Optional path to write the report as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
}
