//! CLI argument definitions for the dataset generator.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `generate` subcommand.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Number of message records to generate
    #[arg(long, default_value = "1000")]
    pub count: u64,

    /// Output CSV file path
    #[arg(long, short = 'o', required_unless_present = "output_dir", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Output directory for multi-file generation (one part file per chunk)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Records per part file in multi-file mode
    #[arg(long, default_value = "100000")]
    pub records_per_file: u64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Pin every generated row to a single chat partition
    #[arg(long)]
    pub chat_id: Option<i64>,

    /// Optional path to write populate metrics as JSON
    #[arg(long)]
    pub metrics: Option<PathBuf>,
}
