//! Command-line interface for growth-bench
//!
//! # Usage Examples
//!
//! ## Dataset generation
//! ```bash
//! # 100k messages into one bulk-loader-ready CSV file
//! growth-bench generate --count 100000 --output messages.csv
//!
//! # Deterministic re-run with a pinned chat partition
//! growth-bench generate --count 100000 --output messages.csv \
//!   --seed 7 --chat-id 42
//!
//! # Large volumes split across part files
//! growth-bench generate --count 2000000 --output-dir ./dataset \
//!   --records-per-file 500000
//! ```
//!
//! ## Growth analysis
//! ```bash
//! # Fit the default quadratic to measured sizes and render the chart
//! growth-bench analyze --input measurements.csv --chart growth.png
//!
//! # Linear fit with a projection at one billion records
//! growth-bench analyze --input measurements.csv --degree 1 \
//!   --project 1000000000
//! ```
//!
//! ## Measurement file format
//! ```text
//! record_count,size_in_bytes
//! 1000,233561
//! 2000,456033
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use dataset_populate_csv::{write_metrics, CsvPopulator, GenerateArgs, PopulateError};
use growth_analyzer::{run_analysis, AnalyzeArgs, AnalyzeError};

#[derive(Parser)]
#[command(name = "growth-bench")]
#[command(about = "Benchmarking tools for clustered-table storage growth")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic message dataset for bulk loading
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
    /// Fit a growth curve to (record_count, size_in_bytes) measurements
    Analyze {
        #[command(flatten)]
        args: AnalyzeArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code(&e));
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            let mut populator = CsvPopulator::new(args.seed);
            if let Some(chat_id) = args.chat_id {
                populator = populator.with_chat_id(chat_id);
            }

            let metrics = if let Some(output) = &args.output {
                populator.populate(output, args.count)?
            } else if let Some(output_dir) = &args.output_dir {
                populator.populate_dir(output_dir, args.count, args.records_per_file)?
            } else {
                anyhow::bail!("one of --output or --output-dir is required");
            };

            if let Some(metrics_path) = &args.metrics {
                write_metrics(metrics_path, &metrics).with_context(|| {
                    format!("failed to write metrics to '{}'", metrics_path.display())
                })?;
            }

            println!(
                "{} rows written across {} file(s), {} bytes ({:.1} bytes/row, {:.1} rows/sec)",
                metrics.rows_written,
                metrics.files_written,
                metrics.file_size_bytes,
                metrics.bytes_per_row(),
                metrics.rows_per_second()
            );
        }
        Commands::Analyze { args } => {
            let report = run_analysis(&args)?;
            println!("{report}");
        }
    }

    Ok(())
}

/// Map error classes to stable non-zero exit codes: 2 for invalid
/// arguments, 3 for IO failures, 4 for malformed input, 5 for
/// insufficient data.
fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<PopulateError>() {
        return match e {
            PopulateError::InvalidArgument(_) => 2,
            PopulateError::Io(_) | PopulateError::Csv(_) | PopulateError::Metrics(_) => 3,
        };
    }
    if let Some(e) = err.downcast_ref::<AnalyzeError>() {
        return match e {
            AnalyzeError::InvalidDegree { .. } => 2,
            AnalyzeError::Io(_) | AnalyzeError::Chart(_) | AnalyzeError::Report(_) => 3,
            AnalyzeError::Parse { .. } => 4,
            AnalyzeError::InsufficientData { .. } | AnalyzeError::SingularFit { .. } => 5,
        };
    }
    1
}
