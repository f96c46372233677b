//! CSV dataset populator for storage growth benchmarking.
//!
//! This crate writes synthetic message records from the
//! `message-generator` crate into bulk-loader-ready CSV files: UTF-8,
//! comma-delimited, header row, list fields bracket-encoded (`[1,2,3]`).
//!
//! # Example
//!
//! ```ignore
//! use dataset_populate_csv::CsvPopulator;
//!
//! let mut populator = CsvPopulator::new(42);
//!
//! // Write 1000 rows to a single CSV file
//! let metrics = populator.populate("/path/to/messages.csv".as_ref(), 1000)?;
//! println!("{} rows, {} bytes", metrics.rows_written, metrics.file_size_bytes);
//! ```

pub mod args;
mod error;
mod populator;

pub use args::GenerateArgs;
pub use error::PopulateError;
pub use populator::{write_metrics, CsvPopulator, PopulateMetrics, COLUMNS};
