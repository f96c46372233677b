//! growth-bench library surface.
//!
//! Two independent batch tools composed only through files:
//!
//! - the dataset generator writes synthetic message CSVs for bulk
//!   loading into a clustered table;
//! - the growth analyzer fits a regression curve to the
//!   `(record_count, size_in_bytes)` measurements collected after each
//!   load round.
//!
//! Re-exported here so integration tests and downstream code can reach
//! both through one crate.

pub use dataset_populate_csv as populate;
pub use growth_analyzer as analyzer;
pub use message_generator as generator;
