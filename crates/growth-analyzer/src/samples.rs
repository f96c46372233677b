//! Measurement sample loading and validation.

use crate::error::AnalyzeError;
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Expected header of a measurement table.
pub const EXPECTED_HEADER: [&str; 2] = ["record_count", "size_in_bytes"];

/// One measurement round: how many records were loaded and how much
/// disk space the table occupied afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub record_count: u64,
    pub size_in_bytes: u64,
}

/// Load all samples from a measurement CSV.
///
/// Parsing is strict: any malformed row aborts the load rather than
/// being skipped or coerced, and `record_count` must be strictly
/// increasing from row to row.
pub fn load_samples(path: &Path) -> Result<Vec<Sample>, AnalyzeError> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let header_ok = headers.len() == EXPECTED_HEADER.len()
        && headers
            .iter()
            .zip(EXPECTED_HEADER)
            .all(|(got, want)| got.trim() == want);
    if !header_ok {
        return Err(AnalyzeError::Parse {
            line: 1,
            message: format!(
                "expected header '{},{}'",
                EXPECTED_HEADER[0], EXPECTED_HEADER[1]
            ),
        });
    }

    let mut samples: Vec<Sample> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let record_count = parse_field(&record[0], EXPECTED_HEADER[0], line)?;
        let size_in_bytes = parse_field(&record[1], EXPECTED_HEADER[1], line)?;

        if let Some(last) = samples.last() {
            if record_count <= last.record_count {
                return Err(AnalyzeError::Parse {
                    line,
                    message: format!(
                        "record_count {} does not increase over preceding {}",
                        record_count, last.record_count
                    ),
                });
            }
        }
        samples.push(Sample {
            record_count,
            size_in_bytes,
        });
    }

    debug!("Loaded {} samples from '{}'", samples.len(), path.display());
    Ok(samples)
}

fn parse_field(raw: &str, name: &str, line: u64) -> Result<u64, AnalyzeError> {
    raw.trim().parse().map_err(|_| AnalyzeError::Parse {
        line,
        message: format!("non-numeric {name}: '{raw}'"),
    })
}

/// Convert a csv crate error, keeping IO failures distinct from
/// malformed input.
fn csv_error(err: csv::Error) -> AnalyzeError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => AnalyzeError::Io(io),
        _ => AnalyzeError::Parse { line, message },
    }
}
