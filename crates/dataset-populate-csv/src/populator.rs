//! CSV populator writing bulk-loader-ready message datasets.

use crate::error::PopulateError;
use csv::Writer;
use message_generator::{MessageGenerator, MessageRecord};
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Rows between progress log lines.
const PROGRESS_CHUNK: u64 = 10_000;

/// CSV column order expected by the bulk loader.
pub const COLUMNS: [&str; 15] = [
    "chat_id",
    "bucket",
    "chat_msg_local_id",
    "flags",
    "date",
    "update_time",
    "author_id",
    "text",
    "kludges",
    "forwarded",
    "forwarded_message_ids",
    "mentions",
    "marked_users",
    "ttl",
    "deleted_for_all",
];

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Number of files written.
    pub files_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Combined output size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Average bytes per written row.
    pub fn bytes_per_row(&self) -> f64 {
        if self.rows_written > 0 {
            self.file_size_bytes as f64 / self.rows_written as f64
        } else {
            0.0
        }
    }
}

/// CSV populator that writes generated message datasets.
///
/// Output files appear atomically: rows are written to a temp file in
/// the destination directory and persisted to the final name only after
/// the full count succeeded, so a failed run leaves no partial dataset.
pub struct CsvPopulator {
    generator: MessageGenerator,
}

impl CsvPopulator {
    /// Create a new populator with the given generator seed.
    pub fn new(seed: u64) -> Self {
        Self {
            generator: MessageGenerator::new(seed),
        }
    }

    /// Pin every generated row to a single chat partition.
    pub fn with_chat_id(mut self, chat_id: i64) -> Self {
        self.generator = std::mem::replace(&mut self.generator, MessageGenerator::new(0))
            .with_chat_id(chat_id);
        self
    }

    /// Generate a single CSV file with `count` rows.
    pub fn populate(&mut self, output_path: &Path, count: u64) -> Result<PopulateMetrics, PopulateError> {
        if count == 0 {
            return Err(PopulateError::InvalidArgument(
                "row count must be greater than zero".to_string(),
            ));
        }

        let start_time = Instant::now();
        info!("Generating {} messages into '{}'", count, output_path.display());

        let file_size_bytes = self.write_part(output_path, count)?;
        let metrics = PopulateMetrics {
            rows_written: count,
            files_written: 1,
            total_duration: start_time.elapsed(),
            file_size_bytes,
        };

        info!(
            "CSV generation complete: {} rows, {} bytes in {:?} ({:.1} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );
        Ok(metrics)
    }

    /// Generate several part files under `output_dir`, `records_per_file`
    /// rows each, carrying the generator state across files so key
    /// uniqueness spans the whole run.
    pub fn populate_dir(
        &mut self,
        output_dir: &Path,
        count: u64,
        records_per_file: u64,
    ) -> Result<PopulateMetrics, PopulateError> {
        if count == 0 {
            return Err(PopulateError::InvalidArgument(
                "row count must be greater than zero".to_string(),
            ));
        }
        if records_per_file == 0 {
            return Err(PopulateError::InvalidArgument(
                "records per file must be greater than zero".to_string(),
            ));
        }

        fs::create_dir_all(output_dir)?;

        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        let mut remaining = count;
        let mut part = 0u64;

        while remaining > 0 {
            part += 1;
            let rows = remaining.min(records_per_file);
            let path = output_dir.join(format!("messages_part_{part:04}.csv"));

            info!("Writing part {}: {} rows into '{}'", part, rows, path.display());
            metrics.file_size_bytes += self.write_part(&path, rows)?;
            metrics.rows_written += rows;
            metrics.files_written += 1;
            remaining -= rows;
        }

        metrics.total_duration = start_time.elapsed();
        info!(
            "CSV generation complete: {} rows across {} files, {} bytes in {:?}",
            metrics.rows_written, metrics.files_written, metrics.file_size_bytes, metrics.total_duration
        );
        Ok(metrics)
    }

    /// Write one CSV file and return its size in bytes.
    fn write_part(&mut self, output_path: &Path, count: u64) -> Result<u64, PopulateError> {
        let parent = match output_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(parent)?;

        {
            let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, tmp.as_file_mut());
            let mut writer = Writer::from_writer(buf_writer);
            writer.write_record(COLUMNS)?;

            for i in 0..count {
                let record = self.generator.next_record();
                writer.write_record(record_to_csv(&record))?;

                if (i + 1) % PROGRESS_CHUNK == 0 {
                    debug!("{} / {} rows written", i + 1, count);
                }
            }
            writer.flush()?;
        }

        let file = tmp.persist(output_path).map_err(|e| PopulateError::Io(e.error))?;
        file.sync_all()?;
        Ok(file.metadata()?.len())
    }
}

/// Convert a message record to a CSV record in [`COLUMNS`] order.
fn record_to_csv(record: &MessageRecord) -> Vec<String> {
    vec![
        record.chat_id.to_string(),
        record.bucket.to_string(),
        record.chat_msg_local_id.to_string(),
        record.flags.to_string(),
        record.date.to_string(),
        record.update_time.to_string(),
        record.author_id.to_string(),
        record.text.clone(),
        record.kludges.clone(),
        record.forwarded.to_string(),
        encode_id_list(&record.forwarded_message_ids),
        record.mentions.clone(),
        encode_id_list(&record.marked_users),
        record.ttl.to_string(),
        record.deleted_for_all.to_string(),
    ]
}

/// Bracketed integer-list encoding understood by the bulk loader:
/// `[1,2,3]`, empty list as `[]`.
pub(crate) fn encode_id_list(ids: &[i64]) -> String {
    let body = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",");
    format!("[{body}]")
}

/// Write populate metrics as pretty-printed JSON.
pub fn write_metrics(path: &Path, metrics: &PopulateMetrics) -> Result<(), PopulateError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, metrics)?;
    info!("Metrics written to '{}'", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn read_rows(path: &Path) -> Vec<csv::StringRecord> {
        let mut reader = csv::Reader::from_path(path).unwrap();
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            COLUMNS.to_vec()
        );
        reader.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn test_populate_writes_exact_row_count() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.csv");

        let metrics = CsvPopulator::new(42).populate(&path, 500).unwrap();

        assert_eq!(metrics.rows_written, 500);
        assert_eq!(metrics.files_written, 1);
        assert_eq!(metrics.file_size_bytes, fs::metadata(&path).unwrap().len());
        assert_eq!(read_rows(&path).len(), 500);
    }

    #[test]
    fn test_populate_keys_unique() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.csv");

        CsvPopulator::new(42).populate(&path, 2_000).unwrap();

        let mut keys = HashSet::new();
        for row in read_rows(&path) {
            let key = (row[0].to_string(), row[1].to_string(), row[2].to_string());
            assert!(keys.insert(key), "duplicate key in output");
        }
        assert_eq!(keys.len(), 2_000);
    }

    #[test]
    fn test_zero_count_rejected_without_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.csv");

        let result = CsvPopulator::new(42).populate(&path, 0);

        assert!(matches!(result, Err(PopulateError::InvalidArgument(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_same_seed_same_bytes() {
        let dir = TempDir::new().unwrap();
        let path1 = dir.path().join("a.csv");
        let path2 = dir.path().join("b.csv");

        CsvPopulator::new(42).populate(&path1, 300).unwrap();
        CsvPopulator::new(42).populate(&path2, 300).unwrap();

        assert_eq!(fs::read(&path1).unwrap(), fs::read(&path2).unwrap());
    }

    #[test]
    fn test_populate_dir_splits_into_parts() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("parts");

        let metrics = CsvPopulator::new(42).populate_dir(&out, 2_500, 1_000).unwrap();

        assert_eq!(metrics.rows_written, 2_500);
        assert_eq!(metrics.files_written, 3);
        assert_eq!(read_rows(&out.join("messages_part_0001.csv")).len(), 1_000);
        assert_eq!(read_rows(&out.join("messages_part_0002.csv")).len(), 1_000);
        assert_eq!(read_rows(&out.join("messages_part_0003.csv")).len(), 500);
    }

    #[test]
    fn test_populate_dir_keys_unique_across_parts() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("parts");

        CsvPopulator::new(42)
            .with_chat_id(1)
            .populate_dir(&out, 2_200, 1_000)
            .unwrap();

        let mut keys = HashSet::new();
        for part in 1..=3u32 {
            for row in read_rows(&out.join(format!("messages_part_{part:04}.csv"))) {
                let key = (row[0].to_string(), row[1].to_string(), row[2].to_string());
                assert!(keys.insert(key), "duplicate key across part files");
            }
        }
        assert_eq!(keys.len(), 2_200);
    }

    #[test]
    fn test_list_fields_bracket_encoded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.csv");

        CsvPopulator::new(42).populate(&path, 1_000).unwrap();

        let mut nonempty_lists = 0;
        for row in read_rows(&path) {
            for field in [&row[10], &row[12]] {
                assert!(field.starts_with('[') && field.ends_with(']'), "bad list: {field}");
                if field != "[]" {
                    nonempty_lists += 1;
                    let inner = &field[1..field.len() - 1];
                    assert!(inner.split(',').all(|id| id.parse::<i64>().is_ok()));
                }
            }
        }
        assert!(nonempty_lists > 0, "expected some non-empty list fields");
    }

    #[test]
    fn test_encode_id_list() {
        assert_eq!(encode_id_list(&[]), "[]");
        assert_eq!(encode_id_list(&[7]), "[7]");
        assert_eq!(encode_id_list(&[1, 2, 3]), "[1,2,3]");
    }

    #[test]
    fn test_write_metrics_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metrics.json");

        let metrics = PopulateMetrics {
            rows_written: 10,
            files_written: 1,
            total_duration: Duration::from_millis(5),
            file_size_bytes: 1_234,
        };
        write_metrics(&path, &metrics).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["rows_written"], 10);
        assert_eq!(parsed["file_size_bytes"], 1_234);
    }
}
