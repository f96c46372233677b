//! End-to-end tests for the analysis path: measurement CSV in, fitted
//! report and chart out.

use growth_bench::analyzer::{run_analysis, AnalyzeArgs, AnalyzeError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_measurements(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("measurements.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn args(input: PathBuf, chart: PathBuf) -> AnalyzeArgs {
    AnalyzeArgs {
        input,
        degree: 1,
        chart,
        project: None,
        json: None,
    }
}

const MEASURED: &str = "record_count,size_in_bytes\n\
    1000,233561\n\
    2000,456033\n\
    4000,919431\n\
    8000,1828982\n";

#[test]
fn linear_fit_reports_bytes_per_record_slope() {
    let dir = TempDir::new().unwrap();
    let input = write_measurements(dir.path(), MEASURED);
    let chart = dir.path().join("growth.png");

    let report = run_analysis(&args(input, chart.clone())).unwrap();

    assert_eq!(report.samples, 4);
    assert_eq!(report.degree, 1);
    let slope = report.coefficients[1];
    assert!(
        (225.0..=236.0).contains(&slope),
        "slope {slope} outside the expected band"
    );
    assert!(report.r_squared > 0.99);

    // Chart artifact is a real PNG
    let bytes = std::fs::read(&chart).unwrap();
    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
}

#[test]
fn projection_evaluates_fitted_curve() {
    let dir = TempDir::new().unwrap();
    let input = write_measurements(dir.path(), MEASURED);

    let mut analyze_args = args(input, dir.path().join("growth.png"));
    analyze_args.project = Some(1_000_000);

    let report = run_analysis(&analyze_args).unwrap();

    let projection = report.projection.unwrap();
    assert_eq!(projection.record_count, 1_000_000);
    // ~228 bytes/record at a million records
    assert!(projection.size_in_bytes > 2.0e8 && projection.size_in_bytes < 2.6e8);
}

#[test]
fn json_report_is_written_when_requested() {
    let dir = TempDir::new().unwrap();
    let input = write_measurements(dir.path(), MEASURED);

    let mut analyze_args = args(input, dir.path().join("growth.png"));
    analyze_args.json = Some(dir.path().join("report.json"));

    run_analysis(&analyze_args).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("report.json")).unwrap())
            .unwrap();
    assert_eq!(parsed["samples"], 4);
    assert_eq!(parsed["degree"], 1);
}

#[test]
fn single_sample_is_insufficient() {
    let dir = TempDir::new().unwrap();
    let input = write_measurements(dir.path(), "record_count,size_in_bytes\n1000,233561\n");

    let result = run_analysis(&args(input, dir.path().join("growth.png")));

    assert!(matches!(
        result,
        Err(AnalyzeError::InsufficientData { required: 2, actual: 1 })
    ));
}

#[test]
fn malformed_size_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    let input = write_measurements(
        dir.path(),
        "record_count,size_in_bytes\n1000,233561\n2000,not-a-number\n",
    );
    let chart = dir.path().join("growth.png");

    let result = run_analysis(&args(input, chart.clone()));

    assert!(matches!(result, Err(AnalyzeError::Parse { line: 3, .. })));
    // A void run produces no artifacts
    assert!(!chart.exists());
}

#[test]
fn missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();

    let result = run_analysis(&args(
        dir.path().join("does-not-exist.csv"),
        dir.path().join("growth.png"),
    ));

    assert!(matches!(result, Err(AnalyzeError::Io(_))));
}

#[test]
fn out_of_range_degree_is_invalid_argument() {
    let dir = TempDir::new().unwrap();
    let input = write_measurements(dir.path(), MEASURED);

    let mut analyze_args = args(input, dir.path().join("growth.png"));
    analyze_args.degree = 9;

    let result = run_analysis(&analyze_args);
    assert!(matches!(result, Err(AnalyzeError::InvalidDegree { degree: 9 })));
}
