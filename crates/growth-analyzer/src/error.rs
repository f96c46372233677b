//! Error types for the growth analyzer.

use thiserror::Error;

/// Errors that can occur during growth analysis.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// Polynomial degree outside the supported range.
    #[error("invalid degree {degree}: must be between 1 and {}", crate::fit::MAX_DEGREE)]
    InvalidDegree { degree: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed measurement row; `line` is 1-based within the input file.
    #[error("parse error at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Too few samples for the requested fit.
    #[error("insufficient data: {actual} samples, need at least {required}")]
    InsufficientData { required: usize, actual: usize },

    /// The normal-equation system could not be solved.
    #[error("degenerate sample set: cannot fit a degree-{degree} polynomial")]
    SingularFit { degree: usize },

    /// Chart rendering error.
    #[error("chart rendering failed: {0}")]
    Chart(String),

    /// Report serialization error.
    #[error("failed to write report: {0}")]
    Report(#[from] serde_json::Error),
}
