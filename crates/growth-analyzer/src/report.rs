//! Analysis report assembly and presentation.

use crate::fit::PolyFit;
use crate::samples::Sample;
use serde::Serialize;
use std::fmt;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Projected size of the table at a hypothetical record count.
///
/// A straight evaluation of the fitted curve, with no error bounds:
/// the fit only describes the sampled range.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Projection {
    pub record_count: u64,
    pub size_in_bytes: f64,
}

/// Everything the analyzer learned from one measurement table.
#[derive(Debug, Clone, Serialize)]
pub struct GrowthReport {
    pub samples: usize,
    pub degree: usize,
    /// `coefficients[k]` multiplies `x^k`.
    pub coefficients: Vec<f64>,
    pub r_squared: f64,
    pub formula: String,
    /// Bytes per record at the largest measured count.
    pub bytes_per_record: f64,
    pub projection: Option<Projection>,
}

impl GrowthReport {
    pub fn new(samples: &[Sample], fit: &PolyFit, projection: Option<Projection>) -> Self {
        let bytes_per_record = samples
            .last()
            .filter(|s| s.record_count > 0)
            .map(|s| s.size_in_bytes as f64 / s.record_count as f64)
            .unwrap_or(0.0);

        Self {
            samples: samples.len(),
            degree: fit.degree,
            coefficients: fit.coefficients.clone(),
            r_squared: fit.r_squared,
            formula: fit.formula(),
            bytes_per_record,
            projection,
        }
    }
}

impl fmt::Display for GrowthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "samples:          {}", self.samples)?;
        writeln!(f, "fit:              {}", self.formula)?;
        writeln!(f, "degree:           {}", self.degree)?;
        writeln!(f, "r_squared:        {:.6}", self.r_squared)?;
        write!(f, "bytes_per_record: {:.1}", self.bytes_per_record)?;
        if let Some(projection) = self.projection {
            write!(
                f,
                "\nprojected size at {} records: {:.0} bytes ({:.2} GB)",
                projection.record_count,
                projection.size_in_bytes,
                projection.size_in_bytes / BYTES_PER_GB
            )?;
        }
        Ok(())
    }
}
