//! Least-squares polynomial fitting.
//!
//! Fits `size_in_bytes` as a polynomial of `record_count` by solving the
//! normal equations of the Vandermonde system with Gaussian elimination.
//! The fit is descriptive: it summarizes the sampled range and makes no
//! claim beyond it.

use crate::error::AnalyzeError;
use crate::samples::Sample;
use serde::Serialize;

/// Largest supported polynomial degree. Raw-x normal equations lose
/// precision quickly beyond this.
pub const MAX_DEGREE: usize = 6;

/// Default degree of the fitted curve.
pub const DEFAULT_DEGREE: usize = 2;

/// Minimum number of samples for any fit.
pub const MIN_SAMPLES: usize = 2;

/// A fitted polynomial: `coefficients[k]` multiplies `x^k`.
#[derive(Debug, Clone, Serialize)]
pub struct PolyFit {
    pub degree: usize,
    pub coefficients: Vec<f64>,
    /// Coefficient of determination against the sample mean.
    pub r_squared: f64,
}

impl PolyFit {
    /// Evaluate the polynomial at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }

    /// Human-readable formula, highest-order term first.
    pub fn formula(&self) -> String {
        let terms: Vec<String> = self
            .coefficients
            .iter()
            .enumerate()
            .rev()
            .map(|(power, coeff)| match power {
                0 => format!("{coeff:.4}"),
                1 => format!("{coeff:.4}*x"),
                _ => format!("{coeff:.4e}*x^{power}"),
            })
            .collect();
        format!("y = {}", terms.join(" + "))
    }
}

/// Fit a least-squares polynomial of the given degree to the samples.
pub fn fit_polynomial(samples: &[Sample], degree: usize) -> Result<PolyFit, AnalyzeError> {
    if degree == 0 || degree > MAX_DEGREE {
        return Err(AnalyzeError::InvalidDegree { degree });
    }
    let required = MIN_SAMPLES.max(degree + 1);
    if samples.len() < required {
        return Err(AnalyzeError::InsufficientData {
            required,
            actual: samples.len(),
        });
    }

    let xs: Vec<f64> = samples.iter().map(|s| s.record_count as f64).collect();
    let ys: Vec<f64> = samples.iter().map(|s| s.size_in_bytes as f64).collect();

    // Normal equations: matrix[i][j] = sum(x^(i+j)), rhs[i] = sum(x^i * y).
    let n = degree + 1;
    let mut moments = vec![0.0; 2 * degree + 1];
    for &x in &xs {
        let mut power = 1.0;
        for moment in moments.iter_mut() {
            *moment += power;
            power *= x;
        }
    }
    let mut rhs = vec![0.0; n];
    for (&x, &y) in xs.iter().zip(&ys) {
        let mut power = 1.0;
        for r in rhs.iter_mut() {
            *r += power * y;
            power *= x;
        }
    }
    let mut matrix: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| moments[i + j]).collect())
        .collect();

    let coefficients =
        solve(&mut matrix, &mut rhs).ok_or(AnalyzeError::SingularFit { degree })?;

    let mean = ys.iter().sum::<f64>() / ys.len() as f64;
    let ss_tot: f64 = ys.iter().map(|y| (y - mean).powi(2)).sum();
    let fit = PolyFit {
        degree,
        coefficients,
        r_squared: 1.0,
    };
    let ss_res: f64 = xs
        .iter()
        .zip(&ys)
        .map(|(&x, &y)| (y - fit.evaluate(x)).powi(2))
        .sum();
    let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 1.0 };

    Ok(PolyFit { r_squared, ..fit })
}

/// Solve `matrix * x = rhs` by Gaussian elimination with partial
/// pivoting. Returns `None` when the system is singular.
fn solve(matrix: &mut [Vec<f64>], rhs: &mut [f64]) -> Option<Vec<f64>> {
    let n = rhs.len();

    for col in 0..n {
        let pivot_row = (col..n).max_by(|&a, &b| {
            matrix[a][col]
                .abs()
                .partial_cmp(&matrix[b][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if matrix[pivot_row][col].abs() < f64::EPSILON {
            return None;
        }
        matrix.swap(col, pivot_row);
        rhs.swap(col, pivot_row);

        for row in col + 1..n {
            let factor = matrix[row][col] / matrix[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                matrix[row][k] -= factor * matrix[col][k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    let mut solution = vec![0.0; n];
    for row in (0..n).rev() {
        let mut acc = rhs[row];
        for k in row + 1..n {
            acc -= matrix[row][k] * solution[k];
        }
        solution[row] = acc / matrix[row][row];
    }
    Some(solution)
}
