//! Loss functions shared by the solvers in [`crate::linear_model`].

use crate::error::{FitError, FitResult, check_samples, check_weights};
use crate::{Matrix, Vector};

/// Additive guard inside each logarithm of [`compute_log_loss`].
///
/// Keeps `ln(0)` out of the computation when predicted probabilities
/// saturate at exactly 0 or 1. The price is a small bias near the
/// boundary: a perfect confident prediction scores about `-LOG_EPSILON`
/// instead of 0.
pub const LOG_EPSILON: f64 = 1e-5;

/// Mean squared error with the 1/2 factor: `(1/2N) * sum((y_i - x_i^T w)^2)`.
pub fn compute_loss(y: &Vector, x: &Matrix, w: &Vector) -> FitResult<f64> {
    check_samples(x.nrows(), y.len())?;
    check_weights(x.ncols(), w.len())?;

    let residuals = y - &x.dot(w);
    let n_samples = y.len() as f64;
    Ok(residuals.mapv(|r| r * r).sum() / (2.0 * n_samples))
}

/// Mean binary cross-entropy between labels in {0, 1} and probabilities.
pub fn compute_log_loss(y: &Vector, y_hat: &Vector) -> FitResult<f64> {
    if y.len() != y_hat.len() {
        return Err(FitError::DimensionMismatch {
            what: "labels and predictions",
            expected: y.len(),
            found: y_hat.len(),
        });
    }
    if y.is_empty() {
        return Err(FitError::EmptyInput);
    }

    let total = y
        .iter()
        .zip(y_hat.iter())
        .map(|(&label, &p)| {
            label * (p + LOG_EPSILON).ln() + (1.0 - label) * (1.0 - p + LOG_EPSILON).ln()
        })
        .sum::<f64>();

    Ok(-total / y.len() as f64)
}
