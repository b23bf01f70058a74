//! Inference-time helpers for weights produced by [`crate::linear_model`].

use crate::error::{FitResult, check_weights};
use crate::{Matrix, Vector};

/// Probability at or above which [`predict_labels`] assigns class 1.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Logistic function `1 / (1 + e^-z)`.
///
/// Finite for every `z`: for large negative `z` the exponential overflows
/// to infinity and the result is exactly 0.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Linear predictions `X w` for regression weights.
pub fn predict_linear(x: &Matrix, w: &Vector) -> FitResult<Vector> {
    check_weights(x.ncols(), w.len())?;
    Ok(x.dot(w))
}

/// Class-1 probabilities `sigmoid(X w + b)`.
pub fn predict_proba(x: &Matrix, w: &Vector, bias: f64) -> FitResult<Vector> {
    check_weights(x.ncols(), w.len())?;
    let logits = x.dot(w) + bias;
    Ok(logits.mapv(sigmoid))
}

/// Hard 0/1 labels: 1 where the probability reaches [`DECISION_THRESHOLD`].
pub fn predict_labels(x: &Matrix, w: &Vector, bias: f64) -> FitResult<Vector> {
    let probabilities = predict_proba(x, w, bias)?;
    Ok(probabilities.mapv(|p| if p >= DECISION_THRESHOLD { 1.0 } else { 0.0 }))
}
