use crate::Vector;
use crate::error::{FitError, FitResult};

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> FitResult<()> {
    if y_true.len() != y_pred.len() {
        return Err(FitError::DimensionMismatch {
            what: "y_true and y_pred",
            expected: y_true.len(),
            found: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(FitError::EmptyInput);
    }
    Ok(())
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> FitResult<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x * x).sum() / y_true.len() as f64)
}

pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> FitResult<f64> {
    check_lengths(y_true, y_pred)?;

    let y_mean = y_true.sum() / y_true.len() as f64;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(1.0); // constant target
    }

    Ok(1.0 - ss_res / ss_tot)
}

/// Fraction of exactly matching labels.
pub fn accuracy(y_true: &Vector, y_pred: &Vector) -> FitResult<f64> {
    check_lengths(y_true, y_pred)?;

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|&(a, b)| (a - b).abs() < 1e-10)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}
