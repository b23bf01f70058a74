use crate::{ArrayView1, ArrayView2, Vector};

/// Weight and bias gradients of the log-loss for a batch of `m` rows.
///
/// Returns `dw = (1/m) * X^T (y_hat - y)` and `db = (1/m) * sum(y_hat - y)`.
///
/// # Panics
///
/// Panics if `y` and `y_hat` differ in length or do not match the row
/// count of `x`. Callers slice all three from the same row range.
pub fn gradients(x: ArrayView2<f64>, y: ArrayView1<f64>, y_hat: ArrayView1<f64>) -> (Vector, f64) {
    let m = x.nrows() as f64;
    let error = &y_hat - &y;

    let dw = x.t().dot(&error) / m;
    let db = error.sum() / m;
    (dw, db)
}
