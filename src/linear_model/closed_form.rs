use crate::error::{FitError, FitResult, check_samples};
use crate::loss::compute_loss;
use crate::{Matrix, Vector};

/// Relative pivot cutoff.
///
/// A pivot at or below `SINGULAR_PIVOT_RTOL * n * max|a_ij|` marks the system as
/// singular, so the test follows the scale of `X^T X` rather than the raw
/// feature magnitudes.
pub const SINGULAR_PIVOT_RTOL: f64 = f64::EPSILON;

/// Least squares via the normal equations `X^T X w = X^T y`.
///
/// Returns the weights and the loss from [`compute_loss`].
pub fn least_squares(y: &Vector, x: &Matrix) -> FitResult<(Vector, f64)> {
    check_samples(x.nrows(), y.len())?;

    let w = solve_normal_equation(x, y, 0.0)?;
    let loss = compute_loss(y, x, &w)?;
    log::debug!("least squares: n={} d={} loss={:e}", x.nrows(), x.ncols(), loss);
    Ok((w, loss))
}

/// Ridge regression via `(X^T X + 2 N lambda I) w = X^T y`.
///
/// The `2N` factor matches the `1/2N` normalization of [`compute_loss`],
/// so `lambda = 0` gives exactly [`least_squares`]. A negative `lambda` is
/// not rejected.
pub fn ridge_regression(y: &Vector, x: &Matrix, lambda: f64) -> FitResult<(Vector, f64)> {
    check_samples(x.nrows(), y.len())?;

    let penalty = 2.0 * x.nrows() as f64 * lambda;
    let w = solve_normal_equation(x, y, penalty)?;
    let loss = compute_loss(y, x, &w)?;
    log::debug!(
        "ridge regression: n={} d={} lambda={} loss={:e}",
        x.nrows(),
        x.ncols(),
        lambda,
        loss
    );
    Ok((w, loss))
}

fn solve_normal_equation(x: &Matrix, y: &Vector, diagonal_shift: f64) -> FitResult<Vector> {
    let xt = x.t();
    let mut gram = xt.dot(x);
    for i in 0..gram.nrows() {
        gram[(i, i)] += diagonal_shift;
    }

    let xty = xt.dot(y);
    solve_linear_system(&gram, &xty)
}

/// Gaussian elimination with partial pivoting on the augmented `[a | b]`.
fn solve_linear_system(a: &Matrix, b: &Vector) -> FitResult<Vector> {
    let n = a.nrows();
    let mut aug = Matrix::zeros((n, n + 1));
    aug.slice_mut(ndarray::s![.., ..n]).assign(a);
    aug.column_mut(n).assign(b);

    let scale = a.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let tolerance = SINGULAR_PIVOT_RTOL * n as f64 * scale;

    for i in 0..n {
        let mut max_row = i;
        for k in (i + 1)..n {
            if aug[(k, i)].abs() > aug[(max_row, i)].abs() {
                max_row = k;
            }
        }

        let pivot = aug[(max_row, i)].abs();
        if pivot == 0.0 || pivot <= tolerance {
            return Err(FitError::SingularMatrix);
        }

        if max_row != i {
            for j in 0..=n {
                aug.swap((i, j), (max_row, j));
            }
        }

        for k in (i + 1)..n {
            let factor = aug[(k, i)] / aug[(i, i)];
            for j in i..=n {
                aug[(k, j)] -= factor * aug[(i, j)];
            }
        }
    }

    let mut x = Vector::zeros(n);
    for i in (0..n).rev() {
        x[i] = aug[(i, n)];
        for j in (i + 1)..n {
            x[i] -= aug[(i, j)] * x[j];
        }
        x[i] /= aug[(i, i)];
    }

    Ok(x)
}
