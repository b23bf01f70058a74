use ndarray::s;

use super::Verbosity;
use crate::error::{FitResult, check_binary_labels, check_samples, check_weights};
use crate::gradient::gradients;
use crate::loss::compute_log_loss;
use crate::predict::sigmoid;
use crate::{Matrix, Vector};

/// Rows per mini-batch; the last batch of an epoch may be shorter.
pub const LOGISTIC_BATCH_SIZE: usize = 100;

/// Parameters and per-epoch log-loss returned by the logistic solvers.
#[derive(Clone, Debug, PartialEq)]
pub struct LogisticFit {
    pub weights: Vector,
    pub bias: f64,
    /// Full-dataset log-loss after each epoch; `losses.len() == max_iters`.
    pub losses: Vec<f64>,
}

impl LogisticFit {
    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}

/// Mini-batch logistic regression.
///
/// Each epoch walks the rows in order in slices of [`LOGISTIC_BATCH_SIZE`]
/// and applies `w -= gamma * dw`, `b -= gamma * db` per slice. The bias
/// starts at zero. Labels must be 0 or 1.
pub fn logistic_regression(
    y: &Vector,
    x: &Matrix,
    initial_w: &Vector,
    max_iters: usize,
    gamma: f64,
    verbosity: Verbosity,
) -> FitResult<LogisticFit> {
    train_logistic(y, x, initial_w, max_iters, gamma, 0.0, verbosity)
}

/// Logistic regression with a squared-gradient penalty.
///
/// Same batching as [`logistic_regression`], but every step subtracts
/// `gamma * g + lambda * g^2` (element-wise, `g` being `dw` or `db`).
/// Note that this scales the squared gradient, not the weights, so it is
/// not the usual `lambda * ||w||^2` L2 penalty.
pub fn reg_logistic_regression(
    y: &Vector,
    x: &Matrix,
    lambda: f64,
    initial_w: &Vector,
    max_iters: usize,
    gamma: f64,
    verbosity: Verbosity,
) -> FitResult<LogisticFit> {
    train_logistic(y, x, initial_w, max_iters, gamma, lambda, verbosity)
}

fn train_logistic(
    y: &Vector,
    x: &Matrix,
    initial_w: &Vector,
    epochs: usize,
    gamma: f64,
    lambda: f64,
    verbosity: Verbosity,
) -> FitResult<LogisticFit> {
    check_samples(x.nrows(), y.len())?;
    check_weights(x.ncols(), initial_w.len())?;
    check_binary_labels(y)?;

    let n_samples = x.nrows();
    let step = |g: f64| gamma * g + lambda * g * g;

    let mut w = initial_w.clone();
    let mut b = 0.0;
    let mut losses = Vec::with_capacity(epochs);

    for epoch in 0..epochs {
        for start in (0..n_samples).step_by(LOGISTIC_BATCH_SIZE) {
            let end = (start + LOGISTIC_BATCH_SIZE).min(n_samples);
            let x_batch = x.slice(s![start..end, ..]);
            let y_batch = y.slice(s![start..end]);

            let y_hat = (x_batch.dot(&w) + b).mapv(sigmoid);
            let (dw, db) = gradients(x_batch, y_batch, y_hat.view());

            w.zip_mut_with(&dw, |wi, &g| *wi -= step(g));
            b -= step(db);
        }

        let probabilities = (x.dot(&w) + b).mapv(sigmoid);
        let loss = compute_log_loss(y, &probabilities)?;
        losses.push(loss);

        if verbosity.is_info() {
            log::info!("logistic epoch {}/{} loss={:.6}", epoch + 1, epochs, loss);
        }
    }

    log::debug!(
        "logistic training done: n={} d={} epochs={} lambda={}",
        n_samples,
        x.ncols(),
        epochs,
        lambda
    );

    Ok(LogisticFit {
        weights: w,
        bias: b,
        losses,
    })
}
