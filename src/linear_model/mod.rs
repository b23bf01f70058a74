//! Linear solvers for regression and binary classification.
//!
//! Every routine is a plain function over a design matrix `x` (N x D) and
//! targets `y` (length N):
//! - [`least_squares`], [`ridge_regression`]: closed-form normal equations
//! - [`least_squares_gd`], [`least_squares_sgd`]: iterative least squares
//! - [`logistic_regression`], [`reg_logistic_regression`]: mini-batch
//!   descent on the log-loss with a separate bias term
//!
//! # Examples
//!
//! ```rust
//! use tabular_fit::{least_squares, least_squares_gd, Verbosity};
//! use ndarray::array;
//!
//! let x = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
//! let y = array![1.0, 2.0, 3.0];
//!
//! let (w, loss) = least_squares(&y, &x).unwrap();
//! assert!((w[0] - 1.0).abs() < 1e-10 && loss < 1e-20);
//!
//! let w0 = array![0.0, 0.0];
//! let (w, _) = least_squares_gd(&y, &x, &w0, 500, 0.5, Verbosity::Silent).unwrap();
//! assert!((w[1] - 2.0).abs() < 1e-6);
//! ```

mod closed_form;
mod gradient_descent;
mod logistic;

pub use closed_form::{SINGULAR_PIVOT_RTOL, least_squares, ridge_regression};
pub use gradient_descent::{SGD_BATCH_DIVISOR, least_squares_gd, least_squares_sgd};
pub use logistic::{LOGISTIC_BATCH_SIZE, LogisticFit, logistic_regression, reg_logistic_regression};

/// Progress reporting for the iterative solvers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    #[default]
    Silent,
    /// Emit one `log::info!` line per iteration or epoch.
    Info,
}

impl Verbosity {
    pub(crate) fn is_info(self) -> bool {
        self >= Verbosity::Info
    }
}
