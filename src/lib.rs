pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod error;
pub mod gradient;
pub mod linear_model;
pub mod loss;
pub mod metrics;
pub mod predict;

pub use error::{FitError, FitResult};
pub use gradient::gradients;
pub use linear_model::{
    LogisticFit, Verbosity, least_squares, least_squares_gd, least_squares_sgd, logistic_regression,
    reg_logistic_regression, ridge_regression,
};
pub use loss::{LOG_EPSILON, compute_log_loss, compute_loss};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
