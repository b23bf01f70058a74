use crate::Vector;

/// Crate-wide result alias for fitting and evaluation.
pub type FitResult<T> = Result<T, FitError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    /// Two inputs disagree on a dimension (rows of X vs. len(y), D vs. len(w), ...).
    #[error("dimension mismatch for {what}: expected {expected}, got {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("input must contain at least one sample")]
    EmptyInput,

    /// The normal-equation system has a (near-)zero pivot.
    #[error("matrix is singular or nearly singular")]
    SingularMatrix,

    #[error("need at least {needed} samples, got {found}")]
    InsufficientSamples { needed: usize, found: usize },

    /// A classification target outside {0, 1}.
    #[error("label {value} at index {index} is not 0 or 1")]
    InvalidLabel { index: usize, value: f64 },
}

/// Checks the row count of `x` against `len(y)` and rejects empty input.
pub(crate) fn check_samples(x_rows: usize, y_len: usize) -> FitResult<()> {
    if x_rows != y_len {
        return Err(FitError::DimensionMismatch {
            what: "samples in X and y",
            expected: y_len,
            found: x_rows,
        });
    }
    if y_len == 0 {
        return Err(FitError::EmptyInput);
    }
    Ok(())
}

pub(crate) fn check_binary_labels(y: &Vector) -> FitResult<()> {
    match y
        .iter()
        .enumerate()
        .find(|&(_, &label)| label != 0.0 && label != 1.0)
    {
        Some((index, &value)) => Err(FitError::InvalidLabel { index, value }),
        None => Ok(()),
    }
}

pub(crate) fn check_weights(x_cols: usize, w_len: usize) -> FitResult<()> {
    if x_cols != w_len {
        return Err(FitError::DimensionMismatch {
            what: "features in X and weights",
            expected: x_cols,
            found: w_len,
        });
    }
    Ok(())
}
