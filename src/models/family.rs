//! The pluggable model-family contract.
//!
//! A family owns a fixed basis expansion and a fitting objective. The
//! estimator only ever talks to it through two operations:
//!
//! - `fit(features, labels)` -> parameter vector
//! - `bind(parameters)` -> predictor
//!
//! Implementations carry no mutable state, so both calls are reentrant and
//! can run from several rayon workers at once.

use crate::error::ModelError;

/// A callable bound to one parameter vector.
pub trait Predictor: Sync {
    /// Evaluate at every point of `xs`.
    fn predict(&self, xs: &[f64]) -> Vec<f64>;
}

pub trait ModelFamily: Sync {
    type Predictor: Predictor;

    /// Parameter vector length. Constant for the lifetime of the instance.
    fn dim(&self) -> usize;

    /// Short label used in reports, e.g. `ols(d=10)`.
    fn label(&self) -> String;

    /// Fit `labels ~ basis(features)`.
    ///
    /// Fails with `InvalidInputShape` on length mismatch and with
    /// `InsufficientData` when there are fewer observations than `dim()`
    /// (or the design is numerically rank-deficient).
    fn fit(&self, features: &[f64], labels: &[f64]) -> Result<Vec<f64>, ModelError>;

    /// Bind a parameter vector of length `dim()`.
    ///
    /// The input is only read; the predictor owns its own copy.
    fn bind(&self, params: &[f64]) -> Result<Self::Predictor, ModelError>;
}

/// Shared input checks for `fit`.
pub(crate) fn check_fit_inputs(features: &[f64], labels: &[f64], dim: usize) -> Result<(), ModelError> {
    if features.len() != labels.len() {
        return Err(ModelError::InvalidInputShape {
            features: features.len(),
            labels: labels.len(),
        });
    }
    if features.len() < dim {
        return Err(ModelError::InsufficientData {
            observations: features.len(),
            dimension: dim,
        });
    }
    if features.iter().chain(labels.iter()).any(|v| !v.is_finite()) {
        return Err(ModelError::NonFinite);
    }
    Ok(())
}

/// Shared length check for `bind`.
pub(crate) fn check_bind_len(params: &[f64], dim: usize) -> Result<(), ModelError> {
    if params.len() == dim {
        Ok(())
    } else {
        Err(ModelError::DimensionMismatch {
            expected: dim,
            actual: params.len(),
        })
    }
}
