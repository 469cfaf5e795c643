//! Error types.
//!
//! - `ModelError` is what the model-family contract and the estimator return.
//! - `AppError` is what the binary sees: an exit code plus a message.

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Failures raised by `fit` / `bind` and propagated unchanged by the estimator.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Parameter vector length does not match the basis dimension.
    DimensionMismatch { expected: usize, actual: usize },
    /// Fewer observations than basis dimensions, or a numerically rank-deficient design.
    InsufficientData { observations: usize, dimension: usize },
    /// `features` and `labels` differ in length.
    InvalidInputShape { features: usize, labels: usize },
    /// Non-finite value in the inputs or in the solved coefficients.
    NonFinite,
    /// The linear solver could not produce a solution.
    Solver(String),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::DimensionMismatch { expected, actual } => write!(
                f,
                "Parameter vector has length {actual}, expected {expected}."
            ),
            ModelError::InsufficientData {
                observations,
                dimension,
            } => write!(
                f,
                "Insufficient data: {observations} observations for a {dimension}-dimensional basis (rank-deficient design)."
            ),
            ModelError::InvalidInputShape { features, labels } => write!(
                f,
                "Features and labels differ in length ({features} vs {labels})."
            ),
            ModelError::NonFinite => write!(f, "Non-finite value encountered during fitting."),
            ModelError::Solver(msg) => write!(f, "Least-squares solver failed: {msg}"),
        }
    }
}

impl std::error::Error for ModelError {}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        AppError::new(4, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_error_maps_to_fit_exit_code() {
        let err: AppError = ModelError::DimensionMismatch {
            expected: 11,
            actual: 3,
        }
        .into();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("expected 11"));
    }
}
