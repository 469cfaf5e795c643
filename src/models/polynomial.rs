//! Polynomial model families.
//!
//! Both families expand inputs with the same basis (`math::basis`) and emit
//! parameter vectors laid out as `[intercept, c1, …, c_d]`; only the fitting
//! objective differs. That keeps bias/variance numbers comparable between
//! them.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::math::{basis_dim, eval_polynomial, fill_design_row, solve_least_squares, solve_ridge};
use crate::models::family::{ModelFamily, Predictor, check_bind_len, check_fit_inputs};

/// A polynomial bound to its coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialPredictor {
    coeffs: Vec<f64>,
}

impl PolynomialPredictor {
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }
}

impl Predictor for PolynomialPredictor {
    fn predict(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| eval_polynomial(x, &self.coeffs)).collect()
    }
}

/// Unregularized least squares over `[1, x, …, x^d]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OlsPolynomial {
    pub degree: usize,
}

impl OlsPolynomial {
    pub fn new(degree: usize) -> Self {
        Self { degree }
    }
}

impl ModelFamily for OlsPolynomial {
    type Predictor = PolynomialPredictor;

    fn dim(&self) -> usize {
        basis_dim(self.degree)
    }

    fn label(&self) -> String {
        format!("ols(d={})", self.degree)
    }

    fn fit(&self, features: &[f64], labels: &[f64]) -> Result<Vec<f64>, ModelError> {
        let p = self.dim();
        check_fit_inputs(features, labels, p)?;

        let n = features.len();
        let mut x = DMatrix::<f64>::zeros(n, p);
        let mut row = vec![0.0; p];
        for (i, &xi) in features.iter().enumerate() {
            fill_design_row(xi, &mut row);
            for j in 0..p {
                x[(i, j)] = row[j];
            }
        }
        let y = DVector::from_column_slice(labels);

        let beta = solve_least_squares(&x, &y)?;
        Ok(beta.iter().copied().collect())
    }

    fn bind(&self, params: &[f64]) -> Result<PolynomialPredictor, ModelError> {
        check_bind_len(params, self.dim())?;
        Ok(PolynomialPredictor {
            coeffs: params.to_vec(),
        })
    }
}

/// L2-penalized least squares over the same basis.
///
/// The intercept is not penalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RidgePolynomial {
    pub degree: usize,
    pub alpha: f64,
}

impl RidgePolynomial {
    pub fn new(degree: usize, alpha: f64) -> Self {
        Self { degree, alpha }
    }
}

impl ModelFamily for RidgePolynomial {
    type Predictor = PolynomialPredictor;

    fn dim(&self) -> usize {
        basis_dim(self.degree)
    }

    fn label(&self) -> String {
        format!("ridge(d={}, alpha={})", self.degree, self.alpha)
    }

    fn fit(&self, features: &[f64], labels: &[f64]) -> Result<Vec<f64>, ModelError> {
        let p = self.dim();
        check_fit_inputs(features, labels, p)?;

        // Non-constant columns only; the solver handles the intercept.
        let n = features.len();
        let d = self.degree;
        let mut x = DMatrix::<f64>::zeros(n, d);
        let mut row = vec![0.0; p];
        for (i, &xi) in features.iter().enumerate() {
            fill_design_row(xi, &mut row);
            for j in 0..d {
                x[(i, j)] = row[j + 1];
            }
        }
        let y = DVector::from_column_slice(labels);

        let (intercept, weights) = solve_ridge(&x, &y, self.alpha)?;
        let mut out = Vec::with_capacity(p);
        out.push(intercept);
        out.extend(weights.iter().copied());
        Ok(out)
    }

    fn bind(&self, params: &[f64]) -> Result<PolynomialPredictor, ModelError> {
        check_bind_len(params, self.dim())?;
        Ok(PolynomialPredictor {
            coeffs: params.to_vec(),
        })
    }
}

/// Either polynomial family, for callers that pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PolynomialFamily {
    Ols(OlsPolynomial),
    Ridge(RidgePolynomial),
}

impl ModelFamily for PolynomialFamily {
    type Predictor = PolynomialPredictor;

    fn dim(&self) -> usize {
        match self {
            PolynomialFamily::Ols(f) => f.dim(),
            PolynomialFamily::Ridge(f) => f.dim(),
        }
    }

    fn label(&self) -> String {
        match self {
            PolynomialFamily::Ols(f) => f.label(),
            PolynomialFamily::Ridge(f) => f.label(),
        }
    }

    fn fit(&self, features: &[f64], labels: &[f64]) -> Result<Vec<f64>, ModelError> {
        match self {
            PolynomialFamily::Ols(f) => f.fit(features, labels),
            PolynomialFamily::Ridge(f) => f.fit(features, labels),
        }
    }

    fn bind(&self, params: &[f64]) -> Result<PolynomialPredictor, ModelError> {
        match self {
            PolynomialFamily::Ols(f) => f.bind(params),
            PolynomialFamily::Ridge(f) => f.bind(params),
        }
    }
}
