//! Least squares solvers.
//!
//! Each simulation trial solves a small regression problem:
//!
//! ```text
//! minimize ‖y - Xβ‖² (+ α ‖β_{1..}‖² for ridge)
//! ```
//!
//! Implementation choices:
//! - OLS goes through SVD so that tall design matrices are handled directly
//!   and rank deficiency can be detected from the singular values.
//!   (Nalgebra's `QR::solve` is intended for square systems.)
//! - Ridge centres the columns and the response so the intercept is left
//!   unpenalized, then solves the normal equations `(XcᵀXc + αI) w = Xcᵀyc`
//!   with a Cholesky factorization. The matrix is SPD for `α > 0`. With
//!   `α = 0` the centred problem goes through the SVD path instead, so the
//!   same rank check applies.

use nalgebra::{DMatrix, DVector};

use crate::error::ModelError;

/// Singular values below `RANK_RTOL * σ_max` count as zero.
const RANK_RTOL: f64 = 1e-12;

/// Solve an ordinary least squares problem using SVD.
///
/// Fails with `InsufficientData` when the design has fewer rows than columns
/// or its numerical rank is below the column count.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<DVector<f64>, ModelError> {
    let (n, p) = x.shape();
    if n < p {
        return Err(ModelError::InsufficientData {
            observations: n,
            dimension: p,
        });
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(ModelError::NonFinite);
    }

    let svd = x.clone().svd(true, true);
    let max_sv = svd.singular_values.max();
    let tol = max_sv * RANK_RTOL;
    if max_sv <= 0.0 || svd.rank(tol) < p {
        return Err(ModelError::InsufficientData {
            observations: n,
            dimension: p,
        });
    }

    let beta = svd.solve(y, tol).map_err(|e| ModelError::Solver(e.to_string()))?;
    if beta.iter().all(|v| v.is_finite()) {
        Ok(beta)
    } else {
        Err(ModelError::NonFinite)
    }
}

/// Ridge solution with an unpenalized intercept.
///
/// `x` holds the non-constant columns only. Returns `(intercept, weights)`.
pub fn solve_ridge(
    x: &DMatrix<f64>,
    y: &DVector<f64>,
    alpha: f64,
) -> Result<(f64, DVector<f64>), ModelError> {
    let (n, d) = x.shape();
    if n == 0 || y.len() != n {
        return Err(ModelError::InvalidInputShape {
            features: n,
            labels: y.len(),
        });
    }
    if !(alpha.is_finite() && alpha >= 0.0) {
        return Err(ModelError::Solver(format!("invalid ridge penalty alpha={alpha}")));
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(ModelError::NonFinite);
    }

    let y_mean = y.mean();
    if d == 0 {
        return Ok((y_mean, DVector::zeros(0)));
    }
    let yc = y.add_scalar(-y_mean);

    let mut means = DVector::<f64>::zeros(d);
    let mut xc = x.clone();
    for j in 0..d {
        let m = x.column(j).mean();
        means[j] = m;
        xc.column_mut(j).add_scalar_mut(-m);
    }

    if alpha == 0.0 {
        let weights = solve_least_squares(&xc, &yc).map_err(|e| match e {
            ModelError::InsufficientData { observations, .. } => ModelError::InsufficientData {
                observations,
                dimension: d + 1,
            },
            other => other,
        })?;
        let intercept = y_mean - means.dot(&weights);
        return if intercept.is_finite() {
            Ok((intercept, weights))
        } else {
            Err(ModelError::NonFinite)
        };
    }

    let xt = xc.transpose();
    let mut gram = &xt * &xc;
    for i in 0..d {
        gram[(i, i)] += alpha;
    }
    let rhs = &xt * &yc;

    let chol = gram.cholesky().ok_or(ModelError::InsufficientData {
        observations: n,
        dimension: d + 1,
    })?;
    let weights = chol.solve(&rhs);
    let intercept = y_mean - means.dot(&weights);

    if intercept.is_finite() && weights.iter().all(|v| v.is_finite()) {
        Ok((intercept, weights))
    } else {
        Err(ModelError::NonFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn least_squares_rejects_wide_design() {
        let x = DMatrix::from_row_slice(2, 3, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        let y = DVector::from_row_slice(&[1.0, 2.0]);
        assert_eq!(
            solve_least_squares(&x, &y),
            Err(ModelError::InsufficientData {
                observations: 2,
                dimension: 3
            })
        );
    }

    #[test]
    fn least_squares_rejects_collinear_columns() {
        // Second column duplicates the first.
        let x = DMatrix::from_row_slice(4, 2, &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert!(matches!(
            solve_least_squares(&x, &y),
            Err(ModelError::InsufficientData { .. })
        ));
    }

    #[test]
    fn ridge_with_zero_penalty_matches_ols() {
        let xs = [-1.0, -0.5, 0.0, 0.5, 1.0];
        let ys = [0.1, 1.2, 1.9, 3.1, 4.0];
        let x = DMatrix::from_row_slice(5, 1, &xs);
        let y = DVector::from_row_slice(&ys);
        let (b0, w) = solve_ridge(&x, &y, 0.0).unwrap();

        let mut full = Vec::new();
        for &v in &xs {
            full.extend_from_slice(&[1.0, v]);
        }
        let beta = solve_least_squares(&DMatrix::from_row_slice(5, 2, &full), &y).unwrap();
        assert!((b0 - beta[0]).abs() < 1e-10);
        assert!((w[0] - beta[1]).abs() < 1e-10);
    }

    #[test]
    fn ridge_without_penalty_rejects_nearly_collinear_columns() {
        // Second column differs from the first by ~1e-13: the Gram matrix can
        // still factor, but the design is numerically rank one.
        let mut data = Vec::new();
        for i in 0..6 {
            let v = i as f64;
            let bump = if i % 2 == 0 { 1e-13 } else { 0.0 };
            data.extend_from_slice(&[v, v + bump]);
        }
        let x = DMatrix::from_row_slice(6, 2, &data);
        let y = DVector::from_row_slice(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);

        assert_eq!(
            solve_ridge(&x, &y, 0.0),
            Err(ModelError::InsufficientData {
                observations: 6,
                dimension: 3
            })
        );
        assert!(solve_ridge(&x, &y, 1.0).is_ok());
    }

    #[test]
    fn ridge_shrinks_slope_but_not_intercept_of_centred_data() {
        let xs = [-1.0, -0.5, 0.0, 0.5, 1.0];
        let ys = [3.0, 4.0, 5.0, 6.0, 7.0];
        let x = DMatrix::from_row_slice(5, 1, &xs);
        let y = DVector::from_row_slice(&ys);
        let (b0, w) = solve_ridge(&x, &y, 10.0).unwrap();
        // Centred x has mean zero, so the intercept is exactly mean(y).
        assert!((b0 - 5.0).abs() < 1e-12);
        assert!(w[0] > 0.0 && w[0] < 2.0);
    }
}
