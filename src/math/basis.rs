//! Polynomial basis expansion.
//!
//! Every model family shares the same expansion so that results are comparable:
//!
//! ```text
//! φ(x) = [1, x, x², …, x^d]
//! ```
//!
//! The first slot is always the intercept. A parameter vector for degree `d`
//! therefore has `d + 1` entries.

/// Highest polynomial degree accepted from the command line.
pub const MAX_DEGREE: usize = 30;

/// Number of basis columns (intercept included) for a polynomial of `degree`.
///
/// Saturates at `usize::MAX`, so the result is never zero and `fit` reports
/// `InsufficientData` instead of indexing an empty row.
pub fn basis_dim(degree: usize) -> usize {
    degree.saturating_add(1)
}

/// Fill one design row `[1, x, x², …]`.
///
/// Callers size `out` with `basis_dim`; an empty slice is left untouched.
pub fn fill_design_row(x: f64, out: &mut [f64]) {
    let Some(first) = out.first_mut() else {
        return;
    };
    *first = 1.0;
    for k in 1..out.len() {
        out[k] = out[k - 1] * x;
    }
}

/// Evaluate `Σ c_k x^k` with Horner's scheme.
pub fn eval_polynomial(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn design_row_holds_powers() {
        let mut row = vec![0.0; basis_dim(4)];
        fill_design_row(2.0, &mut row);
        assert_eq!(row, vec![1.0, 2.0, 4.0, 8.0, 16.0]);
    }

    #[test]
    fn basis_dim_saturates_instead_of_wrapping() {
        assert_eq!(basis_dim(10), 11);
        assert_eq!(basis_dim(usize::MAX), usize::MAX);
    }

    #[test]
    fn empty_row_is_left_alone() {
        let mut row: [f64; 0] = [];
        fill_design_row(0.5, &mut row);
    }

    #[test]
    fn horner_matches_design_row_dot_product() {
        let coeffs = [0.5, -1.0, 2.0, 0.25];
        let mut row = vec![0.0; coeffs.len()];
        for &x in &[-1.0, -0.3, 0.0, 0.7, 0.99] {
            fill_design_row(x, &mut row);
            let dot: f64 = row.iter().zip(coeffs.iter()).map(|(a, b)| a * b).sum();
            assert!((eval_polynomial(x, &coeffs) - dot).abs() < 1e-12);
        }
    }
}
