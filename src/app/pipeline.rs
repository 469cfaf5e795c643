//! Shared estimation pipeline used by every subcommand.
//!
//! config -> simulation -> estimator (mean hypothesis) -> bias² -> variance -> report

use std::time::Instant;

use crate::domain::{EstimateReport, SimulationConfig, TargetKind};
use crate::error::AppError;
use crate::math::MAX_DEGREE;
use crate::models::{ModelFamily, OlsPolynomial, PolynomialFamily, RidgePolynomial};
use crate::sim::{BiasVarianceEstimator, Simulation};

/// Estimate one family against one built-in target.
pub fn run_estimate(
    target: TargetKind,
    family: PolynomialFamily,
    config: &SimulationConfig,
    verbose: bool,
) -> Result<EstimateReport, AppError> {
    let simulation = Simulation::new(config.clone())?;

    let started = Instant::now();
    let estimator = BiasVarianceEstimator::new(target.function(), family, simulation)?;
    if verbose {
        eprintln!(
            "[{}] mean hypothesis from {} fits in {:.2?}",
            family.label(),
            config.trials,
            started.elapsed()
        );
    }

    let started = Instant::now();
    let report = estimator.report(target.display_name())?;
    if verbose {
        eprintln!(
            "[{}] bias^2 + variance pass in {:.2?}",
            family.label(),
            started.elapsed()
        );
    }

    Ok(report)
}

/// OLS followed by one ridge family per alpha, all on the same datasets.
pub fn run_compare(
    target: TargetKind,
    degree: usize,
    alphas: &[f64],
    config: &SimulationConfig,
    verbose: bool,
) -> Result<Vec<EstimateReport>, AppError> {
    let mut families = vec![ols_family(degree)?];
    for &alpha in alphas {
        families.push(ridge_family(degree, alpha)?);
    }

    families
        .into_iter()
        .map(|family| run_estimate(target, family, config, verbose))
        .collect()
}

fn check_degree(degree: usize) -> Result<(), AppError> {
    if degree > MAX_DEGREE {
        return Err(AppError::new(
            2,
            format!("Invalid polynomial degree: {degree} (must be <= {MAX_DEGREE})."),
        ));
    }
    Ok(())
}

/// Validated OLS family.
pub fn ols_family(degree: usize) -> Result<PolynomialFamily, AppError> {
    check_degree(degree)?;
    Ok(PolynomialFamily::Ols(OlsPolynomial::new(degree)))
}

/// Validated ridge family.
pub fn ridge_family(degree: usize, alpha: f64) -> Result<PolynomialFamily, AppError> {
    check_degree(degree)?;
    if !(alpha.is_finite() && alpha >= 0.0) {
        return Err(AppError::new(
            2,
            format!("Invalid ridge alpha: {alpha} (must be finite and >= 0)."),
        ));
    }
    Ok(PolynomialFamily::Ridge(RidgePolynomial::new(degree, alpha)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SimulationConfig {
        SimulationConfig {
            trials: 40,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn compare_puts_ols_first_then_each_alpha() {
        let reports = run_compare(TargetKind::Sin, 5, &[0.5, 4.0], &small_config(), false).unwrap();
        let families: Vec<&str> = reports.iter().map(|r| r.family.as_str()).collect();
        assert_eq!(families, vec!["ols(d=5)", "ridge(d=5, alpha=0.5)", "ridge(d=5, alpha=4)"]);
        assert!(reports.iter().all(|r| r.target == "sin(pi x)"));
    }

    #[test]
    fn invalid_alpha_is_a_config_error() {
        let err = ridge_family(10, -1.0).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn out_of_range_degree_is_a_config_error() {
        assert_eq!(ols_family(usize::MAX).unwrap_err().exit_code(), 2);
        assert_eq!(ridge_family(usize::MAX, 2.0).unwrap_err().exit_code(), 2);
        assert!(ols_family(MAX_DEGREE).is_ok());

        let err = run_compare(TargetKind::Sin, usize::MAX, &[2.0], &small_config(), false).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn fit_failures_surface_with_fit_exit_code() {
        let config = SimulationConfig {
            sample_size: 4,
            ..small_config()
        };
        let family = PolynomialFamily::Ols(OlsPolynomial::new(10));
        let err = run_estimate(TargetKind::Sin, family, &config, false).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
