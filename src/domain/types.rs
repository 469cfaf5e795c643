//! Shared domain types.
//!
//! These types are kept lightweight and serializable so they can be:
//!
//! - threaded through the simulation
//! - built from CLI flags
//! - printed as JSON

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Built-in target functions selectable from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// `sin(πx)`
    Sin,
    /// `cos(πx)`
    Cos,
    /// `x³ - x`
    Cubic,
}

impl TargetKind {
    pub fn display_name(self) -> &'static str {
        match self {
            TargetKind::Sin => "sin(pi x)",
            TargetKind::Cos => "cos(pi x)",
            TargetKind::Cubic => "x^3 - x",
        }
    }
}

/// Model family selectable from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FamilyKind {
    /// Ordinary least squares over the polynomial basis.
    Ols,
    /// Ridge (L2) penalized least squares over the same basis.
    Ridge,
}

/// Simulation settings shared by dataset generation, the estimator, and reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Datasets simulated per pass.
    pub trials: usize,
    /// Observations per dataset.
    pub sample_size: usize,
    /// Base seed; trial `i` draws from a stream derived from `(seed, i)`.
    pub seed: u64,
    /// Standard deviation of the additive Gaussian label noise.
    pub noise_std: f64,
    /// Features are drawn uniformly from `[x_min, x_max)`.
    pub x_min: f64,
    pub x_max: f64,
    /// Evaluation grid for squared bias: `grid_start + i * grid_step`, `i < grid_len`.
    pub grid_start: f64,
    pub grid_step: f64,
    pub grid_len: usize,
    /// Fit trials on the rayon pool. Output is identical either way.
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            sample_size: 200,
            seed: 1,
            noise_std: 2.0,
            x_min: -1.0,
            x_max: 1.0,
            grid_start: -1.0,
            grid_step: 0.01,
            grid_len: 200,
            parallel: false,
        }
    }
}

impl SimulationConfig {
    /// Irreducible error added to `bias² + variance` when reporting risk.
    pub fn noise_variance(&self) -> f64 {
        self.noise_std * self.noise_std
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.trials == 0 {
            return Err(AppError::new(2, "Trial count must be > 0."));
        }
        if self.sample_size == 0 {
            return Err(AppError::new(2, "Sample size must be > 0."));
        }
        if !(self.noise_std.is_finite() && self.noise_std >= 0.0) {
            return Err(AppError::new(
                2,
                format!("Invalid noise std: {} (must be finite and >= 0).", self.noise_std),
            ));
        }
        if !(self.x_min.is_finite() && self.x_max.is_finite() && self.x_max > self.x_min) {
            return Err(AppError::new(
                2,
                format!("Invalid feature domain: [{}, {}).", self.x_min, self.x_max),
            ));
        }
        if self.grid_len == 0 {
            return Err(AppError::new(2, "Grid length must be > 0."));
        }
        if !(self.grid_start.is_finite() && self.grid_step.is_finite() && self.grid_step > 0.0) {
            return Err(AppError::new(
                2,
                format!(
                    "Invalid evaluation grid: start={}, step={}.",
                    self.grid_start, self.grid_step
                ),
            ));
        }
        Ok(())
    }
}

/// One simulated training set.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub features: Vec<f64>,
    pub labels: Vec<f64>,
}

/// Result of one bias/variance estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateReport {
    pub family: String,
    pub target: String,
    pub trials: usize,
    pub sample_size: usize,
    pub seed: u64,
    pub bias2: f64,
    pub variance: f64,
    pub noise_variance: f64,
    /// `bias2 + variance + noise_variance`.
    pub risk: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_and_derives_noise_variance() {
        let config = SimulationConfig::default();
        config.validate().unwrap();
        assert_eq!(config.noise_variance(), 4.0);
    }

    #[test]
    fn validate_rejects_bad_settings() {
        let bad = [
            SimulationConfig {
                trials: 0,
                ..SimulationConfig::default()
            },
            SimulationConfig {
                sample_size: 0,
                ..SimulationConfig::default()
            },
            SimulationConfig {
                noise_std: f64::NAN,
                ..SimulationConfig::default()
            },
            SimulationConfig {
                x_min: 1.0,
                x_max: -1.0,
                ..SimulationConfig::default()
            },
            SimulationConfig {
                grid_step: 0.0,
                ..SimulationConfig::default()
            },
        ];
        for config in bad {
            let err = config.validate().unwrap_err();
            assert_eq!(err.exit_code(), 2);
        }
    }
}
