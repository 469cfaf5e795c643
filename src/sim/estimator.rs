//! Monte-Carlo bias/variance estimation.
//!
//! Given a target `f`, a model family and a simulation setup:
//!
//! - the mean hypothesis `ḡ` is bound to the element-wise mean of the
//!   parameter vectors fitted on every trial dataset
//! - `bias²` is the mean of `(ḡ(x) - f(x))²` over the fixed sample grid
//! - `variance` is the mean over trials of the mean of `(g_i(x) - ḡ(x))²`,
//!   evaluated on trial `i`'s own features
//!
//! Both passes replay the same per-trial datasets (see `sim::dataset`).

use crate::domain::EstimateReport;
use crate::error::ModelError;
use crate::models::{ModelFamily, Predictor};
use crate::sim::dataset::Simulation;
use crate::sim::target::TargetFunction;

pub struct BiasVarianceEstimator<T, F: ModelFamily> {
    target: T,
    family: F,
    simulation: Simulation,
    grid: Vec<f64>,
    mean_params: Vec<f64>,
    mean_hypothesis: F::Predictor,
}

impl<T, F> BiasVarianceEstimator<T, F>
where
    T: TargetFunction,
    F: ModelFamily,
{
    /// Build the estimator and compute the mean hypothesis.
    ///
    /// Any `fit`/`bind` failure aborts construction and is returned as is.
    pub fn new(target: T, family: F, simulation: Simulation) -> Result<Self, ModelError> {
        let fitted = simulation.run_trials(|trial| {
            let data = simulation.dataset(&target, trial);
            family.fit(&data.features, &data.labels)
        })?;

        let mean_params = mean_parameters(&fitted, family.dim())?;
        let mean_hypothesis = family.bind(&mean_params)?;
        let grid = simulation.sample_grid();

        Ok(Self {
            target,
            family,
            simulation,
            grid,
            mean_params,
            mean_hypothesis,
        })
    }

    /// Squared bias of the mean hypothesis over the sample grid.
    pub fn bias2(&self) -> f64 {
        let predicted = self.mean_hypothesis.predict(&self.grid);
        let truth = self.target.eval(&self.grid);
        mean_squared_diff(&predicted, &truth)
    }

    /// Average spread of individual fits around the mean hypothesis.
    pub fn variance(&self) -> Result<f64, ModelError> {
        let per_trial = self.simulation.run_trials(|trial| {
            let data = self.simulation.dataset(&self.target, trial);
            let params = self.family.fit(&data.features, &data.labels)?;
            let predictor = self.family.bind(&params)?;
            let fitted = predictor.predict(&data.features);
            let mean = self.mean_hypothesis.predict(&data.features);
            Ok(mean_squared_diff(&fitted, &mean))
        })?;

        Ok(per_trial.iter().sum::<f64>() / per_trial.len() as f64)
    }

    /// Run both statistics and assemble a report.
    pub fn report(&self, target_label: &str) -> Result<EstimateReport, ModelError> {
        let config = self.simulation.config();
        let bias2 = self.bias2();
        let variance = self.variance()?;
        let noise_variance = config.noise_variance();
        Ok(EstimateReport {
            family: self.family.label(),
            target: target_label.to_string(),
            trials: config.trials,
            sample_size: config.sample_size,
            seed: config.seed,
            bias2,
            variance,
            noise_variance,
            risk: bias2 + variance + noise_variance,
        })
    }

    pub fn mean_parameters(&self) -> &[f64] {
        &self.mean_params
    }

    pub fn mean_hypothesis(&self) -> &F::Predictor {
        &self.mean_hypothesis
    }

    pub fn sample_grid(&self) -> &[f64] {
        &self.grid
    }

    pub fn family(&self) -> &F {
        &self.family
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }
}

/// Element-wise mean of the fitted parameter vectors, summed in trial order.
fn mean_parameters(fitted: &[Vec<f64>], dim: usize) -> Result<Vec<f64>, ModelError> {
    let mut sum = vec![0.0; dim];
    for params in fitted {
        if params.len() != dim {
            return Err(ModelError::DimensionMismatch {
                expected: dim,
                actual: params.len(),
            });
        }
        for (s, v) in sum.iter_mut().zip(params.iter()) {
            *s += v;
        }
    }
    let n = fitted.len() as f64;
    Ok(sum.into_iter().map(|s| s / n).collect())
}

/// Mean of `(a_i - b_i)²`. Both slices must have the same length.
fn mean_squared_diff(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "prediction lengths differ");
    let n = a.len();
    if n == 0 {
        return 0.0;
    }
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        / n as f64
}
