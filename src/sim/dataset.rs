//! Synthetic dataset generation.
//!
//! Every trial owns its own generator stream, seeded from `(seed, trial)`.
//! Trial `i` therefore sees the same draws no matter which pass asks for it
//! or in which order trials run, which is what lets the variance pass
//! replay exactly the datasets the mean hypothesis was built from.

use rand::distributions::Uniform;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;
use rayon::prelude::*;

use crate::domain::{Dataset, SimulationConfig};
use crate::error::{AppError, ModelError};
use crate::sim::target::TargetFunction;

/// Golden-ratio increment used to spread trial indices across seeds.
const STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Generator for trial `trial` under base seed `seed`.
pub fn trial_rng(seed: u64, trial: usize) -> StdRng {
    let stream = (trial as u64).wrapping_add(1).wrapping_mul(STREAM_MIX);
    StdRng::seed_from_u64(seed ^ stream)
}

/// Validated simulation settings plus the sampling distributions they imply.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    features: Uniform<f64>,
    noise: Normal<f64>,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self, AppError> {
        config.validate()?;
        let features = Uniform::new(config.x_min, config.x_max);
        let noise = Normal::new(0.0, config.noise_std)
            .map_err(|e| AppError::new(2, format!("Noise distribution error: {e}")))?;
        Ok(Self {
            config,
            features,
            noise,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Draw trial `trial`'s dataset.
    ///
    /// All features are drawn first, then all noise values, from the trial's
    /// own stream.
    pub fn dataset<T: TargetFunction + ?Sized>(&self, target: &T, trial: usize) -> Dataset {
        let n = self.config.sample_size;
        let mut rng = trial_rng(self.config.seed, trial);

        let features: Vec<f64> = (&mut rng).sample_iter(self.features).take(n).collect();
        let noise: Vec<f64> = (&mut rng).sample_iter(self.noise).take(n).collect();

        let labels = target
            .eval(&features)
            .into_iter()
            .zip(noise)
            .map(|(y, e)| y + e)
            .collect();

        Dataset { features, labels }
    }

    /// The fixed evaluation grid `grid_start + i * grid_step`.
    pub fn sample_grid(&self) -> Vec<f64> {
        (0..self.config.grid_len)
            .map(|i| self.config.grid_start + i as f64 * self.config.grid_step)
            .collect()
    }

    /// Run `per_trial` for every trial index and collect results in trial order.
    ///
    /// The first error aborts the pass. With `parallel` set the trials run on
    /// the rayon pool; the returned vector is the same either way.
    pub fn run_trials<R, F>(&self, per_trial: F) -> Result<Vec<R>, ModelError>
    where
        R: Send,
        F: Fn(usize) -> Result<R, ModelError> + Sync + Send,
    {
        if self.config.parallel {
            (0..self.config.trials).into_par_iter().map(per_trial).collect()
        } else {
            (0..self.config.trials).map(per_trial).collect()
        }
    }
}
