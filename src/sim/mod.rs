//! Simulation: targets, per-trial datasets, and the bias/variance estimator.

pub mod dataset;
pub mod estimator;
pub mod target;

pub use dataset::*;
pub use estimator::*;
pub use target::*;
