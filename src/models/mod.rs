//! Model families that plug into the bias/variance estimator.
//!
//! Families are small, stateless values so that the simulation code can stay
//! generic over them.

pub mod family;
pub mod polynomial;

pub use family::{ModelFamily, Predictor};
pub use polynomial::*;
