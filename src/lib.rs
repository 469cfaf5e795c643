//! `bias-variance` library crate.
//!
//! Monte-Carlo estimation of the squared bias and variance of a regression
//! model family against a known target plus Gaussian noise.
//!
//! The binary (`bv`) is a thin wrapper around this library so that the
//! estimator and model families are usable and testable on their own.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod math;
pub mod models;
pub mod report;
pub mod sim;
