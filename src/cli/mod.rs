//! Command-line parsing for the bias/variance estimator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the simulation/math code.

use clap::{Args, Parser, Subcommand};

use crate::domain::{FamilyKind, TargetKind};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "bv",
    version,
    about = "Monte-Carlo bias/variance decomposition for polynomial regression"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate bias^2 and variance for one model family.
    Estimate(EstimateArgs),
    /// Compare OLS against ridge at one or more penalty strengths.
    Compare(CompareArgs),
}

/// Simulation settings shared by all subcommands.
#[derive(Debug, Args, Clone)]
pub struct SimArgs {
    /// Target function the data is generated from.
    #[arg(short = 't', long, value_enum, default_value_t = TargetKind::Sin)]
    pub target: TargetKind,

    /// Datasets simulated per pass.
    #[arg(long, default_value_t = 1000)]
    pub trials: usize,

    /// Observations per simulated dataset.
    #[arg(short = 'n', long, default_value_t = 200)]
    pub sample_size: usize,

    /// Base random seed.
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Standard deviation of the Gaussian label noise.
    #[arg(long, default_value_t = 2.0)]
    pub noise_std: f64,

    /// Polynomial degree of the basis expansion.
    #[arg(short = 'd', long, default_value_t = 10)]
    pub degree: usize,

    /// Fit trials in parallel (results are identical to the sequential run).
    #[arg(long)]
    pub parallel: bool,

    /// Print reports as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Progress and timing on stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[derive(Debug, Args, Clone)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub sim: SimArgs,

    /// Model family to evaluate.
    #[arg(short = 'f', long, value_enum, default_value_t = FamilyKind::Ols)]
    pub family: FamilyKind,

    /// Ridge penalty strength (ignored for OLS).
    #[arg(short = 'a', long, default_value_t = 2.0)]
    pub alpha: f64,
}

#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub sim: SimArgs,

    /// Ridge penalty strengths to compare against OLS.
    #[arg(short = 'a', long = "alpha", value_delimiter = ',', default_value = "2.0")]
    pub alphas: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_setup() {
        let cli = Cli::parse_from(["bv", "estimate"]);
        let Command::Estimate(args) = cli.command else {
            panic!("expected estimate");
        };
        assert_eq!(args.sim.target, TargetKind::Sin);
        assert_eq!(args.sim.trials, 1000);
        assert_eq!(args.sim.sample_size, 200);
        assert_eq!(args.sim.seed, 1);
        assert_eq!(args.sim.noise_std, 2.0);
        assert_eq!(args.sim.degree, 10);
        assert_eq!(args.family, FamilyKind::Ols);
    }

    #[test]
    fn compare_accepts_alpha_list() {
        let cli = Cli::parse_from(["bv", "compare", "--alpha", "0.5,2,8", "--parallel"]);
        let Command::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.alphas, vec![0.5, 2.0, 8.0]);
        assert!(args.sim.parallel);
    }
}
