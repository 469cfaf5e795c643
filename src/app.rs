//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds the simulation config
//! - runs the estimation pipeline
//! - prints reports

use clap::Parser;

use crate::cli::{Command, CompareArgs, EstimateArgs, SimArgs};
use crate::domain::{FamilyKind, SimulationConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `bv` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Estimate(args) => handle_estimate(args),
        Command::Compare(args) => handle_compare(args),
    }
}

fn handle_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let config = sim_config_from_args(&args.sim);
    let family = match args.family {
        FamilyKind::Ols => pipeline::ols_family(args.sim.degree)?,
        FamilyKind::Ridge => pipeline::ridge_family(args.sim.degree, args.alpha)?,
    };

    let report = pipeline::run_estimate(args.sim.target, family, &config, args.sim.verbose)?;
    print_reports(&[report], &config, args.sim.json)
}

fn handle_compare(args: CompareArgs) -> Result<(), AppError> {
    let config = sim_config_from_args(&args.sim);
    let reports = pipeline::run_compare(
        args.sim.target,
        args.sim.degree,
        &args.alphas,
        &config,
        args.sim.verbose,
    )?;
    print_reports(&reports, &config, args.sim.json)
}

fn print_reports(
    reports: &[crate::domain::EstimateReport],
    config: &SimulationConfig,
    json: bool,
) -> Result<(), AppError> {
    if json {
        println!("{}", crate::report::reports_json(reports)?);
    } else {
        print!("{}", crate::report::format_reports(reports, config));
    }
    Ok(())
}

pub fn sim_config_from_args(args: &SimArgs) -> SimulationConfig {
    SimulationConfig {
        trials: args.trials,
        sample_size: args.sample_size,
        seed: args.seed,
        noise_std: args.noise_std,
        parallel: args.parallel,
        ..SimulationConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;

    #[test]
    fn config_follows_flags() {
        let cli = Cli::parse_from([
            "bv", "estimate", "--trials", "50", "--seed", "9", "--noise-std", "0.5", "--parallel",
        ]);
        let Command::Estimate(args) = cli.command else {
            panic!("expected estimate");
        };
        let config = sim_config_from_args(&args.sim);
        assert_eq!(config.trials, 50);
        assert_eq!(config.seed, 9);
        assert_eq!(config.noise_variance(), 0.25);
        assert!(config.parallel);
        assert_eq!(config.grid_len, 200);
    }
}
