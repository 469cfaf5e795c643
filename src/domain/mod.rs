//! Domain types used throughout the simulation.
//!
//! This module defines:
//!
//! - CLI-selectable enums (`TargetKind`, `FamilyKind`)
//! - simulation settings (`SimulationConfig`)
//! - per-trial data (`Dataset`) and outputs (`EstimateReport`)

pub mod types;

pub use types::*;
