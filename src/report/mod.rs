//! Reporting utilities: formatted terminal output and JSON rendering.
//!
//! We keep formatting code in one place so the simulation code stays clean
//! and output changes are localized.

pub mod format;

pub use format::*;
