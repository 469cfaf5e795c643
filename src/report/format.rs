//! Terminal and JSON formatting for estimate reports.

use crate::domain::{EstimateReport, SimulationConfig};
use crate::error::AppError;

/// Format a header plus one row per report.
///
/// All reports are expected to share the target and simulation settings.
pub fn format_reports(reports: &[EstimateReport], config: &SimulationConfig) -> String {
    let mut out = String::new();

    out.push_str("=== bv - Bias/Variance Estimate ===\n");
    if let Some(first) = reports.first() {
        out.push_str(&format!("Target: {}\n", first.target));
    }
    out.push_str(&format!(
        "Simulation: trials={} | n={} | seed={} | noise std={:.3} | x in [{}, {})\n",
        config.trials, config.sample_size, config.seed, config.noise_std, config.x_min, config.x_max,
    ));

    out.push('\n');
    out.push_str(&format!(
        "{:<26} {:>10} {:>10} {:>10} {:>10}\n",
        "family", "bias^2", "variance", "noise", "risk"
    ));
    for r in reports {
        out.push_str(&format!(
            "{:<26} {:>10.6} {:>10.6} {:>10.6} {:>10.6}\n",
            r.family, r.bias2, r.variance, r.noise_variance, r.risk
        ));
    }

    out
}

/// Pretty JSON array of reports.
pub fn reports_json(reports: &[EstimateReport]) -> Result<String, AppError> {
    serde_json::to_string_pretty(reports)
        .map_err(|e| AppError::new(4, format!("Failed to render JSON: {e}")))
}
