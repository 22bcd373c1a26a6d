//! Report endpoint configuration loaded from generated JSON.

use spc_core::config::ReportConfig;

use crate::error::CliError;

/// Loads the generated bootstrap JSON from `OUT_DIR`.
pub fn load_bootstrap_config() -> Result<ReportConfig, CliError> {
    let raw = include_str!(concat!(env!("OUT_DIR"), "/report-bootstrap.json"));
    Ok(ReportConfig::from_json(raw)?)
}

/// Build-time values with environment overrides applied.
pub fn resolve_report_config() -> Result<ReportConfig, CliError> {
    let config = load_bootstrap_config()?.with_env_overrides();
    tracing::debug!("Resolved report config: {config:?}");
    Ok(config)
}
