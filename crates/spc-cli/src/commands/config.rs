use serde::Serialize;
use spc_core::config::{ReportConfig, REPORT_PATH};

use crate::error::CliError;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ConfigView {
    pub base_url: String,
    pub report_url: String,
    pub api_key: &'static str,
    pub timeout_secs: Option<u64>,
}

pub fn config_view(config: &ReportConfig) -> Result<ConfigView, CliError> {
    let base_url = config.effective_base_url()?;
    let api_key = if config.resolve().is_ok() {
        "[REDACTED]"
    } else {
        "<missing>"
    };

    Ok(ConfigView {
        report_url: format!("{base_url}{REPORT_PATH}"),
        base_url,
        api_key,
        timeout_secs: config.timeout_secs,
    })
}

pub fn run_config_show(config: &ReportConfig, as_json: bool) -> Result<(), CliError> {
    let view = config_view(config)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("Base URL:   {}", view.base_url);
    println!("Report URL: {}", view.report_url);
    println!("API key:    {}", view.api_key);
    match view.timeout_secs {
        Some(secs) => println!("Timeout:    {secs}s"),
        None => println!("Timeout:    client default"),
    }
    Ok(())
}
