//! Endpoint configuration for report hosts.
//!
//! Hosts embed a `ReportConfig` generated at build time and may override its
//! values from the process environment.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::{env_var_trimmed, is_http_url, normalize_text_option};

/// Collection API host used when no base URL is provisioned
pub const DEFAULT_BASE_URL: &str = "https://bmorlmhe80.execute-api.us-east-2.amazonaws.com";

/// Path receiving device reports
pub const REPORT_PATH: &str = "/test/app-data";

pub const BASE_URL_ENV: &str = "SPC_DB_BASE_URL";
pub const API_KEY_ENV: &str = "SPC_DB_API_KEY";
pub const TIMEOUT_ENV: &str = "SPC_DB_TIMEOUT_SECS";

/// Build-provisioned endpoint configuration.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout; `None` keeps the HTTP client's default behaviour
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Validated configuration ready to build a transport from.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Option<Duration>,
}

impl ReportConfig {
    /// Parse the embedded bootstrap JSON.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|error| Error::Config(format!("invalid report bootstrap JSON: {error}")))
    }

    /// Apply `SPC_DB_BASE_URL`, `SPC_DB_API_KEY` and `SPC_DB_TIMEOUT_SECS`
    /// over the provisioned values.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        let timeout_secs = env_var_trimmed(TIMEOUT_ENV).and_then(|raw| match raw.parse() {
            Ok(secs) => Some(secs),
            Err(error) => {
                tracing::warn!("Ignoring invalid {TIMEOUT_ENV} value {raw:?}: {error}");
                None
            }
        });

        Self {
            base_url: env_var_trimmed(BASE_URL_ENV).or(self.base_url),
            api_key: env_var_trimmed(API_KEY_ENV).or(self.api_key),
            timeout_secs: timeout_secs.or(self.timeout_secs),
        }
    }

    /// Base URL with the default host applied, normalized.
    pub fn effective_base_url(&self) -> Result<String> {
        let raw = normalize_text_option(self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        normalize_base_url(&raw)
    }

    /// Validate into an endpoint; the API key is required.
    pub fn resolve(&self) -> Result<ResolvedEndpoint> {
        let base_url = self.effective_base_url()?;
        let api_key = normalize_text_option(self.api_key.clone()).ok_or_else(|| {
            Error::Config(format!(
                "{API_KEY_ENV} is not configured for this build or environment"
            ))
        })?;

        Ok(ResolvedEndpoint {
            base_url,
            api_key,
            timeout: self.timeout_secs.filter(|secs| *secs > 0).map(Duration::from_secs),
        })
    }
}

impl ResolvedEndpoint {
    /// Full URL receiving device reports
    pub fn report_url(&self) -> String {
        format!("{}{REPORT_PATH}", self.base_url)
    }
}

impl fmt::Debug for ReportConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ReportConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl fmt::Debug for ResolvedEndpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ResolvedEndpoint")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::Config("API base URL must not be empty".to_string()));
    }
    if !is_http_url(&base) {
        return Err(Error::Config(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}
