//! HTTP delivery of device reports.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;

use crate::config::ResolvedEndpoint;
use crate::error::{Error, Result};
use crate::models::DeviceReport;
use crate::util::compact_text;

/// Delivers one report and yields the HTTP status code.
///
/// A transport only fails with [`Error::Transport`] when no response was
/// received; interpreting the status is left to the caller.
#[allow(async_fn_in_trait)]
pub trait ReportTransport {
    async fn send_report(&self, report: &DeviceReport) -> Result<u16>;
}

impl<T: ReportTransport + ?Sized> ReportTransport for &T {
    async fn send_report(&self, report: &DeviceReport) -> Result<u16> {
        (**self).send_report(report).await
    }
}

/// reqwest-backed transport for the SPC collection API.
///
/// The `Authorization` header is installed once as a client default header,
/// so every request leaving this client carries it.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    report_url: String,
    client: Client,
}

impl HttpTransport {
    /// Build a transport for a validated endpoint
    pub fn new(endpoint: &ResolvedEndpoint) -> Result<Self> {
        let mut auth_value = HeaderValue::from_str(&endpoint.api_key).map_err(|error| {
            Error::Config(format!("API key is not a valid header value: {error}"))
        })?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = endpoint.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|error| Error::Config(format!("Failed to construct HTTP client: {error}")))?;

        Ok(Self {
            report_url: endpoint.report_url(),
            client,
        })
    }

    /// URL reports are posted to
    pub fn report_url(&self) -> &str {
        &self.report_url
    }
}

impl ReportTransport for HttpTransport {
    async fn send_report(&self, report: &DeviceReport) -> Result<u16> {
        let response = self
            .client
            .post(&self.report_url)
            .json(report)
            .send()
            .await
            .map_err(|error| Error::Transport(compact_text(&describe_request_error(&error))))?;

        Ok(response.status().as_u16())
    }
}

fn describe_request_error(error: &reqwest::Error) -> String {
    let mut description = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        description.push_str(": ");
        description.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    description
}
