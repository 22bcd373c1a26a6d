//! Device report submission flow.
//!
//! token fetch -> identifier resolution -> HTTP delivery, run as one linear
//! async pipeline. Every failure ends the attempt; nothing is retried.

use crate::device_id::resolve_device_id;
use crate::error::{Error, Result};
use crate::models::DeviceReport;
use crate::storage::KeyValueStore;
use crate::token::TokenProvider;
use crate::transport::ReportTransport;

/// Submits device reports using explicitly injected collaborators.
#[derive(Debug, Clone)]
pub struct ReportSubmitter<T, S, K> {
    tokens: T,
    store: S,
    transport: K,
}

impl<T, S, K> ReportSubmitter<T, S, K>
where
    T: TokenProvider,
    S: KeyValueStore,
    K: ReportTransport,
{
    pub const fn new(tokens: T, store: S, transport: K) -> Self {
        Self {
            tokens,
            store,
            transport,
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn transport(&self) -> &K {
        &self.transport
    }

    /// Run one submission attempt.
    ///
    /// Fails with [`Error::TokenUnavailable`] before any HTTP traffic when no
    /// token can be fetched, [`Error::HttpStatus`] for a non-2xx answer and
    /// [`Error::Transport`] when no answer arrives.
    pub async fn submit(&self, lat: Option<f64>, lon: Option<f64>) -> Result<()> {
        let token = self.tokens.fetch_token().await.map_err(|error| {
            tracing::warn!("Push token unavailable: {error:?}");
            match error {
                Error::TokenUnavailable(detail) => Error::TokenUnavailable(detail),
                other => Error::TokenUnavailable(other.to_string()),
            }
        })?;

        let phone_id = resolve_device_id(&self.store)?;
        let report = DeviceReport::new(phone_id, token, lat, lon);

        let status = self
            .transport
            .send_report(&report)
            .await
            .inspect_err(|error| tracing::error!("API call failed: {error}"))?;

        if (200..300).contains(&status) {
            tracing::info!(
                "Device report accepted for {} (HTTP {status}, location: {})",
                report.phone_id,
                report.has_location()
            );
            Ok(())
        } else {
            tracing::warn!(
                "Device report rejected for {} (HTTP {status})",
                report.phone_id
            );
            Err(Error::HttpStatus(status))
        }
    }

    /// Run one submission attempt and report the outcome through exactly one
    /// of the two callbacks.
    pub async fn submit_report<F, E>(
        &self,
        lat: Option<f64>,
        lon: Option<f64>,
        on_success: F,
        on_error: E,
    ) where
        F: FnOnce(),
        E: FnOnce(String),
    {
        match self.submit(lat, lon).await {
            Ok(()) => on_success(),
            Err(error) => on_error(error.to_string()),
        }
    }
}
