//! Last-known location lookup and the location report flow.

use std::fmt;

use thiserror::Error;

use crate::models::Coordinates;
use crate::storage::KeyValueStore;
use crate::submitter::ReportSubmitter;
use crate::token::TokenProvider;
use crate::transport::ReportTransport;
use crate::util::env_var_trimmed;

/// Environment variable read by [`EnvLocationProvider`], as `"lat,lon"`
pub const LAST_LOCATION_ENV: &str = "SPC_LAST_LOCATION";

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("{0}")]
    Unavailable(String),
}

/// Source of the device's last known position
#[allow(async_fn_in_trait)]
pub trait LocationProvider {
    /// `Ok(None)` when no position has been recorded yet
    async fn last_location(&self) -> Result<Option<Coordinates>, LocationError>;
}

/// Position supplied up front by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocationProvider {
    coordinates: Option<Coordinates>,
}

impl FixedLocationProvider {
    pub const fn new(coordinates: Option<Coordinates>) -> Self {
        Self { coordinates }
    }
}

impl LocationProvider for FixedLocationProvider {
    async fn last_location(&self) -> Result<Option<Coordinates>, LocationError> {
        Ok(self.coordinates)
    }
}

/// Reads a `"lat,lon"` environment variable at lookup time.
#[derive(Debug, Clone, Copy)]
pub struct EnvLocationProvider {
    var: &'static str,
}

impl EnvLocationProvider {
    /// Read from `var` instead of `SPC_LAST_LOCATION`
    pub const fn with_var(var: &'static str) -> Self {
        Self { var }
    }
}

impl Default for EnvLocationProvider {
    fn default() -> Self {
        Self::with_var(LAST_LOCATION_ENV)
    }
}

impl LocationProvider for EnvLocationProvider {
    async fn last_location(&self) -> Result<Option<Coordinates>, LocationError> {
        let Some(raw) = env_var_trimmed(self.var) else {
            return Ok(None);
        };
        Coordinates::parse(&raw)
            .map(Some)
            .map_err(|error| LocationError::Unavailable(format!("{}: {error}", self.var)))
    }
}

/// Result of [`report_last_location`].
#[derive(Debug)]
pub enum LocationReportOutcome {
    /// The report reached the collection endpoint
    Sent(Coordinates),
    /// No position is known; nothing was submitted
    LocationUnavailable,
    /// The host lacks location permission; nothing was submitted
    PermissionDenied,
    /// The location lookup failed; nothing was submitted
    LocationFailed(String),
    /// The position was known but the submission failed
    SubmitFailed(crate::Error),
}

impl LocationReportOutcome {
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent(_))
    }
}

impl fmt::Display for LocationReportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sent(_) => write!(f, "Location and token sent successfully"),
            Self::LocationUnavailable => write!(f, "Location not available"),
            Self::PermissionDenied => write!(f, "Location permission denied"),
            Self::LocationFailed(detail) => write!(f, "Error getting location: {detail}"),
            Self::SubmitFailed(error) => write!(f, "{error}"),
        }
    }
}

/// Look up the last known position and, when there is one, submit it.
pub async fn report_last_location<L, T, S, K>(
    locations: &L,
    submitter: &ReportSubmitter<T, S, K>,
) -> LocationReportOutcome
where
    L: LocationProvider,
    T: TokenProvider,
    S: KeyValueStore,
    K: ReportTransport,
{
    let coordinates = match locations.last_location().await {
        Ok(Some(coordinates)) => coordinates,
        Ok(None) => {
            tracing::info!("No last known location; skipping report");
            return LocationReportOutcome::LocationUnavailable;
        }
        Err(LocationError::PermissionDenied) => {
            tracing::warn!("Location permission denied");
            return LocationReportOutcome::PermissionDenied;
        }
        Err(LocationError::Unavailable(detail)) => {
            tracing::error!("Error getting location: {detail}");
            return LocationReportOutcome::LocationFailed(detail);
        }
    };

    let (lat, lon) = coordinates.into_parts();
    match submitter.submit(lat, lon).await {
        Ok(()) => LocationReportOutcome::Sent(coordinates),
        Err(error) => LocationReportOutcome::SubmitFailed(error),
    }
}
