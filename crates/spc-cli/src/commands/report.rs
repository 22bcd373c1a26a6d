use std::path::Path;

use spc_core::config::ReportConfig;
use spc_core::location::{report_last_location, EnvLocationProvider, LocationReportOutcome};
use spc_core::storage::FileKeyValueStore;
use spc_core::token::{EnvTokenProvider, StaticTokenProvider, TokenProvider};
use spc_core::transport::HttpTransport;
use spc_core::{Coordinates, ReportSubmitter};

use crate::cli::ReportArgs;
use crate::error::CliError;

/// Token source chosen from the command line.
#[derive(Debug, Clone)]
pub enum CliTokenProvider {
    Flag(StaticTokenProvider),
    Env(EnvTokenProvider),
}

impl CliTokenProvider {
    pub fn from_flag(fcm_token: Option<String>) -> Self {
        match fcm_token {
            Some(token) => Self::Flag(StaticTokenProvider::new(Some(token))),
            None => Self::Env(EnvTokenProvider::default()),
        }
    }
}

impl TokenProvider for CliTokenProvider {
    async fn fetch_token(&self) -> spc_core::Result<String> {
        match self {
            Self::Flag(provider) => provider.fetch_token().await,
            Self::Env(provider) => provider.fetch_token().await,
        }
    }
}

/// Validate the `--lat`/`--lon` pair; both or neither.
pub fn coordinates_from_args(
    lat: Option<f64>,
    lon: Option<f64>,
) -> Result<Option<Coordinates>, CliError> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok(Some(Coordinates::new(lat, lon)?)),
        (None, None) => Ok(None),
        _ => Err(CliError::PartialCoordinates),
    }
}

pub async fn run_report(
    args: ReportArgs,
    data_dir: &Path,
    config: &ReportConfig,
) -> Result<(), CliError> {
    let coordinates = coordinates_from_args(args.lat, args.lon)?;

    let endpoint = config.resolve()?;
    let transport = HttpTransport::new(&endpoint)?;
    let store = FileKeyValueStore::in_dir(data_dir);
    let submitter =
        ReportSubmitter::new(CliTokenProvider::from_flag(args.fcm_token), store, transport);
    tracing::info!(
        "Submitting device report to {} (state in {})",
        submitter.transport().report_url(),
        submitter.store().path().display()
    );

    if args.last_known {
        let locations = EnvLocationProvider::default();
        return match report_last_location(&locations, &submitter).await {
            outcome @ LocationReportOutcome::Sent(_) => {
                println!("{outcome}");
                Ok(())
            }
            LocationReportOutcome::SubmitFailed(error) => {
                Err(CliError::Report(error.to_string()))
            }
            other => Err(CliError::Location(other.to_string())),
        };
    }

    let (lat, lon) = coordinates.map_or((None, None), Coordinates::into_parts);
    let mut failure = None;
    submitter
        .submit_report(
            lat,
            lon,
            || {
                if coordinates.is_some() {
                    println!("Location and token sent successfully");
                } else {
                    println!("Token sent successfully");
                }
            },
            |message| failure = Some(message),
        )
        .await;

    failure.map_or(Ok(()), |message| Err(CliError::Report(message)))
}
