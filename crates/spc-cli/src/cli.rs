use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "spc")]
#[command(about = "Report this installation's push token and location to the SPC collection API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding local state (device identifier)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a device report
    Report(ReportArgs),
    /// Print the installation identifier, creating it on first use
    DeviceId,
    /// Inspect endpoint configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ReportArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true, requires = "lon", conflicts_with = "last_known")]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true, requires = "lat", conflicts_with = "last_known")]
    pub lon: Option<f64>,

    /// Use the last known position from SPC_LAST_LOCATION ("lat,lon")
    #[arg(long)]
    pub last_known: bool,

    /// Push token to report (defaults to SPC_FCM_TOKEN)
    #[arg(long, value_name = "TOKEN")]
    pub fcm_token: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective endpoint configuration (API key redacted)
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
