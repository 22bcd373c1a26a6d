//! SPC Report CLI - registers this installation with the SPC collection API
//!
//! Hosts the device report flow on the command line: the push token comes
//! from a flag or `SPC_FCM_TOKEN`, the position from flags or
//! `SPC_LAST_LOCATION`.

mod bootstrap_config;
mod cli;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use clap::Parser;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::config::run_config_show;
use crate::commands::device_id::run_device_id;
use crate::commands::report::run_report;
use crate::commands::resolve_data_dir;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spc=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir);

    match cli.command {
        Commands::Report(args) => {
            let config = bootstrap_config::resolve_report_config()?;
            run_report(args, &data_dir, &config).await?;
        }
        Commands::DeviceId => run_device_id(&data_dir)?,
        Commands::Config { command } => match command {
            ConfigCommands::Show { json } => {
                let config = bootstrap_config::resolve_report_config()?;
                run_config_show(&config, json)?;
            }
        },
    }

    Ok(())
}
