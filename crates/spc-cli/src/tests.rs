use clap::Parser;
use pretty_assertions::assert_eq;
use spc_core::config::ReportConfig;
use spc_core::token::TokenProvider;

use crate::cli::{Cli, Commands, ConfigCommands, ReportArgs};
use crate::commands::config::{config_view, ConfigView};
use crate::commands::device_id::load_device_id;
use crate::commands::report::{coordinates_from_args, run_report, CliTokenProvider};
use crate::commands::resolve_data_dir;
use crate::error::CliError;

fn parse_report(args: &[&str]) -> ReportArgs {
    let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
    match cli.command {
        Commands::Report(report) => report,
        _ => panic!("expected report command"),
    }
}

#[test]
fn report_accepts_negative_coordinates() {
    let args = parse_report(&["spc", "report", "--lat", "37.0", "--lon", "-97.0"]);
    assert_eq!(args.lat, Some(37.0));
    assert_eq!(args.lon, Some(-97.0));
    assert!(!args.last_known);
    assert_eq!(args.fcm_token, None);
}

#[test]
fn report_without_coordinates_parses() {
    let args = parse_report(&["spc", "report", "--fcm-token", "token-1"]);
    assert_eq!(args.lat, None);
    assert_eq!(args.lon, None);
    assert_eq!(args.fcm_token.as_deref(), Some("token-1"));
}

#[test]
fn report_requires_both_coordinates() {
    assert!(Cli::try_parse_from(["spc", "report", "--lat", "37.0"]).is_err());
    assert!(Cli::try_parse_from(["spc", "report", "--lon", "-97.0"]).is_err());
}

#[test]
fn last_known_conflicts_with_explicit_coordinates() {
    assert!(Cli::try_parse_from([
        "spc",
        "report",
        "--last-known",
        "--lat",
        "1.0",
        "--lon",
        "2.0"
    ])
    .is_err());
    assert!(parse_report(&["spc", "report", "--last-known"]).last_known);
}

#[test]
fn global_data_dir_is_accepted_after_subcommand() {
    let cli = Cli::try_parse_from(["spc", "device-id", "--data-dir", "/tmp/spc-test"]).unwrap();
    assert!(matches!(cli.command, Commands::DeviceId));
    assert_eq!(
        resolve_data_dir(cli.data_dir),
        std::path::PathBuf::from("/tmp/spc-test")
    );
}

#[test]
fn config_show_parses_json_flag() {
    let cli = Cli::try_parse_from(["spc", "config", "show", "--json"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            command: ConfigCommands::Show { json: true }
        }
    ));
}

#[test]
fn coordinates_from_args_validates_pairs() {
    assert!(coordinates_from_args(None, None).unwrap().is_none());
    assert!(matches!(
        coordinates_from_args(Some(1.0), None),
        Err(CliError::PartialCoordinates)
    ));
    assert!(matches!(
        coordinates_from_args(Some(91.0), Some(0.0)),
        Err(CliError::Core(spc_core::Error::InvalidInput(_)))
    ));
    let coordinates = coordinates_from_args(Some(37.0), Some(-97.0))
        .unwrap()
        .unwrap();
    assert_eq!(coordinates.lat, 37.0);
    assert_eq!(coordinates.lon, -97.0);
}

#[tokio::test(flavor = "multi_thread")]
async fn flag_token_takes_precedence() {
    let provider = CliTokenProvider::from_flag(Some(" token-1 ".to_string()));
    assert_eq!(provider.fetch_token().await.unwrap(), "token-1");
}

#[test]
fn device_id_is_stable_per_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let first = load_device_id(dir.path()).unwrap();
    let second = load_device_id(dir.path()).unwrap();
    assert_eq!(first, second);

    let other = tempfile::tempdir().unwrap();
    assert_ne!(first, load_device_id(other.path()).unwrap());
}

#[test]
fn config_view_redacts_api_key() {
    let config = ReportConfig {
        base_url: Some("https://api.example.com/".to_string()),
        api_key: Some("secret-key".to_string()),
        timeout_secs: Some(10),
    };
    assert_eq!(
        config_view(&config).unwrap(),
        ConfigView {
            base_url: "https://api.example.com".to_string(),
            report_url: "https://api.example.com/test/app-data".to_string(),
            api_key: "[REDACTED]",
            timeout_secs: Some(10),
        }
    );

    let missing = ReportConfig::default();
    assert_eq!(config_view(&missing).unwrap().api_key, "<missing>");
}

#[tokio::test(flavor = "multi_thread")]
async fn report_with_blank_token_fails_before_sending() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig {
        base_url: Some("http://127.0.0.1:9".to_string()),
        api_key: Some("key".to_string()),
        timeout_secs: Some(2),
    };
    let args = ReportArgs {
        lat: Some(37.0),
        lon: Some(-97.0),
        last_known: false,
        fcm_token: Some("   ".to_string()),
    };

    let error = run_report(args, dir.path(), &config).await.unwrap_err();
    assert_eq!(error.to_string(), "Error getting FCM token");
    assert!(!dir.path().join("app_prefs.json").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn report_without_api_key_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        lat: None,
        lon: None,
        last_known: false,
        fcm_token: Some("token-1".to_string()),
    };

    let error = run_report(args, dir.path(), &ReportConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(error, CliError::Core(spc_core::Error::Config(_))));
}
