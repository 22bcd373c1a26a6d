use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Default, Serialize)]
struct ReportBootstrapConfig {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout_secs: Option<u64>,
}

fn main() {
    println!("cargo:rerun-if-env-changed=SPC_DB_BASE_URL");
    println!("cargo:rerun-if-env-changed=SPC_DB_API_KEY");
    println!("cargo:rerun-if-env-changed=SPC_DB_TIMEOUT_SECS");

    if let Err(error) = write_report_bootstrap_config() {
        println!("cargo:warning=failed to generate report bootstrap config: {error}");
    }
}

fn write_report_bootstrap_config() -> io::Result<()> {
    load_workspace_dotenv();

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    fs::create_dir_all(&out_dir)?;

    let timeout_secs = provisioned("SPC_DB_TIMEOUT_SECS").and_then(|raw| {
        raw.parse().map_or_else(
            |error| {
                println!("cargo:warning=ignoring SPC_DB_TIMEOUT_SECS={raw}: {error}");
                None
            },
            Some,
        )
    });

    let config = ReportBootstrapConfig {
        base_url: provisioned("SPC_DB_BASE_URL"),
        api_key: provisioned("SPC_DB_API_KEY"),
        timeout_secs,
    };
    if config.api_key.is_none() {
        println!("cargo:warning=SPC_DB_API_KEY is not set; reports need it at runtime");
    }

    let content = serde_json::to_string_pretty(&config)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error.to_string()))?;
    fs::write(out_dir.join("report-bootstrap.json"), content)?;
    Ok(())
}

/// Loads `.env.client`, falling back to `.env`, from the workspace root.
fn load_workspace_dotenv() {
    let manifest_dir =
        env::var_os("CARGO_MANIFEST_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from);
    let workspace_root = manifest_dir.join("..").join("..");

    let env_file = [".env.client", ".env"]
        .into_iter()
        .map(|name| workspace_root.join(name))
        .find(|path| path.is_file());
    if let Some(path) = env_file {
        println!("cargo:rerun-if-changed={}", path.display());
        if let Err(error) = dotenvy::from_path(&path) {
            println!("cargo:warning=could not load {}: {error}", path.display());
        }
    }
}

/// Build-time variable lookup; blank values count as unset.
fn provisioned(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
