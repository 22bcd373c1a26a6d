pub mod config;
pub mod device_id;
pub mod report;

use std::path::PathBuf;

use spc_core::storage::default_data_dir;

/// Explicit `--data-dir` wins over `SPC_DATA_DIR` and the platform default.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(default_data_dir)
}
