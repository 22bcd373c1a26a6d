//! Local key-value persistence
//!
//! Installation-scoped string storage, durable across process restarts.
//! Hosts pick a backend; the report flow only relies on [`KeyValueStore`].

mod file;
mod memory;

use std::path::PathBuf;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;

use crate::error::Result;
use crate::util::env_var_trimmed;

/// File name of the preferences document inside the data directory
pub const PREFS_FILE_NAME: &str = "app_prefs.json";

/// Environment override for the data directory
pub const DATA_DIR_ENV: &str = "SPC_DATA_DIR";

/// Trait for string key-value storage operations
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Directory holding SPC Report's local state.
///
/// `SPC_DATA_DIR` wins; otherwise the platform local data directory joined
/// with `spc`.
pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = env_var_trimmed(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spc")
}
