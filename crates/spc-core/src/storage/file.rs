//! JSON file backed key-value store

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{KeyValueStore, PREFS_FILE_NAME};
use crate::error::{Error, Result};

/// Stores all entries as one flat JSON object on disk.
///
/// Writes go to a sibling temp file and are renamed into place, so a crash
/// mid-write leaves the previous document intact.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Open (lazily) a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Open the store inside `data_dir`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(PREFS_FILE_NAME))
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|error| {
            Error::Storage(format!(
                "failed to parse preferences at {}: {error}",
                self.path.display()
            ))
        })
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        let staging = self.path.with_extension("json.tmp");
        std::fs::write(&staging, content)?;
        std::fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| Error::Storage("preferences lock poisoned".to_string()))?;

        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)?;
        tracing::debug!("Stored preference {key} in {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::in_dir(dir.path());
        assert_eq!(store.get("device_id").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::in_dir(&dir.path().join("nested"));
        store.set("device_id", "abc-123").unwrap();
        store.set("other", "value").unwrap();
        drop(store);

        let reopened = FileKeyValueStore::in_dir(&dir.path().join("nested"));
        assert_eq!(reopened.get("device_id").unwrap().as_deref(), Some("abc-123"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn set_replaces_existing_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::in_dir(dir.path());
        store.set("device_id", "first").unwrap();
        store.set("device_id", "second").unwrap();
        assert_eq!(store.get("device_id").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn corrupt_document_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::in_dir(dir.path());
        std::fs::write(store.path(), "{not json").unwrap();

        let error = store.get("device_id").unwrap_err();
        assert!(matches!(error, Error::Storage(_)));
        assert!(store.set("device_id", "abc").is_err());
    }
}
