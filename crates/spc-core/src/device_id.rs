//! Persistent installation identifier

use uuid::Uuid;

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Preference key holding the installation identifier
pub const DEVICE_ID_KEY: &str = "device_id";

/// Return the installation identifier, generating and persisting one on
/// first use.
///
/// An existing value is returned unchanged and the store is not written.
/// Two callers racing on a fresh install can each generate an identifier;
/// the last write wins.
pub fn resolve_device_id<S: KeyValueStore + ?Sized>(store: &S) -> Result<String> {
    if let Some(existing) = store.get(DEVICE_ID_KEY)? {
        return Ok(existing);
    }

    let generated = Uuid::new_v4().to_string();
    store.set(DEVICE_ID_KEY, &generated)?;
    tracing::info!("Generated new device identifier {generated}");
    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileKeyValueStore, MemoryKeyValueStore};

    #[test]
    fn generates_and_persists_once() {
        let store = MemoryKeyValueStore::new();

        let first = resolve_device_id(&store).unwrap();
        let second = resolve_device_id(&store).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.write_count(), 1);
        assert_eq!(store.get(DEVICE_ID_KEY).unwrap().as_deref(), Some(first.as_str()));
    }

    #[test]
    fn generated_identifier_is_a_uuid() {
        let store = MemoryKeyValueStore::new();
        let id = resolve_device_id(&store).unwrap();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.to_string(), id);
    }

    #[test]
    fn existing_identifier_is_returned_without_writing() {
        let store = MemoryKeyValueStore::with_entry(DEVICE_ID_KEY, "abc-123");
        assert_eq!(resolve_device_id(&store).unwrap(), "abc-123");
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn identifier_is_stable_across_store_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let first = resolve_device_id(&FileKeyValueStore::in_dir(dir.path())).unwrap();
        let second = resolve_device_id(&FileKeyValueStore::in_dir(dir.path())).unwrap();
        assert_eq!(first, second);
    }
}
