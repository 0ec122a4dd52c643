//! key-value persistence port
//!
//! History lists are persisted as JSON strings under string keys. The trait is
//! the only way the rest of the crate reaches durable state, so tests can swap
//! in [`MemoryStore`] and the demos can use [`FileStore`].

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::errors::Result;

/// string-keyed, string-valued durable dictionary
pub trait KeyValueStore: Send + Sync {
    /// value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// delete `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

/// shared handle to a key-value store
pub type SharedStore = Arc<dyn KeyValueStore>;

/// in-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// file-backed store keeping every key in one JSON object
///
/// Writes go to a temp file that is then renamed over the original. A missing
/// file reads as an empty dictionary. A file that does not parse fails reads,
/// but the next write replaces it rather than failing too.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_content(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(content))
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match self.read_content()? {
            Some(content) => Ok(serde_json::from_str(&content)?),
            None => Ok(BTreeMap::new()),
        }
    }

    /// current entries for a write, and whether the file must be rewritten
    /// regardless of changes; only io errors propagate
    fn read_for_update(&self) -> Result<(BTreeMap<String, String>, bool)> {
        let Some(content) = self.read_content()? else {
            return Ok((BTreeMap::new(), false));
        };
        match serde_json::from_str(&content) {
            Ok(entries) => Ok((entries, false)),
            Err(e) => {
                warn!(path = ?self.path, error = %e, "store file unparsable, rewriting");
                Ok((BTreeMap::new(), true))
            }
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(entries)?;
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, &self.path)?;

        debug!("wrote {} keys to {:?}", entries.len(), self.path);
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.read();
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.write();
        let (mut entries, _) = self.read_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.write();
        let (mut entries, corrupt) = self.read_for_update()?;
        if entries.remove(key).is_some() || corrupt {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);

        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        store.remove("theme").unwrap();
        assert!(!store.contains_key("theme"));
        assert!(store.is_empty());

        // removing again is fine
        store.remove("theme").unwrap();
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("store.json");

        let store = FileStore::new(&path);
        store.set("a", "[1,2]").unwrap();
        store.set("b", "x").unwrap();
        drop(store);

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("a").unwrap().as_deref(), Some("[1,2]"));
        assert_eq!(reopened.get("b").unwrap().as_deref(), Some("x"));

        reopened.remove("a").unwrap();
        assert_eq!(reopened.get("a").unwrap(), None);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nothing.json"));
        assert_eq!(store.get("anything").unwrap(), None);
        store.remove("anything").unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_corrupt_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileStore::new(&path);
        assert!(store.get("k").is_err());
    }

    #[test]
    fn test_file_store_write_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{oops").unwrap();

        let store = FileStore::new(&path);
        store.set("popupCalcHistory", "[\"1 + 1 = 2\"]").unwrap();
        store.set("interestHistory", "[]").unwrap();

        assert_eq!(
            store.get("popupCalcHistory").unwrap().as_deref(),
            Some("[\"1 + 1 = 2\"]")
        );
        assert_eq!(store.get("interestHistory").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_remove_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let store = FileStore::new(&path);
        store.remove("popupCalcHistory").unwrap();

        assert_eq!(store.get("popupCalcHistory").unwrap(), None);
    }
}
