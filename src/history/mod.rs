pub mod records;
pub mod store;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::{CalculatorError, Result};

pub use records::{InterestHistoryRecord, PopupHistoryEntry};
pub use store::{FileStore, KeyValueStore, MemoryStore, SharedStore};

/// store key for interest calculation history
pub const INTEREST_HISTORY_KEY: &str = "interestHistory";
/// store key for popup calculator history
pub const POPUP_HISTORY_KEY: &str = "popupCalcHistory";
/// interest history capacity
pub const INTEREST_HISTORY_CAPACITY: usize = 5;
/// popup calculator history capacity
pub const POPUP_HISTORY_CAPACITY: usize = 10;

/// fixed-capacity, newest-first list mirrored to a key-value store
///
/// Every mutation is persisted immediately, so the stored value always equals
/// the in-memory list. Loading never fails: a missing, unreadable or malformed
/// value is treated as an empty history.
pub struct BoundedHistoryStore<T> {
    store: SharedStore,
    key: String,
    capacity: usize,
    items: Vec<T>,
}

impl<T> BoundedHistoryStore<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// open the history under `key`, loading whatever is persisted there
    pub fn open(store: SharedStore, key: impl Into<String>, capacity: usize) -> Self {
        let mut history = Self {
            store,
            key: key.into(),
            capacity,
            items: Vec::new(),
        };
        history.items = history.load();
        history
    }

    /// read the persisted list; degraded reads yield an empty list
    pub fn load(&self) -> Vec<T> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "history unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(key = %self.key, error = %e, "history malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// insert `item` as the newest entry, evict past capacity, persist
    pub fn prepend(&mut self, item: T) -> Result<()> {
        self.items.insert(0, item);
        self.items.truncate(self.capacity);
        self.persist()?;

        info!(key = %self.key, len = self.items.len(), "history entry added");
        Ok(())
    }

    /// empty the list and delete the persisted value
    pub fn clear(&mut self) -> Result<()> {
        self.items.clear();
        self.store
            .remove(&self.key)
            .map_err(|e| CalculatorError::storage(&self.key, e))?;

        info!(key = %self.key, "history cleared");
        Ok(())
    }

    /// newest-first view limited to `limit` entries
    pub fn renderable(&self, limit: usize) -> &[T] {
        &self.items[..self.items.len().min(limit)]
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.items)?;
        self.store
            .set(&self.key, &json)
            .map_err(|e| CalculatorError::storage(&self.key, e))
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for BoundedHistoryStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedHistoryStore")
            .field("key", &self.key)
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish()
    }
}
