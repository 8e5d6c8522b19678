//! # In-Memory Storage
//!
//! HashMap-backed [`Storage`] implementation.
//!
//! ## When To Use
//! - Unit and integration tests (no filesystem, fully isolated)
//! - Ephemeral sessions where cart persistence is not wanted
//!
//! Values live only as long as the process; restarting the app starts with
//! an empty store.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::storage::Storage;

/// In-memory key-value store.
///
/// ## Thread Safety
/// The map is wrapped in a `Mutex` so a single instance can be shared behind
/// `Arc<dyn Storage>` across tasks, matching the SQLite backend's sharing
/// model.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("storage mutex poisoned").len()
    }

    /// Checks whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.lock().expect("storage mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().expect("storage mutex poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_absent_key_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let storage = MemoryStorage::new();

        storage.set("k", "v1").await.unwrap();
        assert_eq!(storage.get("k").await.unwrap(), Some("v1".to_string()));
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_value() {
        let storage = MemoryStorage::new();

        storage.set("k", "v1").await.unwrap();
        storage.set("k", "v2").await.unwrap();

        assert_eq!(storage.get("k").await.unwrap(), Some("v2".to_string()));
        assert_eq!(storage.len(), 1);
    }
}
