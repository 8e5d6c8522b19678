//! # Storage Trait
//!
//! The asynchronous key-value contract the cart persists through.
//!
//! ## Contract
//! - `get(key)` returns the stored string, or `None` if the key was never
//!   written. Absence is not an error.
//! - `set(key, value)` overwrites the previous value wholesale. There is no
//!   partial update, no compare-and-swap, no delete: the cart only ever
//!   replaces its full snapshot.
//!
//! Implementations must be shareable behind `Arc<dyn Storage>` so a single
//! backend can serve the whole app session.

use async_trait::async_trait;

use crate::error::StorageResult;

/// Asynchronous key-value store with string keys and string values.
///
/// ## Implementations
/// - [`MemoryStorage`](crate::memory::MemoryStorage) - HashMap-backed, for
///   tests and ephemeral sessions
/// - [`SqliteStorage`](crate::sqlite::SqliteStorage) - SQLite-backed, for
///   devices where state must survive restarts
#[async_trait]
pub trait Storage: Send + Sync {
    /// Reads the value stored under `key`, if any.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
