//! # bazaar-storage: Key-Value Persistence for Bazaar
//!
//! This crate provides the persistent key-value seam the cart saves itself
//! through: string keys, string values, asynchronous `get`/`set`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bazaar Storage Flow                              │
//! │                                                                         │
//! │  CartStore (bazaar-cart)                                               │
//! │       │  get("@Bazaar:cart") / set("@Bazaar:cart", json)               │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  bazaar-storage (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌──────────────┐     │   │
//! │  │   │   Storage     │   │ SqliteStorage │   │ MemoryStorage│     │   │
//! │  │   │   (trait)     │◄──│ (sqlite.rs)   │   │ (memory.rs)  │     │   │
//! │  │   └───────────────┘   └───────┬───────┘   └──────────────┘     │   │
//! │  │                               │                                 │   │
//! │  └───────────────────────────────┼─────────────────────────────────┘   │
//! │                                  ▼                                      │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   kv_store(key PRIMARY KEY, value, updated_at)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`storage`] - The `Storage` trait (async get/set by key)
//! - [`memory`] - In-memory implementation for tests and ephemeral sessions
//! - [`sqlite`] - SQLite-backed implementation for devices
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bazaar_storage::{SqliteStorage, Storage, StorageConfig};
//!
//! let storage = SqliteStorage::new(StorageConfig::new("path/to/bazaar.db")).await?;
//! storage.set("@Bazaar:cart", "[]").await?;
//! let blob = storage.get("@Bazaar:cart").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;
pub mod migrations;
pub mod sqlite;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStorage;
pub use sqlite::{SqliteStorage, StorageConfig};
pub use storage::Storage;
