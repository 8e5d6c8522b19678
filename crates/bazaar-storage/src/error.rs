//! # Storage Error Types
//!
//! Error types for key-value storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← Adds context and categorization          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartError::Storage (in bazaar-cart) ← Surfaced on the caller's        │
//! │       │                                 async failure channel          │
//! │       ▼                                                                 │
//! │  Application decides what to show the user                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An absent key is NOT an error: `Storage::get` returns `Ok(None)`.

use thiserror::Error;

/// Key-value storage errors.
///
/// These wrap backend errors and provide categorization for the layers above.
/// The cart never retries or falls back on them; they propagate as-is.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Opening the backing store failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    ///
    /// ## When This Occurs
    /// - Invalid SQL in a migration
    /// - Migration version conflict
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Read or write against the store failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to StorageError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::PoolTimedOut   → StorageError::PoolExhausted
/// sqlx::Error::PoolClosed     → StorageError::ConnectionFailed
/// sqlx::Error::Database       → StorageError::QueryFailed
/// Other                       → StorageError::Internal
/// ```
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => StorageError::PoolExhausted,

            sqlx::Error::PoolClosed => {
                StorageError::ConnectionFailed("Pool is closed".to_string())
            }

            sqlx::Error::Database(db_err) => StorageError::QueryFailed(db_err.message().to_string()),

            _ => StorageError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StorageError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StorageError::MigrationFailed(err.to_string())
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StorageError::ConnectionFailed("disk full".to_string());
        assert_eq!(err.to_string(), "Connection failed: disk full");

        let err = StorageError::PoolExhausted;
        assert_eq!(err.to_string(), "Connection pool exhausted");
    }

    #[test]
    fn test_pool_timeout_maps_to_exhausted() {
        let err: StorageError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StorageError::PoolExhausted));
    }
}
