//! # Cart Error Type
//!
//! Unified error type for cart operations.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Error Flow                                    │
//! │                                                                         │
//! │  use_cart() on a detached context ──► OutsideProvider                   │
//! │    synchronous, deterministic, a programmer-visible bug signal          │
//! │                                                                         │
//! │  storage get/set failure ───────────► Storage(StorageError)             │
//! │    propagated uncaught, no retry; an absent key is NOT an error         │
//! │                                                                         │
//! │  corrupt persisted blob ────────────► Malformed(serde_json::Error)      │
//! │    propagated as a parse error, never sanitized to an empty cart        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use bazaar_storage::StorageError;

/// Errors surfaced by the cart component.
#[derive(Debug, Error)]
pub enum CartError {
    /// The cart was accessed through a context that is not scoped to any
    /// active [`CartProvider`](crate::provider::CartProvider).
    ///
    /// ## When This Occurs
    /// - `use_cart()` called on [`CartContext::detached`](crate::provider::CartContext::detached)
    /// - A context constructed before any provider was mounted
    ///
    /// This is a wiring bug in the consumer, not a runtime condition to
    /// recover from.
    #[error("Cart accessed outside of an active CartProvider scope")]
    OutsideProvider,

    /// The underlying key-value store failed.
    ///
    /// Not retried and not downgraded: callers see the storage failure on
    /// their own failure channel. The only tolerated absence is a missing
    /// cart blob on first launch, which loads as an empty cart.
    #[error("Cart storage failed: {0}")]
    Storage(#[from] StorageError),

    /// The persisted cart blob could not be serialized or deserialized.
    ///
    /// A corrupt blob propagates as a parse error; it is not sanitized into
    /// an empty cart and the stored bytes are left untouched.
    #[error("Malformed cart data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type for cart operations.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_error_message() {
        let err = CartError::OutsideProvider;
        assert_eq!(
            err.to_string(),
            "Cart accessed outside of an active CartProvider scope"
        );
    }

    #[test]
    fn test_storage_error_converts() {
        let err: CartError = StorageError::PoolExhausted.into();
        assert!(matches!(err, CartError::Storage(_)));
    }

    #[test]
    fn test_parse_error_converts() {
        let parse_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err: CartError = parse_err.into();
        assert!(matches!(err, CartError::Malformed(_)));
    }
}
