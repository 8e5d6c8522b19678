//! # Provider Scope
//!
//! The consumer contract: a provider that owns the store for the app
//! session, contexts that scope access to it, and handles that expose the
//! cart operations.
//!
//! ## Design
//! The scope is made of explicit values rather than ambient globals:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Provider Scope                                     │
//! │                                                                         │
//! │  CartProvider::mount(storage).await     ← one per app session          │
//! │       │                                                                 │
//! │       │ provider.context()                                              │
//! │       ▼                                                                 │
//! │  CartContext ───── passed down the UI tree by value ──────┐            │
//! │       │                                                   │            │
//! │       │ use_cart()                       CartContext::detached()       │
//! │       ▼                                                   │            │
//! │  Ok(CartHandle)                          use_cart() ──► Err(           │
//! │   products / add_to_cart /                   OutsideProvider)          │
//! │   increment / decrement                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `use_cart` on a context that is not scoped to a provider fails
//! immediately and synchronously, every time - a wiring bug made visible,
//! not a recoverable runtime condition.

use std::sync::Arc;

use tracing::info;

use bazaar_core::{Product, ProductDraft};
use bazaar_storage::Storage;

use crate::error::{CartError, CartResult};
use crate::store::CartStore;

// =============================================================================
// Provider
// =============================================================================

/// Owns the cart store for one app session.
///
/// Construct exactly one at session start and derive contexts from it for
/// every part of the UI that needs cart access.
pub struct CartProvider {
    store: Arc<CartStore>,
}

impl std::fmt::Debug for CartProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartProvider").finish_non_exhaustive()
    }
}

impl CartProvider {
    /// Creates a provider with an empty cart over the given storage backend.
    ///
    /// No I/O happens here; call [`load`](Self::load) (or use
    /// [`mount`](Self::mount)) to hydrate the previously saved cart.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        CartProvider {
            store: Arc::new(CartStore::new(storage)),
        }
    }

    /// Creates a provider and hydrates it from storage in one step.
    ///
    /// ## Errors
    /// Storage failures and malformed blobs propagate; callers that prefer
    /// the start-empty-and-report behavior can use [`new`](Self::new) +
    /// [`load`](Self::load) and handle the load error themselves while the
    /// provider keeps serving an empty cart.
    pub async fn mount(storage: Arc<dyn Storage>) -> CartResult<Self> {
        let provider = CartProvider::new(storage);
        provider.load().await?;
        info!("cart provider mounted");
        Ok(provider)
    }

    /// One-time startup hydration of the saved cart.
    ///
    /// On error the in-memory cart stays empty and the provider remains
    /// usable; the error surfaces on the caller's failure channel.
    pub async fn load(&self) -> CartResult<()> {
        self.store.load().await
    }

    /// A context scoped to this provider, to be passed down the UI tree.
    pub fn context(&self) -> CartContext {
        CartContext {
            store: Some(Arc::clone(&self.store)),
        }
    }
}

// =============================================================================
// Context
// =============================================================================

/// A capability to reach the session's cart, passed by value to consumers.
///
/// A context is either scoped to a provider (via
/// [`CartProvider::context`]) or detached. Accessing the cart through a
/// detached context is the component's one intentional failure condition.
#[derive(Clone, Default)]
pub struct CartContext {
    store: Option<Arc<CartStore>>,
}

impl CartContext {
    /// A context outside any provider scope.
    ///
    /// Useful as a default before the session is wired up, and in tests
    /// asserting the scope error.
    pub fn detached() -> Self {
        CartContext { store: None }
    }

    /// The accessor: resolves this context to a [`CartHandle`].
    ///
    /// ## Errors
    /// [`CartError::OutsideProvider`] - synchronously and deterministically -
    /// if the context is not scoped to an active provider.
    pub fn use_cart(&self) -> CartResult<CartHandle> {
        match &self.store {
            Some(store) => Ok(CartHandle {
                store: Arc::clone(store),
            }),
            None => Err(CartError::OutsideProvider),
        }
    }
}

// =============================================================================
// Handle
// =============================================================================

/// What consumers hold: read access to the products plus the mutators.
#[derive(Clone)]
pub struct CartHandle {
    store: Arc<CartStore>,
}

impl std::fmt::Debug for CartHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartHandle").finish_non_exhaustive()
    }
}

impl CartHandle {
    /// A snapshot of the current line items, in insertion order.
    pub fn products(&self) -> Vec<Product> {
        self.store.products()
    }

    /// Adds a catalog product with quantity 1. Duplicate ids are a no-op.
    pub async fn add_to_cart(&self, draft: ProductDraft) -> CartResult<()> {
        self.store.add_to_cart(draft).await
    }

    /// Increases the quantity of the matching line item by 1.
    pub async fn increment(&self, id: &str) -> CartResult<()> {
        self.store.increment(id).await
    }

    /// Decreases the quantity of the matching line item by 1, flooring at 1.
    pub async fn decrement(&self, id: &str) -> CartResult<()> {
        self.store.decrement(id).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use bazaar_storage::MemoryStorage;

    use crate::store::CART_STORAGE_KEY;

    fn draft(id: &str, price: f64) -> ProductDraft {
        ProductDraft::new(id, format!("Product {id}"), format!("https://img/{id}.png"), price)
    }

    #[test]
    fn test_detached_context_fails_deterministically() {
        let context = CartContext::detached();

        // Every call fails the same way.
        for _ in 0..3 {
            let err = context.use_cart().unwrap_err();
            assert!(matches!(err, CartError::OutsideProvider));
        }
    }

    #[test]
    fn test_default_context_is_detached() {
        let context = CartContext::default();
        assert!(matches!(
            context.use_cart().unwrap_err(),
            CartError::OutsideProvider
        ));
    }

    #[tokio::test]
    async fn test_scoped_context_resolves_to_a_handle() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let provider = CartProvider::mount(storage).await.unwrap();

        let handle = provider.context().use_cart().unwrap();
        assert!(handle.products().is_empty());
    }

    #[tokio::test]
    async fn test_handles_share_one_store() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let provider = CartProvider::mount(storage).await.unwrap();

        let first = provider.context().use_cart().unwrap();
        let second = provider.context().use_cart().unwrap();

        first.add_to_cart(draft("a", 10.0)).await.unwrap();
        first.increment("a").await.unwrap();

        let products = second.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_mount_hydrates_saved_cart() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage
            .set(
                CART_STORAGE_KEY,
                r#"[{"id":"a","title":"Product a","image_url":"https://img/a.png","price":10.0,"quantity":4}]"#,
            )
            .await
            .unwrap();

        let provider = CartProvider::mount(storage).await.unwrap();
        let handle = provider.context().use_cart().unwrap();

        let products = handle.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 4);
    }

    #[tokio::test]
    async fn test_mount_propagates_malformed_blob() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage.set(CART_STORAGE_KEY, "][").await.unwrap();

        let err = CartProvider::mount(storage).await.unwrap_err();
        assert!(matches!(err, CartError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_new_then_failed_load_keeps_provider_usable() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage.set(CART_STORAGE_KEY, "][").await.unwrap();

        let provider = CartProvider::new(Arc::clone(&storage));
        assert!(provider.load().await.is_err());

        // Failed load leaves an empty, working cart.
        let handle = provider.context().use_cart().unwrap();
        assert!(handle.products().is_empty());
        handle.add_to_cart(draft("a", 10.0)).await.unwrap();
        assert_eq!(handle.products().len(), 1);
    }
}
