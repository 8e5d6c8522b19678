//! # Cart Store
//!
//! Holds the cart's current contents, exposes mutators, and keeps the
//! persistent key-value store consistent with in-memory state.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Consumer Action            CartStore                Storage Effect     │
//! │  ───────────────            ─────────                ──────────────     │
//! │                                                                         │
//! │  App start ───────────────► load() ────────────────► get (once)        │
//! │                                                                         │
//! │  Tap product ─────────────► add_to_cart(draft) ────► set (full list)   │
//! │                             duplicate id: no-op ───► (no write)        │
//! │                                                                         │
//! │  Tap [+] ─────────────────► increment(id) ─────────► set (full list)   │
//! │                             unknown id: no-op ─────► (no write)        │
//! │                                                                         │
//! │  Tap [-] ─────────────────► decrement(id) ─────────► set (full list)   │
//! │                             quantity already 1 ────► set (unchanged)   │
//! │                             unknown id: no-op ─────► (no write)        │
//! │                                                                         │
//! │  Render cart ─────────────► products() ────────────► (read only)       │
//! │                                                                         │
//! │  NOTE: Every write replaces the whole persisted list. The previous     │
//! │        blob is overwritten; there is no diffing and no versioning.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The in-memory update happens atomically under a `Mutex`; the storage
//! write happens after the lock is released, using the snapshot captured at
//! mutation time. Overlapping mutators therefore race only on which snapshot
//! lands last in storage (last writer wins).

use std::sync::{Arc, Mutex};

use tracing::debug;

use bazaar_core::{Cart, Product, ProductDraft};
use bazaar_storage::Storage;

use crate::error::CartResult;

/// The fixed key the serialized cart lives under in the key-value store.
///
/// The value is a JSON array of line items with field names exactly
/// `{id, title, image_url, price, quantity}`.
pub const CART_STORAGE_KEY: &str = "@Bazaar:cart";

/// The cart state container.
///
/// ## Ownership
/// The store exclusively owns the cart contents. Consumers receive cloned
/// snapshots from [`products`](Self::products) plus the mutator methods -
/// never mutable access to the list itself.
pub struct CartStore {
    cart: Mutex<Cart>,
    storage: Arc<dyn Storage>,
}

impl CartStore {
    /// Creates an empty cart store over the given storage backend.
    ///
    /// The store starts empty; call [`load`](Self::load) once at startup to
    /// hydrate any previously saved cart.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        CartStore {
            cart: Mutex::new(Cart::new()),
            storage,
        }
    }

    /// Hydrates the cart from the persistent store.
    ///
    /// Invoked once at session start (see
    /// [`CartProvider::mount`](crate::provider::CartProvider::mount)).
    ///
    /// ## Behavior
    /// - Key absent: the cart stays empty, `Ok`
    /// - Key present: the blob replaces the in-memory state
    /// - Blob malformed: the cart stays empty and the parse error propagates;
    ///   the stored bytes are left untouched
    pub async fn load(&self) -> CartResult<()> {
        debug!(key = CART_STORAGE_KEY, "hydrating cart from storage");

        let blob = match self.storage.get(CART_STORAGE_KEY).await? {
            Some(blob) => blob,
            None => {
                debug!("no saved cart found, starting empty");
                return Ok(());
            }
        };

        let items: Vec<Product> = serde_json::from_str(&blob)?;
        debug!(count = items.len(), "restored saved cart");

        *self.cart.lock().expect("cart mutex poisoned") = Cart::from_items(items);
        Ok(())
    }

    /// Adds a catalog product to the cart with quantity 1 and persists the
    /// updated list.
    ///
    /// ## Behavior
    /// - Id not in cart: appended, full list persisted
    /// - Id already in cart: no-op, **nothing is written** - adding more of
    ///   an existing product goes through [`increment`](Self::increment)
    pub async fn add_to_cart(&self, draft: ProductDraft) -> CartResult<()> {
        debug!(id = %draft.id, "add_to_cart");

        let snapshot = {
            let mut cart = self.cart.lock().expect("cart mutex poisoned");
            if !cart.add(draft) {
                debug!("product already in cart, no-op");
                return Ok(());
            }
            cart.items().to_vec()
        };

        self.persist(&snapshot).await
    }

    /// Increases the quantity of the matching line item by 1 and persists
    /// the updated list.
    ///
    /// Unknown id: no-op, no error, nothing written.
    pub async fn increment(&self, id: &str) -> CartResult<()> {
        debug!(id = %id, "increment");

        let snapshot = {
            let mut cart = self.cart.lock().expect("cart mutex poisoned");
            if !cart.increment(id) {
                debug!(id = %id, "product not in cart, no-op");
                return Ok(());
            }
            cart.items().to_vec()
        };

        self.persist(&snapshot).await
    }

    /// Decreases the quantity of the matching line item by 1, flooring at 1,
    /// and persists the list.
    ///
    /// ## Behavior
    /// - Quantity > 1: decremented
    /// - Quantity == 1: left at 1 - items are never removed through decrement
    /// - The list is persisted whenever the id was found, **including** when
    ///   the quantity was already at the floor
    /// - Unknown id: no-op, no error, nothing written
    pub async fn decrement(&self, id: &str) -> CartResult<()> {
        debug!(id = %id, "decrement");

        let snapshot = {
            let mut cart = self.cart.lock().expect("cart mutex poisoned");
            if !cart.decrement(id) {
                debug!(id = %id, "product not in cart, no-op");
                return Ok(());
            }
            cart.items().to_vec()
        };

        self.persist(&snapshot).await
    }

    /// A snapshot of the current line items, in insertion order.
    ///
    /// Suitable for rendering and for computing totals externally.
    pub fn products(&self) -> Vec<Product> {
        self.cart
            .lock()
            .expect("cart mutex poisoned")
            .items()
            .to_vec()
    }

    /// Writes the full serialized list over the previous persisted blob.
    async fn persist(&self, items: &[Product]) -> CartResult<()> {
        let blob = serde_json::to_string(items)?;
        debug!(count = items.len(), bytes = blob.len(), "persisting cart");

        self.storage.set(CART_STORAGE_KEY, &blob).await?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use bazaar_storage::{MemoryStorage, StorageResult};

    fn draft(id: &str, price: f64) -> ProductDraft {
        ProductDraft::new(id, format!("Product {id}"), format!("https://img/{id}.png"), price)
    }

    /// Storage double that counts writes, for asserting which mutations
    /// actually hit the store.
    struct CountingStorage {
        inner: MemoryStorage,
        writes: AtomicUsize,
    }

    impl CountingStorage {
        fn new() -> Self {
            CountingStorage {
                inner: MemoryStorage::new(),
                writes: AtomicUsize::new(0),
            }
        }

        fn writes(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Storage for CountingStorage {
        async fn get(&self, key: &str) -> StorageResult<Option<String>> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.set(key, value).await
        }
    }

    /// Reloads whatever is persisted right now through a fresh store.
    async fn reload(storage: &Arc<dyn Storage>) -> Vec<Product> {
        let fresh = CartStore::new(Arc::clone(storage));
        fresh.load().await.unwrap();
        fresh.products()
    }

    #[tokio::test]
    async fn test_load_with_absent_key_starts_empty() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let store = CartStore::new(storage);

        store.load().await.unwrap();
        assert!(store.products().is_empty());
    }

    #[tokio::test]
    async fn test_load_with_malformed_blob_errors_and_stays_empty() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage.set(CART_STORAGE_KEY, "{not json").await.unwrap();

        let store = CartStore::new(Arc::clone(&storage));
        let err = store.load().await.unwrap_err();

        assert!(matches!(err, crate::CartError::Malformed(_)));
        assert!(store.products().is_empty());
        // The corrupt blob is left in place, not sanitized.
        assert_eq!(
            storage.get(CART_STORAGE_KEY).await.unwrap(),
            Some("{not json".to_string())
        );
    }

    #[tokio::test]
    async fn test_every_effective_mutation_is_persisted() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let store = CartStore::new(Arc::clone(&storage));

        store.add_to_cart(draft("a", 10.0)).await.unwrap();
        assert_eq!(reload(&storage).await, store.products());

        store.add_to_cart(draft("b", 5.0)).await.unwrap();
        assert_eq!(reload(&storage).await, store.products());

        store.increment("a").await.unwrap();
        assert_eq!(reload(&storage).await, store.products());

        store.decrement("a").await.unwrap();
        assert_eq!(reload(&storage).await, store.products());
    }

    #[tokio::test]
    async fn test_duplicate_add_writes_nothing() {
        let counting = Arc::new(CountingStorage::new());
        let storage: Arc<dyn Storage> = counting.clone();
        let store = CartStore::new(storage);

        store.add_to_cart(draft("a", 10.0)).await.unwrap();
        assert_eq!(counting.writes(), 1);

        store.add_to_cart(draft("a", 10.0)).await.unwrap();
        assert_eq!(counting.writes(), 1, "duplicate add must not hit storage");

        let products = store.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_unknown_id_mutations_write_nothing() {
        let counting = Arc::new(CountingStorage::new());
        let storage: Arc<dyn Storage> = counting.clone();
        let store = CartStore::new(storage);

        store.add_to_cart(draft("a", 10.0)).await.unwrap();
        assert_eq!(counting.writes(), 1);

        store.increment("ghost").await.unwrap();
        store.decrement("ghost").await.unwrap();
        assert_eq!(counting.writes(), 1);
    }

    #[tokio::test]
    async fn test_decrement_at_floor_still_persists() {
        let counting = Arc::new(CountingStorage::new());
        let storage: Arc<dyn Storage> = counting.clone();
        let store = CartStore::new(storage);

        store.add_to_cart(draft("a", 10.0)).await.unwrap();
        assert_eq!(counting.writes(), 1);

        // Quantity is 1: unchanged in memory, but the id was found so the
        // list is written again.
        store.decrement("a").await.unwrap();
        assert_eq!(counting.writes(), 2);
        assert_eq!(store.products()[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_end_to_end_flow() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let store = CartStore::new(Arc::clone(&storage));
        store.load().await.unwrap();
        assert!(store.products().is_empty());

        // add → quantity 1
        store.add_to_cart(draft("a", 10.0)).await.unwrap();
        let products = store.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "a");
        assert_eq!(products[0].quantity, 1);

        // increment → quantity 2
        store.increment("a").await.unwrap();
        assert_eq!(store.products()[0].quantity, 2);

        // decrement → quantity 1
        store.decrement("a").await.unwrap();
        assert_eq!(store.products()[0].quantity, 1);

        // decrement again → still 1
        store.decrement("a").await.unwrap();
        assert_eq!(store.products()[0].quantity, 1);

        // duplicate add → still one line, quantity still 1
        store.add_to_cart(draft("a", 10.0)).await.unwrap();
        let products = store.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_cart_survives_restart() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());

        // First session
        {
            let store = CartStore::new(Arc::clone(&storage));
            store.load().await.unwrap();
            store.add_to_cart(draft("a", 10.0)).await.unwrap();
            store.add_to_cart(draft("b", 5.0)).await.unwrap();
            store.increment("b").await.unwrap();
        }

        // "Restart": fresh store over the same backend
        let store = CartStore::new(Arc::clone(&storage));
        store.load().await.unwrap();

        let products = store.products();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "a");
        assert_eq!(products[0].quantity, 1);
        assert_eq!(products[1].id, "b");
        assert_eq!(products[1].quantity, 2);
    }
}
