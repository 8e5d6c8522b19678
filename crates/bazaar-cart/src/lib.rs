//! # bazaar-cart: Persistent Cart State for Bazaar
//!
//! The CartStore component: in-memory cart contents, mutation operations,
//! and persistence to the device key-value store so the cart survives app
//! restarts.
//!
//! ## Module Organization
//! ```text
//! bazaar_cart/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── store.rs        ◄─── CartStore: state + hydration + persist-on-mutation
//! ├── provider.rs     ◄─── CartProvider / CartContext / CartHandle scope
//! └── error.rs        ◄─── CartError
//! ```
//!
//! ## Consumer Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Session Lifecycle                             │
//! │                                                                         │
//! │  App start                                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartProvider::mount(storage).await   ← constructs + hydrates once     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  provider.context()                   ← passed down the UI tree        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  context.use_cart()?                  ← Err(OutsideProvider) if the    │
//! │       │                                 context is detached            │
//! │       ▼                                                                 │
//! │  handle.products()                                                     │
//! │  handle.add_to_cart(draft).await?                                      │
//! │  handle.increment(id).await?                                           │
//! │  handle.decrement(id).await?                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Consumers only ever see cloned snapshots plus mutator methods; the list
//! itself is owned by the store and is never handed out mutably.

pub mod error;
pub mod provider;
pub mod store;

pub use error::{CartError, CartResult};
pub use provider::{CartContext, CartHandle, CartProvider};
pub use store::{CartStore, CART_STORAGE_KEY};

// Re-export the domain types consumers pass in and get back.
pub use bazaar_core::{Product, ProductDraft};
