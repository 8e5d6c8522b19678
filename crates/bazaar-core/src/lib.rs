//! # bazaar-core: Pure Cart Logic for Bazaar
//!
//! This crate is the heart of the Bazaar cart. It contains the cart's domain
//! types and mutation rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bazaar Cart Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront UI (external)                        │   │
//! │  │    Catalog screen ──► Cart screen ──► Checkout                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bazaar-cart (CartStore)                      │   │
//! │  │    provider scope, hydration, persist-on-mutation              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bazaar-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐        ┌───────────────────────────┐       │   │
//! │  │   │    types      │        │           cart            │       │   │
//! │  │   │  Product      │        │  add / increment /        │       │   │
//! │  │   │  ProductDraft │        │  decrement rules          │       │   │
//! │  │   └───────────────┘        └───────────────────────────┘       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductDraft)
//! - [`cart`] - The ordered cart container and its mutation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every mutation is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Id Uniqueness**: No two cart entries ever share an id
//! 4. **Quantity Floor**: Quantities never drop below 1; items are never removed

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bazaar_core::Cart` instead of
// `use bazaar_core::cart::Cart`

pub use cart::Cart;
pub use types::{Product, ProductDraft};
