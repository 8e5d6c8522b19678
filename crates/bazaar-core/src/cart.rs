//! # Cart Container
//!
//! The ordered cart container and its mutation rules.
//!
//! ## Invariants
//! - Entries are unique by `id` (adding an id already present is a no-op)
//! - Quantity is always >= 1 (decrement floors at 1; items are never removed)
//! - Insertion order is preserved (the UI renders the list as-is)
//!
//! ## Mutation Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Mutation Rules                               │
//! │                                                                         │
//! │  add(draft)         id absent ──► push with quantity 1   (changed)     │
//! │                     id present ─► no-op                  (unchanged)   │
//! │                                                                         │
//! │  increment(id)      id present ─► quantity += 1          (found)       │
//! │                     id absent ──► no-op                  (not found)   │
//! │                                                                         │
//! │  decrement(id)      quantity>1 ─► quantity -= 1          (found)       │
//! │                     quantity=1 ─► left at 1              (found)       │
//! │                     id absent ──► no-op                  (not found)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each mutator reports what happened as a `bool` so the stateful layer
//! above can decide whether the list needs to be persisted.

use crate::types::{Product, ProductDraft};

/// The shopping cart: an ordered list of line items keyed by product id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Creates a cart from an already-persisted list of line items.
    ///
    /// The list is taken as-is: persisted blobs are trusted, not re-validated.
    pub fn from_items(items: Vec<Product>) -> Self {
        Cart { items }
    }

    /// Adds a catalog product to the cart with quantity 1.
    ///
    /// ## Behavior
    /// - If no entry has this id: appended to the end of the list
    /// - If an entry with this id exists: no-op (use [`increment`](Self::increment)
    ///   to buy more of an existing product)
    ///
    /// ## Returns
    /// `true` if the cart changed, `false` if the id was already present.
    pub fn add(&mut self, draft: ProductDraft) -> bool {
        if self.items.iter().any(|item| item.id == draft.id) {
            return false;
        }

        self.items.push(draft.into_line_item());
        true
    }

    /// Increases the quantity of the entry with the given id by 1.
    ///
    /// There is no upper bound on quantity.
    ///
    /// ## Returns
    /// `true` if an entry with this id exists, `false` otherwise.
    pub fn increment(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.quantity += 1;
                true
            }
            None => false,
        }
    }

    /// Decreases the quantity of the entry with the given id by 1.
    ///
    /// ## Behavior
    /// - Quantity > 1: decremented
    /// - Quantity == 1: left at 1 (items are never removed through decrement)
    ///
    /// ## Returns
    /// `true` if an entry with this id exists - including when the quantity
    /// was already at the floor - `false` otherwise.
    pub fn decrement(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                if item.quantity > 1 {
                    item.quantity -= 1;
                }
                true
            }
            None => false,
        }
    }

    /// The ordered line items, oldest first.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// The quantity of the entry with the given id, if present.
    pub fn quantity_of(&self, id: &str) -> Option<u32> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.quantity)
    }

    /// Number of distinct line items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: &str, price: f64) -> ProductDraft {
        ProductDraft::new(id, format!("Product {id}"), format!("https://img/{id}.png"), price)
    }

    #[test]
    fn test_distinct_adds_each_get_quantity_one() {
        let mut cart = Cart::new();

        assert!(cart.add(draft("a", 10.0)));
        assert!(cart.add(draft("b", 5.0)));
        assert!(cart.add(draft("c", 7.5)));

        assert_eq!(cart.len(), 3);
        assert!(cart.items().iter().all(|item| item.quantity == 1));
    }

    #[test]
    fn test_duplicate_add_is_a_noop() {
        let mut cart = Cart::new();

        assert!(cart.add(draft("a", 10.0)));
        assert!(!cart.add(draft("a", 10.0)));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("a"), Some(1));
    }

    #[test]
    fn test_increment_existing_and_missing() {
        let mut cart = Cart::new();
        cart.add(draft("a", 10.0));

        assert!(cart.increment("a"));
        assert_eq!(cart.quantity_of("a"), Some(2));

        let before = cart.clone();
        assert!(!cart.increment("ghost"));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut cart = Cart::new();
        cart.add(draft("a", 10.0));

        // Found, but quantity stays at the floor.
        assert!(cart.decrement("a"));
        assert_eq!(cart.quantity_of("a"), Some(1));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_decrement_above_one() {
        let mut cart = Cart::new();
        cart.add(draft("a", 10.0));
        cart.increment("a");
        cart.increment("a");
        assert_eq!(cart.quantity_of("a"), Some(3));

        assert!(cart.decrement("a"));
        assert_eq!(cart.quantity_of("a"), Some(2));
    }

    #[test]
    fn test_decrement_missing_is_a_noop() {
        let mut cart = Cart::new();
        cart.add(draft("a", 10.0));

        let before = cart.clone();
        assert!(!cart.decrement("ghost"));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(draft("b", 5.0));
        cart.add(draft("a", 10.0));
        cart.add(draft("c", 7.5));
        cart.increment("a");

        let ids: Vec<&str> = cart.items().iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_from_items_trusts_the_blob() {
        let items = vec![draft("a", 10.0).into_line_item(), draft("b", 5.0).into_line_item()];
        let cart = Cart::from_items(items.clone());

        assert_eq!(cart.items(), items.as_slice());
    }
}
