//! # Domain Types
//!
//! Core domain types for the Bazaar cart.
//!
//! ## Wire Format
//! These types ARE the persisted format: the cart is stored as a JSON array
//! of [`Product`] objects with field names exactly
//! `{id, title, image_url, price, quantity}`. Renaming a field here is a
//! breaking change for every device with a saved cart.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product (cart line item)
// =============================================================================

/// A line item in the cart.
///
/// ## Identity
/// `id` is the catalog's product identifier and is unique within a cart -
/// the [`Cart`](crate::cart::Cart) mutators enforce that no two entries
/// share an id.
///
/// ## Price
/// `price` is carried verbatim as supplied by the catalog. The cart performs
/// no arithmetic on it; totals are computed by the surrounding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Catalog product identifier. Unique within the cart.
    pub id: String,

    /// Display title shown in the cart UI.
    pub title: String,

    /// Catalog image URL for the line item thumbnail.
    pub image_url: String,

    /// Unit price as supplied by the catalog.
    pub price: f64,

    /// Quantity in the cart. Always >= 1.
    pub quantity: u32,
}

// =============================================================================
// Product Draft
// =============================================================================

/// The catalog-supplied shape accepted by `add_to_cart`.
///
/// A draft has no quantity: adding a product always inserts it with
/// quantity 1. To buy more of an existing product, the consumer increments
/// the line item instead of adding again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductDraft {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: f64,
}

impl ProductDraft {
    /// Creates a new draft from catalog data.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: f64,
    ) -> Self {
        ProductDraft {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
        }
    }

    /// Converts the draft into a cart line item with quantity 1.
    pub fn into_line_item(self) -> Product {
        Product {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity: 1,
        }
    }
}

impl From<ProductDraft> for Product {
    fn from(draft: ProductDraft) -> Self {
        draft.into_line_item()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_becomes_line_item_with_quantity_one() {
        let draft = ProductDraft::new("sku-1", "Canvas Tote", "https://img/tote.png", 24.5);
        let item = draft.into_line_item();

        assert_eq!(item.id, "sku-1");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price, 24.5);
    }

    #[test]
    fn test_product_wire_field_names() {
        let item = Product {
            id: "sku-1".to_string(),
            title: "Canvas Tote".to_string(),
            image_url: "https://img/tote.png".to_string(),
            price: 24.5,
            quantity: 2,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "sku-1",
                "title": "Canvas Tote",
                "image_url": "https://img/tote.png",
                "price": 24.5,
                "quantity": 2
            })
        );
    }

    #[test]
    fn test_product_round_trips_through_json() {
        let item = Product {
            id: "sku-9".to_string(),
            title: "Enamel Mug".to_string(),
            image_url: "https://img/mug.png".to_string(),
            price: 10.0,
            quantity: 3,
        };

        let blob = serde_json::to_string(&item).unwrap();
        let restored: Product = serde_json::from_str(&blob).unwrap();
        assert_eq!(restored, item);
    }
}
