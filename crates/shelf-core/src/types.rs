//! # Domain Types
//!
//! The Product entity and its create/update payload.
//!
//! ## Entity Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Product Lifecycle                              │
//! │                                                                     │
//! │  ProductDraft ──create──► Product { id: assigned by storage }       │
//! │                              │                                      │
//! │                              │ update(id, draft)                    │
//! │                              ▼                                      │
//! │                           Product { same id, all four mutable       │
//! │                                     fields overwritten }            │
//! │                              │                                      │
//! │                              │ delete(id) / delete_all()            │
//! │                              ▼                                      │
//! │                            gone                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Identifier for a [`Product`], assigned by the persistence layer on insert.
///
/// SQLite hands these out from `INTEGER PRIMARY KEY AUTOINCREMENT`, so the
/// first product in a fresh database gets id 1.
pub type ProductId = i64;

// =============================================================================
// Product
// =============================================================================

/// A product in the store.
///
/// The `id` is immutable for the entity's lifetime. `name`, `description`,
/// `price_cents` and `stock` are overwritten as a unit by update; the
/// timestamps are maintained by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier, storage-assigned.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Optional free-form description.
    pub description: Option<String>,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Units on hand.
    pub stock: i64,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a [`Money`] value.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// The payload for creating or updating a [`Product`].
///
/// Carries exactly the four mutable fields. An update applies the whole
/// draft unconditionally; empty or zero fields overwrite just the same.
/// There is no partial merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub stock: i64,
}

impl ProductDraft {
    /// Convenience constructor for the common case.
    pub fn new(name: impl Into<String>, price: Money, stock: i64) -> Self {
        ProductDraft {
            name: name.into(),
            description: None,
            price_cents: price.cents(),
            stock,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_builder_sets_fields() {
        let draft = ProductDraft::new("Pen", Money::from_cents(150), 10)
            .description("Ballpoint, blue ink");

        assert_eq!(draft.name, "Pen");
        assert_eq!(draft.description.as_deref(), Some("Ballpoint, blue ink"));
        assert_eq!(draft.price_cents, 150);
        assert_eq!(draft.stock, 10);
    }

    #[test]
    fn product_price_view() {
        let product = Product {
            id: 1,
            name: "Pen".into(),
            description: None,
            price_cents: 150,
            stock: 10,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert_eq!(product.price(), Money::from_cents(150));
    }

    #[test]
    fn draft_serde_round_trip() {
        let draft = ProductDraft::new("Gel Pen", Money::from_cents(200), 0);
        let json = serde_json::to_string(&draft).unwrap();
        let back: ProductDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }
}
