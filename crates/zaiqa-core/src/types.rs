//! # Domain Types
//!
//! Core domain records used throughout Zaiqa.
//!
//! ## Record Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  OrderForm (raw text)                                               │
//! │       │  validation                                                 │
//! │       ▼                                                             │
//! │  OrderDraft (validated, no id)                                      │
//! │       │  OrderRepository::insert                                    │
//! │       ▼                                                             │
//! │  Order (id assigned by the store; insert-only, never updated)       │
//! │       │  aggregate query                                            │
//! │       ▼                                                             │
//! │  RestaurantSales (derived, read-only)                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The line total is deliberately a method, not a field. It is recomputed
//! from quantity and unit price every time, so a stored total can never
//! drift from the two values it derives from.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Order Draft
// =============================================================================

/// A fully validated order that has not been persisted yet.
///
/// Produced only by the validation layer: every text field is non-empty,
/// quantity is positive, unit price is non-negative. The store's insert is
/// the only consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Customer name, as submitted.
    pub customer_name: String,

    /// Delivery address, as submitted.
    pub address: String,

    /// Restaurant name. Free-form text; catalog membership is not
    /// enforced unless strict mode is on.
    pub restaurant: String,

    /// Menu item name. Free-form text, same latitude as `restaurant`.
    pub menu_item: String,

    /// Number of units ordered. Always > 0.
    pub quantity: i64,

    /// Price per unit. Always >= 0.
    pub unit_price: Money,

    /// Payment type, e.g. "cash", "card", "online". Free-form text.
    pub payment_type: String,
}

impl OrderDraft {
    /// Line total: quantity × unit price.
    pub fn total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order
// =============================================================================

/// One persisted customer purchase.
///
/// Identical to [`OrderDraft`] plus the store-assigned id. Orders are
/// created exactly once per successful submission and never updated or
/// deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    /// Unique identifier, assigned by the store on insert. Immutable and
    /// never reused.
    pub id: i64,

    /// Customer name.
    pub customer_name: String,

    /// Delivery address.
    pub address: String,

    /// Restaurant name.
    pub restaurant: String,

    /// Menu item name.
    pub menu_item: String,

    /// Number of units ordered.
    pub quantity: i64,

    /// Price per unit.
    pub unit_price: Money,

    /// Payment type.
    pub payment_type: String,
}

impl Order {
    /// Line total: quantity × unit price, recomputed on every call.
    pub fn total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Builds the persisted record from a draft and its assigned id.
    pub fn from_draft(id: i64, draft: &OrderDraft) -> Self {
        Order {
            id,
            customer_name: draft.customer_name.clone(),
            address: draft.address.clone(),
            restaurant: draft.restaurant.clone(),
            menu_item: draft.menu_item.clone(),
            quantity: draft.quantity,
            unit_price: draft.unit_price,
            payment_type: draft.payment_type.clone(),
        }
    }
}

// =============================================================================
// Restaurant Sales
// =============================================================================

/// One row of the sales report: total quantity sold for a restaurant.
///
/// Derived on demand from the order collection, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RestaurantSales {
    /// Restaurant name as stored on the orders.
    pub restaurant: String,

    /// Sum of `quantity` across that restaurant's orders.
    pub total_quantity: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> OrderDraft {
        OrderDraft {
            customer_name: "Asha".to_string(),
            address: "12 Elm".to_string(),
            restaurant: "Bawarchi".to_string(),
            menu_item: "Pizza".to_string(),
            quantity: 2,
            unit_price: Money::from_paise(800),
            payment_type: "card".to_string(),
        }
    }

    #[test]
    fn test_total_is_recomputed() {
        let mut order = Order::from_draft(1, &draft());
        assert_eq!(order.total(), Money::from_paise(1600));

        // The total tracks the fields it derives from; nothing is cached.
        order.quantity = 3;
        assert_eq!(order.total(), Money::from_paise(2400));
    }

    #[test]
    fn test_from_draft_copies_every_field() {
        let draft = draft();
        let order = Order::from_draft(42, &draft);

        assert_eq!(order.id, 42);
        assert_eq!(order.customer_name, draft.customer_name);
        assert_eq!(order.address, draft.address);
        assert_eq!(order.restaurant, draft.restaurant);
        assert_eq!(order.menu_item, draft.menu_item);
        assert_eq!(order.quantity, draft.quantity);
        assert_eq!(order.unit_price, draft.unit_price);
        assert_eq!(order.payment_type, draft.payment_type);
    }

    #[test]
    fn test_draft_total() {
        assert_eq!(draft().total(), Money::from_paise(1600));
    }
}
