//! # Invoice Payload Encoding
//!
//! Serializes a persisted order into the text payload that the boundary
//! layer renders as a scannable code. The core's obligation ends at this
//! text; pixel generation lives outside.
//!
//! ## Format
//! Eight lines, `\n`-separated, fixed label order, no trailing newline:
//!
//! ```text
//! Name: Asha
//! Address: 12 Elm
//! Restaurant: Bawarchi
//! Menu Item: Pizza
//! Quantity: 2
//! Price: 8.0
//! Payment Type: card
//! Total: 16.0
//! ```
//!
//! Numeric fields use the [`Money`](crate::money::Money) display format
//! (minimal decimal, at least one fractional digit). The total is always
//! quantity × unit price recomputed from the order, never a stored value.

use crate::types::Order;

/// Encodes an order as the invoice payload.
///
/// Pure and deterministic: the same order always yields byte-identical
/// text.
pub fn encode(order: &Order) -> String {
    format!(
        "Name: {}\nAddress: {}\nRestaurant: {}\nMenu Item: {}\nQuantity: {}\nPrice: {}\nPayment Type: {}\nTotal: {}",
        order.customer_name,
        order.address,
        order.restaurant,
        order.menu_item,
        order.quantity,
        order.unit_price,
        order.payment_type,
        order.total(),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::OrderDraft;

    fn order() -> Order {
        Order::from_draft(
            1,
            &OrderDraft {
                customer_name: "Asha".to_string(),
                address: "12 Elm".to_string(),
                restaurant: "Bawarchi".to_string(),
                menu_item: "Pizza".to_string(),
                quantity: 2,
                unit_price: Money::from_paise(800),
                payment_type: "card".to_string(),
            },
        )
    }

    #[test]
    fn test_exact_payload() {
        let payload = encode(&order());

        assert_eq!(
            payload,
            "Name: Asha\n\
             Address: 12 Elm\n\
             Restaurant: Bawarchi\n\
             Menu Item: Pizza\n\
             Quantity: 2\n\
             Price: 8.0\n\
             Payment Type: card\n\
             Total: 16.0"
        );
    }

    #[test]
    fn test_last_line_is_total() {
        let payload = encode(&order());
        assert_eq!(payload.lines().last().unwrap(), "Total: 16.0");
        assert_eq!(payload.lines().count(), 8);
        assert!(!payload.ends_with('\n'));
    }

    #[test]
    fn test_deterministic() {
        let order = order();
        assert_eq!(encode(&order), encode(&order));
    }

    #[test]
    fn test_total_is_recomputed_not_stored() {
        let mut order = order();
        order.quantity = 3;

        // The payload tracks the current field values
        assert!(encode(&order).ends_with("Total: 24.0"));
    }

    #[test]
    fn test_fractional_price_rendering() {
        let mut order = order();
        order.unit_price = Money::from_paise(825);
        order.quantity = 3;

        let payload = encode(&order);
        assert!(payload.contains("Price: 8.25"));
        assert!(payload.ends_with("Total: 24.75"));
    }
}
