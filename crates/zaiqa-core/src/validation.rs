//! # Validation Module
//!
//! Turns raw submitted form fields into a validated [`OrderDraft`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: THIS MODULE (pure, collects every failed field)           │
//! │  ├── required text fields non-empty                                 │
//! │  ├── quantity parses to a positive integer                          │
//! │  └── price parses to a non-negative amount                          │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Database (SQLite)                                         │
//! │  ├── NOT NULL constraints                                           │
//! │  └── CHECK (quantity > 0, unit_price_paise >= 0)                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Text fields are trimmed for the emptiness check only; the stored value
//! is exactly what the client submitted.
//!
//! ## Usage
//! ```rust
//! use zaiqa_core::validation::OrderForm;
//!
//! let form = OrderForm {
//!     name: "Asha".into(),
//!     address: "12 Elm".into(),
//!     restaurant: "Bawarchi".into(),
//!     menu_item: "Pizza".into(),
//!     quantity: "2".into(),
//!     price: "8.0".into(),
//!     payment_type: "card".into(),
//! };
//!
//! let draft = form.into_draft().unwrap();
//! assert_eq!(draft.quantity, 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::{ValidationError, ValidationErrors};
use crate::money::Money;
use crate::types::OrderDraft;

/// Result type for single-field validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Order Form
// =============================================================================

/// Raw submitted order fields, before any validation.
///
/// Everything is text, exactly as an HTML form posts it. The numeric
/// fields (`quantity`, `price`) stay as strings here; parsing them is part
/// of validation, and a parse failure is a request-level error, not a
/// system fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderForm {
    pub name: String,
    pub address: String,
    pub restaurant: String,
    pub menu_item: String,
    pub quantity: String,
    pub price: String,
    pub payment_type: String,
}

impl OrderForm {
    /// Validates every field and builds the draft.
    ///
    /// All failures are collected; a form with an empty name AND a zero
    /// quantity reports both. On success the draft carries the submitted
    /// text verbatim and the parsed numeric values.
    pub fn into_draft(self) -> Result<OrderDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.capture(validate_required("name", &self.name));
        errors.capture(validate_required("address", &self.address));
        errors.capture(validate_required("restaurant", &self.restaurant));
        errors.capture(validate_required("menu_item", &self.menu_item));
        errors.capture(validate_required("payment_type", &self.payment_type));

        let quantity = errors.capture(parse_quantity(&self.quantity));
        let unit_price = errors.capture(parse_price(&self.price));

        let (quantity, unit_price) = match (quantity, unit_price) {
            (Some(q), Some(p)) if errors.is_empty() => (q, p),
            _ => return Err(errors),
        };

        Ok(OrderDraft {
            customer_name: self.name,
            address: self.address,
            restaurant: self.restaurant,
            menu_item: self.menu_item,
            quantity,
            unit_price,
            payment_type: self.payment_type,
        })
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates that a required text field is non-empty after trimming.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }

    Ok(())
}

/// Parses the quantity field: an integer, strictly positive.
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let quantity: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::invalid_number("quantity", "must be a whole number"))?;

    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(quantity)
}

/// Parses the price field: a decimal amount, zero allowed (free items),
/// negative rejected.
pub fn parse_price(raw: &str) -> ValidationResult<Money> {
    let price: Money = raw
        .parse()
        .map_err(|e: crate::money::ParseMoneyError| {
            ValidationError::invalid_number("price", e.reason)
        })?;

    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(price)
}

// =============================================================================
// Catalog Cross-Check (strict mode)
// =============================================================================

/// Checks a draft against the static catalog.
///
/// Only the order service's strict mode calls this. The default intake
/// pipeline accepts arbitrary restaurant, menu item and price, exactly as
/// the form does. Strict mode requires:
/// - the restaurant to be a catalog restaurant,
/// - the menu item to be on the menu,
/// - the submitted unit price to equal the listed price.
pub fn check_against_catalog(draft: &OrderDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if !catalog::is_known_restaurant(&draft.restaurant) {
        errors.push(ValidationError::NotInCatalog {
            field: "restaurant".to_string(),
            value: draft.restaurant.clone(),
        });
    }

    match catalog::menu_item(&draft.menu_item) {
        Some(item) if item.price != draft.unit_price => {
            errors.push(ValidationError::PriceMismatch {
                menu_item: draft.menu_item.clone(),
                expected: item.price,
                submitted: draft.unit_price,
            });
        }
        Some(_) => {}
        None => {
            errors.push(ValidationError::NotInCatalog {
                field: "menu_item".to_string(),
                value: draft.menu_item.clone(),
            });
        }
    }

    errors.into_result(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> OrderForm {
        OrderForm {
            name: "Asha".to_string(),
            address: "12 Elm".to_string(),
            restaurant: "Bawarchi".to_string(),
            menu_item: "Pizza".to_string(),
            quantity: "2".to_string(),
            price: "8.0".to_string(),
            payment_type: "card".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_draft() {
        let draft = form().into_draft().unwrap();

        assert_eq!(draft.customer_name, "Asha");
        assert_eq!(draft.quantity, 2);
        assert_eq!(draft.unit_price, Money::from_paise(800));
        assert_eq!(draft.total(), Money::from_paise(1600));
    }

    #[test]
    fn test_empty_required_field() {
        let mut bad = form();
        bad.name = "   ".to_string();

        let errors = bad.into_draft().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.to_string(), "name is required");
    }

    #[test]
    fn test_submitted_text_is_stored_verbatim() {
        let mut spaced = form();
        spaced.name = " Asha ".to_string();

        // Trimming is only for the emptiness check
        let draft = spaced.into_draft().unwrap();
        assert_eq!(draft.customer_name, " Asha ");
    }

    #[test]
    fn test_quantity_rules() {
        assert_eq!(parse_quantity("2").unwrap(), 2);
        assert_eq!(parse_quantity(" 10 ").unwrap(), 10);

        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-1").is_err());
        assert!(parse_quantity("2.5").is_err());
        assert!(parse_quantity("two").is_err());
        assert!(parse_quantity("").is_err());
    }

    #[test]
    fn test_price_rules() {
        assert_eq!(parse_price("8.0").unwrap(), Money::from_paise(800));
        assert_eq!(parse_price("0").unwrap(), Money::zero());

        assert!(parse_price("-2").is_err());
        assert!(parse_price("abc").is_err());
        assert!(parse_price("8.125").is_err());
    }

    #[test]
    fn test_all_failures_reported_together() {
        let bad = OrderForm {
            name: String::new(),
            address: String::new(),
            restaurant: "Bawarchi".to_string(),
            menu_item: "Pizza".to_string(),
            quantity: "0".to_string(),
            price: "oops".to_string(),
            payment_type: "card".to_string(),
        };

        let errors = bad.into_draft().unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_catalog_check_accepts_listed_order() {
        let draft = form().into_draft().unwrap();
        assert!(check_against_catalog(&draft).is_ok());
    }

    #[test]
    fn test_catalog_check_rejects_unknown_and_mismatched() {
        let mut draft = form().into_draft().unwrap();
        draft.restaurant = "Nowhere Kitchen".to_string();
        draft.unit_price = Money::from_paise(100);

        let errors = check_against_catalog(&draft).unwrap_err();
        assert_eq!(errors.len(), 2);

        let mut draft = form().into_draft().unwrap();
        draft.menu_item = "Sushi".to_string();
        let errors = check_against_catalog(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
    }
}
