//! # Catalog Module
//!
//! Static reference data: the menu items available for ordering and the
//! restaurants they can be ordered from. Fixed at compile time, immutable
//! for the process lifetime, never persisted.
//!
//! Submitted orders are NOT required to reference this catalog. The intake
//! pipeline accepts arbitrary restaurant and menu-item text unless the
//! order service's strict mode is switched on, in which case
//! [`crate::validation::check_against_catalog`] consults these tables.

use serde::Serialize;

use crate::money::Money;

// =============================================================================
// Catalog Item
// =============================================================================

/// A menu item with its listed price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    /// Display name, unique within the menu.
    pub name: &'static str,

    /// Listed price per unit.
    pub price: Money,
}

impl CatalogItem {
    const fn new(name: &'static str, price_paise: i64) -> Self {
        CatalogItem {
            name,
            price: Money::from_paise(price_paise),
        }
    }
}

// =============================================================================
// Reference Data
// =============================================================================

/// The fixed menu.
pub const MENU_ITEMS: &[CatalogItem] = &[
    CatalogItem::new("Biryani", 1000),
    CatalogItem::new("Pizza", 800),
    CatalogItem::new("Roasted Chicken", 500),
    CatalogItem::new("Pasta", 700),
    CatalogItem::new("Samosa", 400),
];

/// The fixed restaurant list.
pub const RESTAURANTS: &[&str] = &[
    "Paradise Biryani",
    "Bawarchi",
    "Shah Ghouse Café & Restaurant",
    "Chutneys",
    "Hotel Shadab",
    "Ohri's",
    "Jewel of Nizam – The Minar",
    "The Spicy Venue",
    "Cafe Bahar",
    "Kritunga Restaurant",
];

// =============================================================================
// Lookups
// =============================================================================

/// Finds a menu item by exact name.
pub fn menu_item(name: &str) -> Option<&'static CatalogItem> {
    MENU_ITEMS.iter().find(|item| item.name == name)
}

/// True when the restaurant is in the catalog (exact match).
pub fn is_known_restaurant(name: &str) -> bool {
    RESTAURANTS.contains(&name)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lookup() {
        let pizza = menu_item("Pizza").unwrap();
        assert_eq!(pizza.price, Money::from_paise(800));

        assert!(menu_item("Sushi").is_none());
        // Lookups are exact, not case-folded
        assert!(menu_item("pizza").is_none());
    }

    #[test]
    fn test_restaurant_lookup() {
        assert!(is_known_restaurant("Bawarchi"));
        assert!(is_known_restaurant("Jewel of Nizam – The Minar"));
        assert!(!is_known_restaurant("Nowhere Kitchen"));
    }

    #[test]
    fn test_catalog_shape() {
        assert_eq!(MENU_ITEMS.len(), 5);
        assert_eq!(RESTAURANTS.len(), 10);

        for item in MENU_ITEMS {
            assert!(!item.name.is_empty());
            assert!(!item.price.is_negative());
        }
    }
}
