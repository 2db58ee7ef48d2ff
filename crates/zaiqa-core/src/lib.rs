//! # zaiqa-core: Pure Business Logic for Zaiqa
//!
//! This crate is the heart of the ordering system. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Zaiqa Architecture                            │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │              Boundary (templating / HTTP / QR render)       │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                zaiqa-service (Order + Report)               │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │               ★ zaiqa-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────┐ │   │
//! │  │   │  types  │ │  money  │ │ catalog │ │validation│ │invc.│ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └─────┘ │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                 zaiqa-db (SQLite storage)                   │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Order, OrderDraft, RestaurantSales)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Static menu items and restaurant names
//! - [`validation`] - Raw form input to validated draft
//! - [`invoice`] - Deterministic invoice payload encoding
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output, always
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in paise (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use zaiqa_core::money::Money;
//!
//! let price: Money = "8.0".parse().unwrap();
//! let total = price * 2;
//!
//! assert_eq!(total.paise(), 1600);
//! assert_eq!(total.to_string(), "16.0");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod invoice;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use zaiqa_core::Money` instead of
// `use zaiqa_core::money::Money`

pub use catalog::{CatalogItem, MENU_ITEMS, RESTAURANTS};
pub use error::{ValidationError, ValidationErrors};
pub use money::Money;
pub use types::{Order, OrderDraft, RestaurantSales};
pub use validation::OrderForm;
