//! # Order Service
//!
//! The submit pipeline: validate raw form fields, persist exactly one
//! order, encode its invoice payload.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::ServiceError;
use zaiqa_core::validation::check_against_catalog;
use zaiqa_core::{invoice, Order, OrderForm};
use zaiqa_db::Database;

// =============================================================================
// Response
// =============================================================================

/// What a successful submission returns to the boundary layer.
///
/// The templating layer shows the order (including its assigned id) on
/// the confirmation view; the invoice text goes to the scannable-code
/// renderer.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSubmission {
    /// The persisted order, id populated.
    pub order: Order,

    /// The invoice payload for scannable-code rendering.
    pub invoice: String,
}

// =============================================================================
// Order Service
// =============================================================================

/// Validates, persists and encodes submitted orders.
///
/// Constructed with an injected [`Database`]; holds no other state.
///
/// ## Catalog Enforcement
/// By default the service accepts arbitrary restaurant, menu item and
/// price text, matching the intake form's latitude. Switching on
/// [`enforce_catalog`](OrderService::enforce_catalog) additionally
/// requires the restaurant and menu item to exist in the catalog and the
/// price to match the listed price.
#[derive(Debug, Clone)]
pub struct OrderService {
    db: Database,
    enforce_catalog: bool,
}

impl OrderService {
    /// Creates an order service over the given database.
    pub fn new(db: Database) -> Self {
        OrderService {
            db,
            enforce_catalog: false,
        }
    }

    /// Sets whether submissions are cross-checked against the catalog.
    pub fn enforce_catalog(mut self, enforce: bool) -> Self {
        self.enforce_catalog = enforce;
        self
    }

    /// Validates the form, persists the order, returns it with its
    /// invoice payload.
    ///
    /// ## Contract
    /// - every failed field is reported together in one
    ///   `ServiceError::Validation`; nothing is persisted on failure
    /// - exactly one store insert per successful call
    /// - the invoice is encoded from the persisted order, so its total
    ///   is always quantity × unit price of what was actually stored
    pub async fn submit(&self, form: OrderForm) -> Result<OrderSubmission, ServiceError> {
        debug!(restaurant = %form.restaurant, menu_item = %form.menu_item, "Order submitted");

        let draft = form.into_draft()?;

        if self.enforce_catalog {
            check_against_catalog(&draft)?;
        }

        let order = self.db.orders().insert(&draft).await?;
        let invoice = invoice::encode(&order);

        info!(
            id = order.id,
            restaurant = %order.restaurant,
            total = %order.total(),
            "Order persisted"
        );

        Ok(OrderSubmission { order, invoice })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
