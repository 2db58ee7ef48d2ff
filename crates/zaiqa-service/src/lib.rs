//! # zaiqa-service: Service Layer for Zaiqa
//!
//! The two operations the boundary layer calls:
//!
//! - [`OrderService::submit`] - validate raw form fields, persist the
//!   order, return it with its invoice payload
//! - [`ReportService::get_report`] - total quantity sold per restaurant
//!
//! ## Control Flow
//! ```text
//! client form fields
//!      │
//!      ▼
//! OrderService::submit ── validate (zaiqa-core) ── insert (zaiqa-db)
//!      │                                                │
//!      ▼                                                ▼
//! OrderSubmission { order, invoice }            orders table
//!
//! report request
//!      │
//!      ▼
//! ReportService::get_report ── aggregate (zaiqa-db) ──► Vec<RestaurantSales>
//! ```
//!
//! Both services are constructed with an explicitly injected
//! [`Database`](zaiqa_db::Database): created once at process start,
//! closed at shutdown, no global handle anywhere.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod order_service;
pub mod report_service;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::ServiceError;
pub use order_service::{OrderService, OrderSubmission};
pub use report_service::ReportService;
