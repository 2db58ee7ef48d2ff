//! # zaiqa-db: Database Layer for Zaiqa
//!
//! Durable order storage on SQLite, accessed through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Zaiqa Data Flow                              │
//! │                                                                     │
//! │  OrderService::submit / ReportService::get_report                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                   zaiqa-db (THIS CRATE)                     │   │
//! │  │                                                             │   │
//! │  │   ┌─────────────┐   ┌─────────────────┐   ┌─────────────┐  │   │
//! │  │   │  Database   │   │ OrderRepository │   │ Migrations  │  │   │
//! │  │   │  (pool.rs)  │◄──│ insert/aggregate│   │ (embedded)  │  │   │
//! │  │   └─────────────┘   └─────────────────┘   └─────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (single `orders` table)                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//! - [`repository`] - The order repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zaiqa_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/zaiqa.db")).await?;
//! let order = db.orders().insert(&draft).await?;
//! let report = db.orders().aggregate_quantity_by_restaurant().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, StorageResult};
pub use pool::{Database, DbConfig};
pub use repository::order::OrderRepository;
