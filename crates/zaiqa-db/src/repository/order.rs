//! # Order Repository
//!
//! Database operations for orders: the durable record of every submitted
//! purchase, and the grouped-sum query behind the sales report.
//!
//! ## Order Lifecycle
//! ```text
//! 1. INSERT
//!    └── insert(&draft) → Order { id assigned by SQLite }
//!
//! 2. READ
//!    └── get_by_id(id) → Option<Order>
//!
//! 3. REPORT
//!    └── aggregate_quantity_by_restaurant() → Vec<RestaurantSales>
//!
//! There is no update or delete: orders are append-only.
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StorageResult;
use zaiqa_core::{Order, OrderDraft, RestaurantSales};

/// Repository for order database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.orders();
/// let order = repo.insert(&draft).await?;
/// let report = repo.aggregate_quantity_by_restaurant().await?;
/// ```
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Persists a validated draft and returns the stored order.
    ///
    /// The id comes from the table's AUTOINCREMENT key, so assignment is
    /// atomic with the insert: concurrent submissions can never share or
    /// reuse an id, and a failed insert stores nothing at all.
    ///
    /// The draft must already be validated (all fields present,
    /// quantity > 0, price >= 0); the table's CHECK constraints are a
    /// backstop, not the contract.
    pub async fn insert(&self, draft: &OrderDraft) -> StorageResult<Order> {
        debug!(
            restaurant = %draft.restaurant,
            menu_item = %draft.menu_item,
            quantity = draft.quantity,
            "Inserting order"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO orders (
                customer_name, address, restaurant, menu_item,
                quantity, unit_price_paise, payment_type
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&draft.customer_name)
        .bind(&draft.address)
        .bind(&draft.restaurant)
        .bind(&draft.menu_item)
        .bind(draft.quantity)
        .bind(draft.unit_price.paise())
        .bind(&draft.payment_type)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Order inserted");

        Ok(Order::from_draft(id, draft))
    }

    /// Gets an order by id.
    pub async fn get_by_id(&self, id: i64) -> StorageResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, customer_name, address, restaurant, menu_item,
                   quantity, unit_price_paise AS unit_price, payment_type
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Counts all stored orders.
    pub async fn count(&self) -> StorageResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Total quantity sold per restaurant, across all stored orders.
    ///
    /// Rows are ordered ascending by restaurant name: that is the
    /// documented, engine-independent ordering of the sales report, and
    /// it makes repeated calls on an unchanged store byte-stable. The
    /// single-statement GROUP BY observes one consistent snapshot, so a
    /// concurrent insert is either fully counted or not counted at all.
    ///
    /// An empty store yields an empty vector, not an error.
    pub async fn aggregate_quantity_by_restaurant(&self) -> StorageResult<Vec<RestaurantSales>> {
        debug!("Aggregating quantities by restaurant");

        let rows = sqlx::query_as::<_, RestaurantSales>(
            r#"
            SELECT restaurant, SUM(quantity) AS total_quantity
            FROM orders
            GROUP BY restaurant
            ORDER BY restaurant ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
