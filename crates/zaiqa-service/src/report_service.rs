//! # Report Service
//!
//! The per-restaurant sales summary.

use tracing::debug;

use crate::error::ServiceError;
use zaiqa_core::RestaurantSales;
use zaiqa_db::Database;

/// Exposes the sales report.
///
/// Delegates entirely to the order repository's aggregate query; no
/// additional filtering or validation happens here. Rows come back
/// ordered ascending by restaurant name.
#[derive(Debug, Clone)]
pub struct ReportService {
    db: Database,
}

impl ReportService {
    /// Creates a report service over the given database.
    pub fn new(db: Database) -> Self {
        ReportService { db }
    }

    /// Total quantity sold per restaurant, across all stored orders.
    ///
    /// An empty store yields `Ok(vec![])`. An unreachable store yields
    /// `Err(ServiceError::Storage(..))`; "no orders yet" and "store
    /// down" are never conflated.
    pub async fn get_report(&self) -> Result<Vec<RestaurantSales>, ServiceError> {
        debug!("Building sales report");

        let report = self.db.orders().aggregate_quantity_by_restaurant().await?;
        Ok(report)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order_service::OrderService;
    use zaiqa_core::OrderForm;
    use zaiqa_db::DbConfig;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn form(restaurant: &str, quantity: &str) -> OrderForm {
        OrderForm {
            name: "Asha".to_string(),
            address: "12 Elm".to_string(),
            restaurant: restaurant.to_string(),
            menu_item: "Pizza".to_string(),
            quantity: quantity.to_string(),
            price: "8.0".to_string(),
            payment_type: "card".to_string(),
        }
    }

    #[tokio::test]
    async fn test_report_groups_sums_and_sorts() {
        let db = test_db().await;
        let orders = OrderService::new(db.clone());
        let reports = ReportService::new(db);

        orders.submit(form("Bawarchi", "2")).await.unwrap();
        orders.submit(form("Bawarchi", "3")).await.unwrap();
        orders.submit(form("Chutneys", "1")).await.unwrap();

        let report = reports.get_report().await.unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].restaurant, "Bawarchi");
        assert_eq!(report[0].total_quantity, 5);
        assert_eq!(report[1].restaurant, "Chutneys");
        assert_eq!(report[1].total_quantity, 1);

        // Stable across repeated calls on an unchanged store
        assert_eq!(reports.get_report().await.unwrap(), report);
    }

    #[tokio::test]
    async fn test_empty_store_is_an_empty_report() {
        let db = test_db().await;
        let reports = ReportService::new(db);

        assert_eq!(reports.get_report().await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_unreachable_store_is_an_error_not_an_empty_report() {
        let db = test_db().await;
        let reports = ReportService::new(db.clone());
        db.close().await;

        let err = reports.get_report().await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
    }
}
