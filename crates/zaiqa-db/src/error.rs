//! # Storage Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! SQLite error (sqlx::Error)
//!      │
//!      ▼
//! StorageError (this module)  - adds context and categorization
//!      │
//!      ▼
//! ServiceError (zaiqa-service)  - what callers of the services see
//! ```

use thiserror::Error;

/// Database operation errors.
///
/// Wraps sqlx errors and categorizes them for callers. Storage failures
/// are never retried automatically; they surface to the caller as a
/// failed submission or report request.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Entity not found in the database.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The persistence medium is unavailable: the file cannot be opened
    /// or created, or the pool has been closed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// A schema migration failed to apply.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// A CHECK or NOT NULL constraint rejected the row. With validated
    /// drafts this indicates a caller bypassing validation.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Query execution failed.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// All pool connections are in use.
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Anything sqlx reports that fits none of the above.
    #[error("internal database error: {0}")]
    Internal(String),
}

impl StorageError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        StorageError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

/// Convert sqlx errors to StorageError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound     → StorageError::NotFound
/// sqlx::Error::Database        → constraint message sniffing
/// sqlx::Error::PoolTimedOut    → StorageError::PoolExhausted
/// sqlx::Error::PoolClosed      → StorageError::ConnectionFailed
/// Other                        → StorageError::Internal
/// ```
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StorageError::NotFound {
                entity: "record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports constraint failures in the message text:
                // "CHECK constraint failed: ..." / "NOT NULL constraint failed: ..."
                if msg.contains("constraint failed") {
                    StorageError::ConstraintViolation(msg.to_string())
                } else {
                    StorageError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => StorageError::PoolExhausted,

            sqlx::Error::PoolClosed => {
                StorageError::ConnectionFailed("pool is closed".to_string())
            }

            _ => StorageError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StorageError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StorageError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type StorageResult<T> = Result<T, StorageError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StorageError::not_found("order", 17);
        assert_eq!(err.to_string(), "order not found: 17");
    }

    #[test]
    fn test_pool_errors_map_to_availability() {
        let err: StorageError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StorageError::PoolExhausted));

        let err: StorageError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, StorageError::ConnectionFailed(_)));
    }
}
