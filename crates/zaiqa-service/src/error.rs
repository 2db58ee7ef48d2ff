//! # Service Error Type
//!
//! The one error type callers of the services see.
//!
//! ## Taxonomy
//! ```text
//! ValidationErrors (zaiqa-core) ──┐
//!                                 ├──► ServiceError
//! StorageError (zaiqa-db) ────────┘
//! ```
//!
//! The two variants keep the failure classes distinguishable at the
//! boundary: a rejected submission (client's fault, safe to re-submit
//! corrected fields) versus an unavailable store (not the client's
//! fault, nothing was persisted). In particular a report request against
//! an unreachable store fails with `Storage`, never a misleading empty
//! summary.

use thiserror::Error;

use zaiqa_core::ValidationErrors;
use zaiqa_db::StorageError;

/// Errors returned by the order and report services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The submission was rejected; every failed field is listed.
    /// Nothing was persisted.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The persistence medium failed or is unavailable.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// True for rejected submissions (as opposed to storage faults).
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use zaiqa_core::ValidationError;

    #[test]
    fn test_validation_message_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::required("name"));
        errors.push(ValidationError::required("address"));

        let err: ServiceError = errors.into();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "validation failed: name is required; address is required"
        );
    }

    #[test]
    fn test_storage_conversion() {
        let err: ServiceError = StorageError::PoolExhausted.into();
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "storage error: connection pool exhausted");
    }
}
