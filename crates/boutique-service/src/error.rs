//! # Service Error Types
//!
//! The stable error taxonomy surfaced to callers (the HTTP layer lives
//! outside this workspace but maps these kinds 1:1 to responses).
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (business rules)     DbError (persistence)                  │
//! │       │                              │                                  │
//! │       └──────────────┬───────────────┘                                  │
//! │                      ▼                                                  │
//! │             ServiceError (this module)                                  │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │             kind() → stable string for API mapping                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The set of kinds is part of the crate's contract: callers distinguish
//! outcomes by kind, never by message text.

use thiserror::Error;

use boutique_core::{CoreError, ValidationError};
use boutique_db::DbError;

/// Errors surfaced by the service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Requested quantity exceeds available stock. Nothing was written.
    #[error(
        "Insufficient stock for product {product_id} at branch {branch_id}: \
         available {available}, requested {requested}"
    )]
    InsufficientStock {
        branch_id: String,
        product_id: String,
        available: i64,
        requested: i64,
    },

    /// The entity's current state does not admit the operation.
    #[error("{entity} {id} is {state}, cannot {operation}")]
    InvalidTransition {
        entity: &'static str,
        id: String,
        state: String,
        operation: &'static str,
    },

    /// A sale request arrived with zero line items.
    #[error("Sale must contain at least one line item")]
    EmptyLineItems,

    /// The referenced plan's financing frequency is not supported.
    #[error("Unsupported financing frequency: {frequency}")]
    UnsupportedFrequency { frequency: String },

    /// Structural input validation failed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Persistence failure not expressible as one of the kinds above.
    #[error("Database error: {0}")]
    Database(DbError),
}

impl ServiceError {
    /// Stable machine-readable kind for API mapping.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::NotFound { .. } => "not_found",
            ServiceError::InsufficientStock { .. } => "insufficient_stock",
            ServiceError::InvalidTransition { .. } => "invalid_transition",
            ServiceError::EmptyLineItems => "empty_line_items",
            ServiceError::UnsupportedFrequency { .. } => "unsupported_frequency",
            ServiceError::Validation(_) => "validation",
            ServiceError::Database(_) => "database",
        }
    }

    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        ServiceError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InsufficientStock {
                branch_id,
                product_id,
                available,
                requested,
            } => ServiceError::InsufficientStock {
                branch_id,
                product_id,
                available,
                requested,
            },
            CoreError::InvalidTransition {
                entity,
                id,
                state,
                operation,
            } => ServiceError::InvalidTransition {
                entity,
                id,
                state,
                operation,
            },
            CoreError::EmptyLineItems => ServiceError::EmptyLineItems,
            CoreError::UnsupportedFrequency { frequency } => {
                ServiceError::UnsupportedFrequency { frequency }
            }
            CoreError::Validation(v) => ServiceError::Validation(v),
        }
    }
}

impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ServiceError::NotFound { entity, id },
            other => ServiceError::Database(other),
        }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_stable() {
        assert_eq!(ServiceError::EmptyLineItems.kind(), "empty_line_items");
        assert_eq!(
            ServiceError::not_found("Sale", "s1").kind(),
            "not_found"
        );
        assert_eq!(
            ServiceError::UnsupportedFrequency {
                frequency: "daily".to_string()
            }
            .kind(),
            "unsupported_frequency"
        );
    }

    #[test]
    fn test_db_not_found_maps_to_not_found() {
        let err: ServiceError = DbError::not_found("Credit", "c1").into();
        assert_eq!(err.kind(), "not_found");
    }

    #[test]
    fn test_core_errors_map_by_kind() {
        let err: ServiceError = CoreError::EmptyLineItems.into();
        assert_eq!(err.kind(), "empty_line_items");

        let err: ServiceError =
            CoreError::invalid_transition("Sale", "s1", "completed", "cancel").into();
        assert_eq!(err.kind(), "invalid_transition");
    }
}
