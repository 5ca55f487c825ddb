//! # Error Types
//!
//! Domain-specific error types for boutique-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  boutique-core errors (this file)                                      │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  boutique-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  boutique-service errors                                               │
//! │  └── ServiceError     - Stable taxonomy surfaced to the HTTP layer     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ServiceError → HTTP collaborator  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (branch, product, quantities)
//! 3. Errors are enum variants, never String
//! 4. No error is silently swallowed; everything propagates to the caller

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Reservation exceeds available quantity.
    ///
    /// ## When This Occurs
    /// - A sale line requests more units than the (branch, product)
    ///   inventory record holds
    ///
    /// The ledger rejects the decrement with no mutation; the caller's
    /// transaction rolls back every earlier reservation of the same sale.
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

    /// Sale state machine violation.
    ///
    /// ## When This Occurs
    /// - Cancelling a COMPLETED or CANCELLED sale
    /// - Paying an installment that is already paid
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

    /// The financing frequency is not one of weekly/biweekly/monthly.
    #[error("Unsupported financing frequency: {frequency}")]
    UnsupportedFrequency { frequency: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Convenience constructor for state machine violations.
    pub fn invalid_transition(
        entity: &'static str,
        id: impl Into<String>,
        state: impl Into<String>,
        operation: &'static str,
    ) -> Self {
        CoreError::InvalidTransition {
            entity,
            id: id.into(),
            state: state.into(),
            operation,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a request doesn't meet structural requirements, before
/// business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
