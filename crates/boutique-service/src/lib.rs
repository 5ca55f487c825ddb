//! # boutique-service: Transaction Core for the Boutique Back Office
//!
//! This crate orchestrates the multi-entity operations of the boutique back
//! office: sale creation and cancellation, payment reconciliation, and
//! credit lookups. Every operation that touches more than one table owns a
//! single transaction from begin to commit.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Boutique Back Office Architecture                    │
//! │                                                                         │
//! │  HTTP layer (external collaborator)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ boutique-service (THIS CRATE) ★                 │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────┐   ┌──────────────┐   ┌─────────────┐        │   │
//! │  │   │ SaleService │   │PaymentService│   │CreditService│        │   │
//! │  │   │ create /    │   │ pay_sale /   │   │ schedule    │        │   │
//! │  │   │ cancel      │   │ pay_install. │   │ lookups     │        │   │
//! │  │   └──────┬──────┘   └──────┬───────┘   └──────┬──────┘        │   │
//! │  │          │                 │                  │                │   │
//! │  │          └────────┬────────┴──────────────────┘                │   │
//! │  └───────────────────┼─────────────────────────────────────────────┘   │
//! │                      ▼                                                  │
//! │  boutique-core (pure math)      boutique-db (SQLite)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`sale`] - Sale orchestrator (all-or-nothing creation, cancellation)
//! - [`payment`] - Payment reconciliation cascades
//! - [`credit`] - Credit and schedule lookups
//! - [`error`] - Stable error taxonomy for callers

// =============================================================================
// Module Declarations
// =============================================================================

pub mod credit;
pub mod error;
pub mod payment;
pub mod sale;

#[cfg(test)]
pub(crate) mod testutil;

// =============================================================================
// Re-exports
// =============================================================================

pub use credit::{CreditDetail, CreditService};
pub use error::{ServiceError, ServiceResult};
pub use payment::{PaymentDetail, PaymentService};
pub use sale::{CreateSaleRequest, LineRequest, SaleDetail, SaleService};
