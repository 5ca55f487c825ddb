//! # boutique-core: Pure Business Logic for the Boutique Back Office
//!
//! This crate is the **heart** of the boutique back office. It contains the
//! sales/inventory/credit domain logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Boutique Back Office Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              HTTP Layer (external collaborator)                 │   │
//! │  │     routing, DTO shaping, auth — not part of this workspace     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                     boutique-service                            │   │
//! │  │    sale orchestrator, payment reconciliation, credit queries    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ boutique-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ financing │  │ schedule  │  │   │
//! │  │   │ Sale      │  │   Money   │  │ simple    │  │ due-date  │  │   │
//! │  │   │ Credit    │  │AnnualRate │  │ interest  │  │ cadence   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  boutique-db (Database Layer)                   │   │
//! │  │           SQLite queries, migrations, repositories              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, Credit, Installment, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`financing`] - Credit calculator (simple-interest financing math)
//! - [`schedule`] - Installment schedule generation
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use boutique_core::money::Money;
//! use boutique_core::types::{AnnualRate, Frequency};
//! use boutique_core::financing::compute_financing;
//!
//! // $1000.00 financed at 12% annual over 6 monthly installments
//! let total = Money::from_cents(100_000);
//! let rate = AnnualRate::from_bps(1200); // 12.00%
//!
//! let financing = compute_financing(total, rate, Frequency::Monthly, 6).unwrap();
//! assert_eq!(financing.total_financed.cents(), 106_000); // $1060.00
//! assert_eq!(financing.installment.cents(), 17_667);     // $176.67
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod financing;
pub mod money;
pub mod schedule;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use boutique_core::Money` instead of
// `use boutique_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use financing::{compute_financing, Financing};
pub use money::Money;
pub use schedule::{generate_schedule, InstallmentDraft};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed in a single sale
///
/// ## Business Reason
/// Prevents runaway requests and keeps transaction sizes reasonable for a
/// boutique counter sale.
pub const MAX_SALE_LINES: usize = 100;

/// Maximum quantity of a single product in one sale line
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Maximum financing term, in periods
///
/// Credit plans in the wild top out at 24 biweekly periods; anything larger
/// is a data-entry error.
pub const MAX_TERM_PERIODS: i64 = 120;
