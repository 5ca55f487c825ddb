//! # boutique-db: Database Layer for the Boutique Back Office
//!
//! This crate provides database access for the boutique back office.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Boutique Back Office Data Flow                      │
//! │                                                                         │
//! │  boutique-service (sale orchestrator, payment reconciliation)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    boutique-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (inventory,   │    │  (embedded)  │  │   │
//! │  │   │               │    │  sale, credit,│    │              │  │   │
//! │  │   │ SqlitePool    │◄───│  payment, …)  │    │ 001_init.sql │  │   │
//! │  │   │ Transactions  │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (boutique.db)                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Transaction Discipline
//!
//! Reads go through repository structs holding the pool. Writes that must be
//! atomic across tables (sale creation, cancellation, payment cascades) are
//! free functions taking `&mut SqliteConnection`; the service layer owns
//! `begin()` / `commit()` and threads one transaction through every step.
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations

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

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::branch::BranchRepository;
pub use repository::credit::{CreditProgress, CreditRepository};
pub use repository::customer::CustomerRepository;
pub use repository::inventory::{InventoryRepository, ReserveOutcome};
pub use repository::payment::PaymentRepository;
pub use repository::plan::{CreditPlanRepository, CreditPlanRow};
pub use repository::product::ProductRepository;
pub use repository::sale::SaleRepository;
