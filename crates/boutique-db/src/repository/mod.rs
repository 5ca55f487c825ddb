//! # Repository Module
//!
//! Database repository implementations for the boutique back office.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Service operation                                                     │
//! │       │                                                                 │
//! │       │  db.sales().get_by_id(id)                                      │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  SaleRepository                                                        │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── get_lines(&self, sale_id)                                         │
//! │  └── list_by_state(&self, state, branch)                               │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Kinds of Functions
//!
//! Each module exposes:
//! - A repository struct over the pool for reads and standalone writes
//! - Free functions taking `&mut SqliteConnection` for writes that must
//!   share one transaction with other steps (sale creation, cancellation,
//!   payment cascades)
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product catalog CRUD
//! - [`branch::BranchRepository`] - Branches with soft delete
//! - [`customer::CustomerRepository`] - Customers
//! - [`plan::CreditPlanRepository`] - Credit plan reference data
//! - [`inventory::InventoryRepository`] - Per-(branch, product) stock ledger
//! - [`sale::SaleRepository`] - Sales and sale lines
//! - [`credit::CreditRepository`] - Credits and installments
//! - [`payment::PaymentRepository`] - Payments

pub mod branch;
pub mod credit;
pub mod customer;
pub mod inventory;
pub mod payment;
pub mod plan;
pub mod product;
pub mod sale;
