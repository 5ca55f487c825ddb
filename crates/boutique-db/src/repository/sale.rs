//! # Sale Repository
//!
//! Database operations for sales and sale lines.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale Lifecycle                                    │
//! │                                                                         │
//! │  1. CREATE (one transaction, owned by the orchestrator)                │
//! │     ├── insert_sale() → Sale { state: Pending | PayingCredit }         │
//! │     ├── insert_line() per line (with its stock reservation)            │
//! │     └── credit + installments when financed                            │
//! │                                                                         │
//! │  2. SETTLE                                                             │
//! │     └── set_sale_payment() → Completed (cash)                          │
//! │     └── installment cascade → Completed (credit, via credit repo)      │
//! │                                                                         │
//! │  3. (OPTIONAL) CANCEL                                                  │
//! │     └── update_state() → Cancelled, after every line is restocked      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! State changes are guarded UPDATEs on the expected prior state, so a
//! concurrent transition loses cleanly instead of double-applying.

use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use boutique_core::{Sale, SaleLine, SaleState};

const SALE_COLUMNS: &str = r#"
    id, date, total_cents, sale_type, payment_type, state,
    notes, customer_id, branch_id, payment_id
"#;

// =============================================================================
// Transaction-Scoped Write Operations
// =============================================================================

/// Inserts a sale header.
pub async fn insert_sale(conn: &mut SqliteConnection, sale: &Sale) -> DbResult<()> {
    debug!(id = %sale.id, total_cents = %sale.total_cents, "Inserting sale");

    sqlx::query(
        r#"
        INSERT INTO sales (
            id, date, total_cents, sale_type, payment_type, state,
            notes, customer_id, branch_id, payment_id
        ) VALUES (
            ?1, ?2, ?3, ?4, ?5, ?6,
            ?7, ?8, ?9, ?10
        )
        "#,
    )
    .bind(&sale.id)
    .bind(sale.date)
    .bind(sale.total_cents)
    .bind(sale.sale_type)
    .bind(sale.payment_type)
    .bind(sale.state)
    .bind(&sale.notes)
    .bind(&sale.customer_id)
    .bind(&sale.branch_id)
    .bind(&sale.payment_id)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Inserts one sale line.
pub async fn insert_line(conn: &mut SqliteConnection, line: &SaleLine) -> DbResult<()> {
    debug!(sale_id = %line.sale_id, product_id = %line.product_id, "Inserting sale line");

    sqlx::query(
        r#"
        INSERT INTO sale_lines (
            id, sale_id, product_id, quantity, unit_price_cents, subtotal_cents
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(&line.id)
    .bind(&line.sale_id)
    .bind(&line.product_id)
    .bind(line.quantity)
    .bind(line.unit_price_cents)
    .bind(line.subtotal_cents)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Transitions a sale from an expected prior state.
///
/// ## Returns
/// * `Err(DbError::NotFound)` - missing sale, or it left `from` concurrently
pub async fn update_state(
    conn: &mut SqliteConnection,
    sale_id: &str,
    from: SaleState,
    to: SaleState,
) -> DbResult<()> {
    debug!(sale_id = %sale_id, from = %from.as_str(), to = %to.as_str(), "Transitioning sale");

    let result = sqlx::query("UPDATE sales SET state = ?3 WHERE id = ?1 AND state = ?2")
        .bind(sale_id)
        .bind(from)
        .bind(to)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::not_found("Sale", sale_id));
    }

    Ok(())
}

/// Links the settling payment to a sale and completes it, guarded on the
/// expected prior state.
pub async fn set_sale_payment(
    conn: &mut SqliteConnection,
    sale_id: &str,
    payment_id: &str,
    from: SaleState,
) -> DbResult<()> {
    debug!(sale_id = %sale_id, payment_id = %payment_id, "Settling sale");

    let result = sqlx::query(
        "UPDATE sales SET payment_id = ?2, state = ?4 WHERE id = ?1 AND state = ?3",
    )
    .bind(sale_id)
    .bind(payment_id)
    .bind(from)
    .bind(SaleState::Completed)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::not_found("Sale", sale_id));
    }

    Ok(())
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for sale reads.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Gets a sale by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>(&format!(
            "SELECT {SALE_COLUMNS} FROM sales WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    /// Gets all lines of a sale, in insertion order.
    pub async fn get_lines(&self, sale_id: &str) -> DbResult<Vec<SaleLine>> {
        let lines = sqlx::query_as::<_, SaleLine>(
            r#"
            SELECT id, sale_id, product_id, quantity, unit_price_cents, subtotal_cents
            FROM sale_lines
            WHERE sale_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(sale_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lines)
    }

    /// Gets the sale a payment settled, if the payment targeted one.
    pub async fn get_by_payment(&self, payment_id: &str) -> DbResult<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>(&format!(
            "SELECT {SALE_COLUMNS} FROM sales WHERE payment_id = ?1"
        ))
        .bind(payment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    /// Lists sales in a given state, newest first, optionally scoped to one
    /// branch.
    pub async fn list_by_state(
        &self,
        state: SaleState,
        branch_id: Option<&str>,
    ) -> DbResult<Vec<Sale>> {
        let sales = match branch_id {
            Some(branch_id) => {
                sqlx::query_as::<_, Sale>(&format!(
                    "SELECT {SALE_COLUMNS} FROM sales \
                     WHERE state = ?1 AND branch_id = ?2 ORDER BY date DESC"
                ))
                .bind(state)
                .bind(branch_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Sale>(&format!(
                    "SELECT {SALE_COLUMNS} FROM sales WHERE state = ?1 ORDER BY date DESC"
                ))
                .bind(state)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(sales)
    }

    /// Lists a customer's sales, newest first.
    pub async fn list_by_customer(&self, customer_id: &str) -> DbResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(&format!(
            "SELECT {SALE_COLUMNS} FROM sales WHERE customer_id = ?1 ORDER BY date DESC"
        ))
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }
}

/// Generates a new sale ID.
pub fn generate_sale_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generates a new sale line ID.
pub fn generate_sale_line_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
