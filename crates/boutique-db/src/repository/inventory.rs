//! # Inventory Repository
//!
//! The per-(branch, product) stock ledger.
//!
//! ## Reservation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Guarded Decrement                                    │
//! │                                                                         │
//! │  ❌ WRONG: read-then-write (races between concurrent sales)           │
//! │     SELECT quantity ...; if enough { UPDATE ... SET quantity = n }     │
//! │                                                                         │
//! │  ✅ CORRECT: single guarded UPDATE                                     │
//! │     UPDATE inventory SET quantity = quantity - ?                      │
//! │     WHERE branch_id = ? AND product_id = ? AND quantity >= ?          │
//! │                                                                         │
//! │  rows_affected == 0 means the guard failed: either the record is      │
//! │  missing or the stock is short. A follow-up SELECT inside the same    │
//! │  transaction tells the two apart.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reserve and release are free functions over `&mut SqliteConnection` so the
//! sale orchestrator can run every line's reservation inside one transaction;
//! any failure rolls back the reservations already made for that sale.

use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use boutique_core::InventoryRecord;

/// Outcome of a reservation attempt against an existing inventory record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveOutcome {
    /// Stock was decremented; carries the post-decrement quantity.
    Reserved { remaining: i64 },
    /// The record exists but holds fewer units than requested. Nothing was
    /// mutated.
    Insufficient { available: i64 },
}

// =============================================================================
// Transaction-Scoped Ledger Operations
// =============================================================================

/// Atomically reserves `quantity` units of a product at a branch.
///
/// ## Returns
/// * `Ok(ReserveOutcome::Reserved)` - decremented, with remaining quantity
/// * `Ok(ReserveOutcome::Insufficient)` - short stock, nothing mutated
/// * `Err(DbError::NotFound)` - no inventory record for the pair
pub async fn reserve(
    conn: &mut SqliteConnection,
    branch_id: &str,
    product_id: &str,
    quantity: i64,
) -> DbResult<ReserveOutcome> {
    debug!(branch_id = %branch_id, product_id = %product_id, quantity = %quantity, "Reserving stock");

    let result = sqlx::query(
        r#"
        UPDATE inventory
        SET quantity = quantity - ?3
        WHERE branch_id = ?1 AND product_id = ?2 AND quantity >= ?3
        "#,
    )
    .bind(branch_id)
    .bind(product_id)
    .bind(quantity)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        // Guard failed: missing record or short stock
        let available: Option<i64> = sqlx::query_scalar(
            "SELECT quantity FROM inventory WHERE branch_id = ?1 AND product_id = ?2",
        )
        .bind(branch_id)
        .bind(product_id)
        .fetch_optional(&mut *conn)
        .await?;

        return match available {
            None => Err(DbError::not_found(
                "Inventory",
                format!("{branch_id}/{product_id}"),
            )),
            Some(available) => Ok(ReserveOutcome::Insufficient { available }),
        };
    }

    let remaining: i64 = sqlx::query_scalar(
        "SELECT quantity FROM inventory WHERE branch_id = ?1 AND product_id = ?2",
    )
    .bind(branch_id)
    .bind(product_id)
    .fetch_one(&mut *conn)
    .await?;

    Ok(ReserveOutcome::Reserved { remaining })
}

/// Returns `quantity` units to a branch's stock (sale cancellation).
///
/// Unconditional increment; the record must exist.
pub async fn release(
    conn: &mut SqliteConnection,
    branch_id: &str,
    product_id: &str,
    quantity: i64,
) -> DbResult<i64> {
    debug!(branch_id = %branch_id, product_id = %product_id, quantity = %quantity, "Releasing stock");

    let result = sqlx::query(
        r#"
        UPDATE inventory
        SET quantity = quantity + ?3
        WHERE branch_id = ?1 AND product_id = ?2
        "#,
    )
    .bind(branch_id)
    .bind(product_id)
    .bind(quantity)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::not_found(
            "Inventory",
            format!("{branch_id}/{product_id}"),
        ));
    }

    let quantity: i64 = sqlx::query_scalar(
        "SELECT quantity FROM inventory WHERE branch_id = ?1 AND product_id = ?2",
    )
    .bind(branch_id)
    .bind(product_id)
    .fetch_one(&mut *conn)
    .await?;

    Ok(quantity)
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for inventory reads and standalone stock management.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: SqlitePool,
}

impl InventoryRepository {
    /// Creates a new InventoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InventoryRepository { pool }
    }

    /// Gets the inventory record for a (branch, product) pair.
    pub async fn get(&self, branch_id: &str, product_id: &str) -> DbResult<Option<InventoryRecord>> {
        let record = sqlx::query_as::<_, InventoryRecord>(
            r#"
            SELECT id, branch_id, product_id, quantity
            FROM inventory
            WHERE branch_id = ?1 AND product_id = ?2
            "#,
        )
        .bind(branch_id)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Lists all inventory records at a branch, ordered by product.
    pub async fn list_by_branch(&self, branch_id: &str) -> DbResult<Vec<InventoryRecord>> {
        let records = sqlx::query_as::<_, InventoryRecord>(
            r#"
            SELECT id, branch_id, product_id, quantity
            FROM inventory
            WHERE branch_id = ?1
            ORDER BY product_id
            "#,
        )
        .bind(branch_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Lists a product's inventory records across all branches.
    pub async fn list_by_product(&self, product_id: &str) -> DbResult<Vec<InventoryRecord>> {
        let records = sqlx::query_as::<_, InventoryRecord>(
            r#"
            SELECT id, branch_id, product_id, quantity
            FROM inventory
            WHERE product_id = ?1
            ORDER BY branch_id
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Creates the inventory record for a (branch, product) pair.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - the pair already has a record
    pub async fn create(
        &self,
        branch_id: &str,
        product_id: &str,
        quantity: i64,
    ) -> DbResult<InventoryRecord> {
        let record = InventoryRecord {
            id: Uuid::new_v4().to_string(),
            branch_id: branch_id.to_string(),
            product_id: product_id.to_string(),
            quantity,
        };

        debug!(branch_id = %branch_id, product_id = %product_id, "Creating inventory record");

        sqlx::query(
            r#"
            INSERT INTO inventory (id, branch_id, product_id, quantity)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&record.id)
        .bind(&record.branch_id)
        .bind(&record.product_id)
        .bind(record.quantity)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    /// Receives stock: increments the counter outside any sale flow.
    pub async fn receive(&self, branch_id: &str, product_id: &str, quantity: i64) -> DbResult<i64> {
        let mut conn = self.pool.acquire().await?;
        release(&mut conn, branch_id, product_id, quantity).await
    }

    /// Removes the inventory record for a (branch, product) pair.
    ///
    /// The product stops being stocked at the branch; historical sale lines
    /// are untouched.
    pub async fn delete(&self, branch_id: &str, product_id: &str) -> DbResult<()> {
        debug!(branch_id = %branch_id, product_id = %product_id, "Deleting inventory record");

        let result =
            sqlx::query("DELETE FROM inventory WHERE branch_id = ?1 AND product_id = ?2")
                .bind(branch_id)
                .bind(product_id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(
                "Inventory",
                format!("{branch_id}/{product_id}"),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
