//! # Payment Repository
//!
//! Database operations for payments.
//!
//! Payments are write-once: inserted inside the settling transaction, then
//! linked from the sale or installment they settle. No update path exists.

use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use boutique_core::Payment;

const PAYMENT_COLUMNS: &str = "id, created_at, method, amount_cents, target, status";

// =============================================================================
// Transaction-Scoped Write Operations
// =============================================================================

/// Inserts a payment record.
pub async fn insert_payment(conn: &mut SqliteConnection, payment: &Payment) -> DbResult<()> {
    debug!(id = %payment.id, amount_cents = %payment.amount_cents, "Inserting payment");

    sqlx::query(
        r#"
        INSERT INTO payments (id, created_at, method, amount_cents, target, status)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(&payment.id)
    .bind(payment.created_at)
    .bind(payment.method)
    .bind(payment.amount_cents)
    .bind(payment.target)
    .bind(payment.status)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for payment reads.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    pool: SqlitePool,
}

impl PaymentRepository {
    /// Creates a new PaymentRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PaymentRepository { pool }
    }

    /// Gets a payment by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Payment>> {
        let payment = sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(payment)
    }
}

/// Generates a new payment ID.
pub fn generate_payment_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
