//! # Credit Repository
//!
//! Database operations for credits and their installment schedules.
//!
//! ## Cascade Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │               Installment Payment Cascade (one transaction)             │
//! │                                                                         │
//! │  payment inserted                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  mark_installment_paid()   paid 0 → 1, stamps date + payment_id        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply_installment_payment()                                            │
//! │       remaining_cents -= installment, installments_paid += 1           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  last installment? → sale paying_credit → completed (sale repo)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use boutique_core::{Credit, Installment, InstallmentDraft};

const CREDIT_COLUMNS: &str = r#"
    id, sale_id, plan_id, total_financed_cents, installment_cents,
    total_installments, installments_paid, start_date, remaining_cents
"#;

const INSTALLMENT_COLUMNS: &str = r#"
    id, credit_id, number, amount_cents, due_date, paid, paid_date, payment_id
"#;

/// Where a credit stands after a payment was applied to it.
///
/// Read back on the transaction connection in the same statement as the
/// update, so the values reflect every payment committed so far plus this
/// one. A concurrent payment may have landed since any earlier pool read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct CreditProgress {
    pub installments_paid: i64,
    pub total_installments: i64,
    pub remaining_cents: i64,
}

impl CreditProgress {
    /// True when every installment of the credit has been paid.
    pub fn is_settled(&self) -> bool {
        self.installments_paid >= self.total_installments
    }
}

// =============================================================================
// Transaction-Scoped Write Operations
// =============================================================================

/// Inserts a credit record.
pub async fn insert_credit(conn: &mut SqliteConnection, credit: &Credit) -> DbResult<()> {
    debug!(id = %credit.id, sale_id = %credit.sale_id, "Inserting credit");

    sqlx::query(
        r#"
        INSERT INTO credits (
            id, sale_id, plan_id, total_financed_cents, installment_cents,
            total_installments, installments_paid, start_date, remaining_cents
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#,
    )
    .bind(&credit.id)
    .bind(&credit.sale_id)
    .bind(&credit.plan_id)
    .bind(credit.total_financed_cents)
    .bind(credit.installment_cents)
    .bind(credit.total_installments)
    .bind(credit.installments_paid)
    .bind(credit.start_date)
    .bind(credit.remaining_cents)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Inserts the full installment schedule of a credit in one batch.
pub async fn insert_schedule(
    conn: &mut SqliteConnection,
    credit_id: &str,
    drafts: &[InstallmentDraft],
) -> DbResult<()> {
    debug!(credit_id = %credit_id, count = drafts.len(), "Inserting installment schedule");

    for draft in drafts {
        sqlx::query(
            r#"
            INSERT INTO installments (
                id, credit_id, number, amount_cents, due_date, paid, paid_date, payment_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, 0, NULL, NULL)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(credit_id)
        .bind(draft.number)
        .bind(draft.amount.cents())
        .bind(draft.due_date)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

/// Marks an installment paid, stamping the paid date and settling payment.
///
/// Guarded on `paid = 0`: an already-paid installment matches no row.
///
/// ## Returns
/// * `Err(DbError::NotFound)` - missing installment, or it was already paid
pub async fn mark_installment_paid(
    conn: &mut SqliteConnection,
    installment_id: &str,
    payment_id: &str,
    paid_date: NaiveDate,
) -> DbResult<()> {
    debug!(installment_id = %installment_id, payment_id = %payment_id, "Marking installment paid");

    let result = sqlx::query(
        r#"
        UPDATE installments
        SET paid = 1, paid_date = ?2, payment_id = ?3
        WHERE id = ?1 AND paid = 0
        "#,
    )
    .bind(installment_id)
    .bind(paid_date)
    .bind(payment_id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::not_found("Installment (unpaid)", installment_id));
    }

    Ok(())
}

/// Applies one installment payment to the owning credit's running totals
/// and returns where the credit stands afterwards.
///
/// The caller decides the settlement cascade from the returned
/// [`CreditProgress`], never from counters read before the transaction.
pub async fn apply_installment_payment(
    conn: &mut SqliteConnection,
    credit_id: &str,
    amount_cents: i64,
) -> DbResult<CreditProgress> {
    debug!(credit_id = %credit_id, amount_cents = %amount_cents, "Applying payment to credit");

    let progress = sqlx::query_as::<_, CreditProgress>(
        r#"
        UPDATE credits
        SET remaining_cents = remaining_cents - ?2,
            installments_paid = installments_paid + 1
        WHERE id = ?1
        RETURNING installments_paid, total_installments, remaining_cents
        "#,
    )
    .bind(credit_id)
    .bind(amount_cents)
    .fetch_optional(&mut *conn)
    .await?;

    progress.ok_or_else(|| DbError::not_found("Credit", credit_id))
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for credit and installment reads.
#[derive(Debug, Clone)]
pub struct CreditRepository {
    pool: SqlitePool,
}

impl CreditRepository {
    /// Creates a new CreditRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CreditRepository { pool }
    }

    /// Gets a credit by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Credit>> {
        let credit = sqlx::query_as::<_, Credit>(&format!(
            "SELECT {CREDIT_COLUMNS} FROM credits WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credit)
    }

    /// Gets the credit attached to a sale, if any.
    ///
    /// The sale carries no credit pointer; this lookup is the only way back.
    pub async fn get_by_sale(&self, sale_id: &str) -> DbResult<Option<Credit>> {
        let credit = sqlx::query_as::<_, Credit>(&format!(
            "SELECT {CREDIT_COLUMNS} FROM credits WHERE sale_id = ?1"
        ))
        .bind(sale_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credit)
    }

    /// Gets an installment by ID.
    pub async fn get_installment(&self, id: &str) -> DbResult<Option<Installment>> {
        let installment = sqlx::query_as::<_, Installment>(&format!(
            "SELECT {INSTALLMENT_COLUMNS} FROM installments WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(installment)
    }

    /// Gets the installment a payment settled, if the payment targeted one.
    pub async fn get_installment_by_payment(
        &self,
        payment_id: &str,
    ) -> DbResult<Option<Installment>> {
        let installment = sqlx::query_as::<_, Installment>(&format!(
            "SELECT {INSTALLMENT_COLUMNS} FROM installments WHERE payment_id = ?1"
        ))
        .bind(payment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(installment)
    }

    /// Lists a credit's installments ordered by sequence number.
    pub async fn list_installments(&self, credit_id: &str) -> DbResult<Vec<Installment>> {
        let installments = sqlx::query_as::<_, Installment>(&format!(
            "SELECT {INSTALLMENT_COLUMNS} FROM installments WHERE credit_id = ?1 ORDER BY number"
        ))
        .bind(credit_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(installments)
    }
}

/// Generates a new credit ID.
pub fn generate_credit_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use crate::repository::{payment, sale};
    use boutique_core::{
        generate_schedule, Frequency, Money, Payment, PaymentMethod, PaymentStatus, PaymentTarget,
        PaymentType, Person, Sale, SaleState, SaleType,
    };
    use chrono::Utc;

    fn sample_payment(id: &str, amount_cents: i64) -> Payment {
        Payment {
            id: id.to_string(),
            created_at: Utc::now(),
            method: PaymentMethod::Cash,
            amount_cents,
            target: PaymentTarget::Installment,
            status: PaymentStatus::Completed,
        }
    }

    async fn setup_credit(db: &Database) -> Credit {
        db.customers()
            .insert(&boutique_core::Customer {
                id: "c1".to_string(),
                person: Person {
                    first_name: "Ana".to_string(),
                    last_name: "Quispe".to_string(),
                    phone: None,
                    email: None,
                },
            })
            .await
            .unwrap();

        db.plans()
            .insert(&boutique_core::CreditPlan {
                id: "plan1".to_string(),
                name: "3 meses".to_string(),
                description: "Tres cuotas mensuales".to_string(),
                term_periods: 3,
                frequency: Frequency::Monthly,
                annual_rate_bps: 1000,
                active: true,
            })
            .await
            .unwrap();

        let credit = Credit {
            id: generate_credit_id(),
            sale_id: "s1".to_string(),
            plan_id: "plan1".to_string(),
            total_financed_cents: 30_747,
            installment_cents: 10_249,
            total_installments: 3,
            installments_paid: 0,
            start_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            remaining_cents: 30_747,
        };

        let drafts = generate_schedule(
            credit.start_date,
            Frequency::Monthly,
            3,
            Money::from_cents(10_249),
        )
        .unwrap();

        let mut tx = db.begin().await.unwrap();
        sale::insert_sale(
            &mut tx,
            &Sale {
                id: "s1".to_string(),
                date: Utc::now(),
                total_cents: 30_000,
                sale_type: SaleType::Layaway,
                payment_type: PaymentType::Credit,
                state: SaleState::PayingCredit,
                notes: None,
                customer_id: "c1".to_string(),
                branch_id: None,
                payment_id: None,
            },
        )
        .await
        .unwrap();
        insert_credit(&mut tx, &credit).await.unwrap();
        insert_schedule(&mut tx, &credit.id, &drafts).await.unwrap();
        tx.commit().await.unwrap();

        credit
    }

    #[tokio::test]
    async fn test_schedule_rows_ordered_by_number() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let credit = setup_credit(&db).await;

        let installments = db.credits().list_installments(&credit.id).await.unwrap();
        assert_eq!(installments.len(), 3);
        for (i, inst) in installments.iter().enumerate() {
            assert_eq!(inst.number, i as i64 + 1);
            assert_eq!(inst.amount_cents, 10_249);
            assert!(!inst.paid);
        }
        assert_eq!(
            installments[1].due_date,
            NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
        );
    }

    #[tokio::test]
    async fn test_credit_lookup_by_sale() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let credit = setup_credit(&db).await;

        let loaded = db.credits().get_by_sale("s1").await.unwrap().unwrap();
        assert_eq!(loaded.id, credit.id);
        assert!(db.credits().get_by_sale("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mark_paid_rejects_second_payment() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let credit = setup_credit(&db).await;

        let first = db.credits().list_installments(&credit.id).await.unwrap()[0].clone();
        let today = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();

        let mut tx = db.begin().await.unwrap();
        payment::insert_payment(&mut tx, &sample_payment("pay1", first.amount_cents))
            .await
            .unwrap();
        mark_installment_paid(&mut tx, &first.id, "pay1", today)
            .await
            .unwrap();
        let progress = apply_installment_payment(&mut tx, &credit.id, first.amount_cents)
            .await
            .unwrap();
        tx.commit().await.unwrap();

        // Counters come back from the update itself
        assert_eq!(progress.installments_paid, 1);
        assert_eq!(progress.total_installments, 3);
        assert_eq!(progress.remaining_cents, 30_747 - 10_249);
        assert!(!progress.is_settled());

        let reloaded = db.credits().get_by_id(&credit.id).await.unwrap().unwrap();
        assert_eq!(reloaded.installments_paid, 1);
        assert_eq!(reloaded.remaining_cents, 30_747 - 10_249);

        // Second attempt on the same installment matches no unpaid row
        let mut tx = db.begin().await.unwrap();
        payment::insert_payment(&mut tx, &sample_payment("pay2", first.amount_cents))
            .await
            .unwrap();
        let err = mark_installment_paid(&mut tx, &first.id, "pay2", today)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
