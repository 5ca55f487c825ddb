//! # Payment Reconciliation
//!
//! Records payments and cascades their effects.
//!
//! ## Cascade Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Payment Reconciliation                                │
//! │                                                                         │
//! │  pay_sale(sale)                    pay_installment(installment)         │
//! │       │                                 │                               │
//! │       ▼                                 ▼                               │
//! │  sale must be PENDING              installment must be unpaid           │
//! │       │                                 │                               │
//! │       ▼                                 ▼                               │
//! │  insert payment (sale target)      insert payment (installment target)  │
//! │  link + PENDING → COMPLETED        mark paid, stamp date + payment      │
//! │                                         │                               │
//! │                                         ▼                               │
//! │                                    credit: remaining -= amount,         │
//! │                                            installments_paid += 1       │
//! │                                         │                               │
//! │                                         ▼                               │
//! │                                    last one? sale PAYING_CREDIT         │
//! │                                             → COMPLETED                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each operation is one transaction: the payment row and every cascaded
//! update land together or not at all.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use boutique_core::{
    CoreError, Installment, Payment, PaymentMethod, PaymentStatus, PaymentTarget, Sale, SaleState,
};
use boutique_db::repository::{credit, payment, sale};
use boutique_db::Database;

use crate::error::{ServiceError, ServiceResult};

/// A payment together with the record it settled.
///
/// Exactly one of `sale` / `installment` is populated, matching the
/// payment's target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDetail {
    pub payment: Payment,
    pub sale: Option<Sale>,
    pub installment: Option<Installment>,
}

/// Records payments against sales and installments.
#[derive(Debug, Clone)]
pub struct PaymentService {
    db: Database,
}

impl PaymentService {
    /// Creates a new PaymentService over a database handle.
    pub fn new(db: Database) -> Self {
        PaymentService { db }
    }

    /// Records the single payment that settles a pending cash sale.
    ///
    /// The payment amount is the sale total; partial payments of a sale do
    /// not exist. Credit sales are settled installment by installment, so a
    /// PAYING_CREDIT sale rejects this operation.
    ///
    /// ## Errors
    /// * `NotFound` - unknown sale
    /// * `InvalidTransition` - sale is not PENDING
    pub async fn pay_sale(&self, sale_id: &str, method: PaymentMethod) -> ServiceResult<Payment> {
        let existing = self
            .db
            .sales()
            .get_by_id(sale_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Sale", sale_id))?;

        if existing.state != SaleState::Pending {
            return Err(CoreError::invalid_transition(
                "Sale",
                sale_id,
                existing.state.as_str(),
                "record payment",
            )
            .into());
        }

        let new_payment = Payment {
            id: payment::generate_payment_id(),
            created_at: Utc::now(),
            method,
            amount_cents: existing.total_cents,
            target: PaymentTarget::Sale,
            status: PaymentStatus::Completed,
        };

        debug!(sale_id = %sale_id, amount_cents = %new_payment.amount_cents, "Settling sale");

        let mut tx = self.db.begin().await?;
        payment::insert_payment(&mut tx, &new_payment).await?;
        sale::set_sale_payment(&mut tx, sale_id, &new_payment.id, SaleState::Pending).await?;
        tx.commit().await.map_err(boutique_db::DbError::from)?;

        info!(sale_id = %sale_id, payment_id = %new_payment.id, "Sale completed");

        Ok(new_payment)
    }

    /// Records a payment for one installment and cascades it: installment →
    /// credit running totals → sale completion when it was the last one.
    ///
    /// ## Errors
    /// * `NotFound` - unknown installment
    /// * `InvalidTransition` - the installment is already paid
    pub async fn pay_installment(
        &self,
        installment_id: &str,
        method: PaymentMethod,
    ) -> ServiceResult<Payment> {
        let installment = self
            .db
            .credits()
            .get_installment(installment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Installment", installment_id))?;

        if installment.paid {
            return Err(CoreError::invalid_transition(
                "Installment",
                installment_id,
                "paid",
                "record payment",
            )
            .into());
        }

        let owning_credit = self
            .db
            .credits()
            .get_by_id(&installment.credit_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Credit", &installment.credit_id))?;

        let new_payment = Payment {
            id: payment::generate_payment_id(),
            created_at: Utc::now(),
            method,
            amount_cents: installment.amount_cents,
            target: PaymentTarget::Installment,
            status: PaymentStatus::Completed,
        };

        debug!(
            installment_id = %installment_id,
            credit_id = %owning_credit.id,
            "Recording installment payment"
        );

        let mut tx = self.db.begin().await?;
        payment::insert_payment(&mut tx, &new_payment).await?;
        credit::mark_installment_paid(
            &mut tx,
            installment_id,
            &new_payment.id,
            new_payment.created_at.date_naive(),
        )
        .await?;

        // The settlement decision uses the counters this transaction just
        // wrote, not the pool read above: a concurrent payment of another
        // installment may have committed in between.
        let progress =
            credit::apply_installment_payment(&mut tx, &owning_credit.id, installment.amount_cents)
                .await?;

        if progress.is_settled() {
            sale::update_state(
                &mut tx,
                &owning_credit.sale_id,
                SaleState::PayingCredit,
                SaleState::Completed,
            )
            .await?;
        }

        tx.commit().await.map_err(boutique_db::DbError::from)?;

        info!(
            installment_id = %installment_id,
            payment_id = %new_payment.id,
            settles_credit = progress.is_settled(),
            "Installment paid"
        );

        Ok(new_payment)
    }

    /// Gets a payment by ID.
    pub async fn get_payment(&self, payment_id: &str) -> ServiceResult<Payment> {
        self.db
            .payments()
            .get_by_id(payment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Payment", payment_id))
    }

    /// Gets a payment with the sale or installment it settled.
    pub async fn get_payment_detail(&self, payment_id: &str) -> ServiceResult<PaymentDetail> {
        let payment = self.get_payment(payment_id).await?;

        let (sale, installment) = match payment.target {
            PaymentTarget::Sale => (self.db.sales().get_by_payment(payment_id).await?, None),
            PaymentTarget::Installment => (
                None,
                self.db.credits().get_installment_by_payment(payment_id).await?,
            ),
        };

        Ok(PaymentDetail {
            payment,
            sale,
            installment,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sale::{CreateSaleRequest, LineRequest, SaleService};
    use crate::testutil;
    use boutique_core::{PaymentType, SaleType};

    async fn create_cash_sale(db: &Database) -> String {
        SaleService::new(db.clone())
            .create_sale(CreateSaleRequest {
                customer_id: "c1".to_string(),
                branch_id: "b1".to_string(),
                sale_type: SaleType::Cash,
                payment_type: PaymentType::Cash,
                lines: vec![LineRequest {
                    product_id: "p1".to_string(),
                    quantity: 1,
                }],
                credit_plan_id: None,
                notes: None,
            })
            .await
            .unwrap()
            .sale
            .id
    }

    async fn create_credit_sale(db: &Database) -> String {
        // 10 × $30.00 on plan3: financed $307.47, 3 × $102.49
        SaleService::new(db.clone())
            .create_sale(CreateSaleRequest {
                customer_id: "c1".to_string(),
                branch_id: "b1".to_string(),
                sale_type: SaleType::Layaway,
                payment_type: PaymentType::Credit,
                lines: vec![LineRequest {
                    product_id: "p3".to_string(),
                    quantity: 10,
                }],
                credit_plan_id: Some("plan3".to_string()),
                notes: None,
            })
            .await
            .unwrap()
            .sale
            .id
    }

    #[tokio::test]
    async fn test_cash_sale_payment_completes_sale() {
        let db = testutil::test_db().await;
        let sale_id = create_cash_sale(&db).await;
        let service = PaymentService::new(db.clone());

        let paid = service
            .pay_sale(&sale_id, PaymentMethod::Cash)
            .await
            .unwrap();
        assert_eq!(paid.amount_cents, 2999);
        assert_eq!(paid.target, PaymentTarget::Sale);

        let reloaded = db.sales().get_by_id(&sale_id).await.unwrap().unwrap();
        assert_eq!(reloaded.state, SaleState::Completed);
        assert_eq!(reloaded.payment_id.as_deref(), Some(paid.id.as_str()));
    }

    #[tokio::test]
    async fn test_completed_sale_rejects_second_payment() {
        let db = testutil::test_db().await;
        let sale_id = create_cash_sale(&db).await;
        let service = PaymentService::new(db.clone());

        service
            .pay_sale(&sale_id, PaymentMethod::Cash)
            .await
            .unwrap();

        let err = service
            .pay_sale(&sale_id, PaymentMethod::Card)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_transition");
    }

    #[tokio::test]
    async fn test_credit_sale_rejects_direct_payment() {
        let db = testutil::test_db().await;
        let sale_id = create_credit_sale(&db).await;
        let service = PaymentService::new(db.clone());

        let err = service
            .pay_sale(&sale_id, PaymentMethod::Cash)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_transition");
    }

    #[tokio::test]
    async fn test_installment_cascade_through_full_schedule() {
        let db = testutil::test_db().await;
        let sale_id = create_credit_sale(&db).await;
        let service = PaymentService::new(db.clone());

        let owning_credit = db.credits().get_by_sale(&sale_id).await.unwrap().unwrap();
        let installments = db
            .credits()
            .list_installments(&owning_credit.id)
            .await
            .unwrap();
        assert_eq!(installments.len(), 3);

        // Pay installments 1 and 2: sale stays paying_credit
        for inst in &installments[..2] {
            service
                .pay_installment(&inst.id, PaymentMethod::Qr)
                .await
                .unwrap();
        }
        let mid = db.credits().get_by_id(&owning_credit.id).await.unwrap().unwrap();
        assert_eq!(mid.installments_paid, 2);
        assert_eq!(mid.remaining_cents, 30_747 - 2 * 10_249);
        assert!(!mid.is_settled());
        let sale_mid = db.sales().get_by_id(&sale_id).await.unwrap().unwrap();
        assert_eq!(sale_mid.state, SaleState::PayingCredit);

        // Final installment settles the credit and completes the sale
        let last = service
            .pay_installment(&installments[2].id, PaymentMethod::Cash)
            .await
            .unwrap();
        assert_eq!(last.amount_cents, 10_249);

        let settled = db.credits().get_by_id(&owning_credit.id).await.unwrap().unwrap();
        assert_eq!(settled.installments_paid, 3);
        assert!(settled.is_settled());
        // 3 × 102.49 splits 307.47 exactly
        assert_eq!(settled.remaining_cents, 0);

        let sale_done = db.sales().get_by_id(&sale_id).await.unwrap().unwrap();
        assert_eq!(sale_done.state, SaleState::Completed);

        let paid_inst = db
            .credits()
            .get_installment(&installments[2].id)
            .await
            .unwrap()
            .unwrap();
        assert!(paid_inst.paid);
        assert_eq!(paid_inst.payment_id.as_deref(), Some(last.id.as_str()));
        assert!(paid_inst.paid_date.is_some());
    }

    #[tokio::test]
    async fn test_paid_installment_rejects_second_payment() {
        let db = testutil::test_db().await;
        let sale_id = create_credit_sale(&db).await;
        let service = PaymentService::new(db.clone());

        let owning_credit = db.credits().get_by_sale(&sale_id).await.unwrap().unwrap();
        let first = db
            .credits()
            .list_installments(&owning_credit.id)
            .await
            .unwrap()[0]
            .clone();

        service
            .pay_installment(&first.id, PaymentMethod::Cash)
            .await
            .unwrap();

        let err = service
            .pay_installment(&first.id, PaymentMethod::Cash)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_transition");

        // Totals were applied exactly once
        let reloaded = db.credits().get_by_id(&owning_credit.id).await.unwrap().unwrap();
        assert_eq!(reloaded.installments_paid, 1);
        assert_eq!(reloaded.remaining_cents, 30_747 - 10_249);
    }

    #[tokio::test]
    async fn test_concurrent_final_installments_complete_sale() {
        // Multi-connection pool: the two payments run in separate
        // transactions that genuinely race.
        let (db, path) = testutil::test_db_file().await;
        let sale_id = create_credit_sale(&db).await;
        let service = PaymentService::new(db.clone());

        let owning_credit = db.credits().get_by_sale(&sale_id).await.unwrap().unwrap();
        let installments = db
            .credits()
            .list_installments(&owning_credit.id)
            .await
            .unwrap();
        assert_eq!(installments.len(), 3);

        service
            .pay_installment(&installments[0].id, PaymentMethod::Cash)
            .await
            .unwrap();

        // The last two installments race. Whichever transaction lands
        // second must see the other's committed counter and complete the
        // sale; a decision made from pre-transaction reads leaves the sale
        // stranded in paying_credit.
        let (second, third) = tokio::join!(
            service.pay_installment(&installments[1].id, PaymentMethod::Cash),
            service.pay_installment(&installments[2].id, PaymentMethod::Qr),
        );
        second.unwrap();
        third.unwrap();

        let settled = db
            .credits()
            .get_by_id(&owning_credit.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(settled.installments_paid, 3);
        assert_eq!(settled.remaining_cents, 0);

        let sale_done = db.sales().get_by_id(&sale_id).await.unwrap().unwrap();
        assert_eq!(sale_done.state, SaleState::Completed);

        db.close().await;
        testutil::remove_db_file(&path);
    }

    #[tokio::test]
    async fn test_payment_detail_resolves_target() {
        let db = testutil::test_db().await;
        let service = PaymentService::new(db.clone());

        // Sale-targeted payment resolves back to its sale
        let cash_sale_id = create_cash_sale(&db).await;
        let sale_payment = service
            .pay_sale(&cash_sale_id, PaymentMethod::Card)
            .await
            .unwrap();
        let detail = service.get_payment_detail(&sale_payment.id).await.unwrap();
        assert_eq!(detail.payment.target, PaymentTarget::Sale);
        assert_eq!(detail.sale.unwrap().id, cash_sale_id);
        assert!(detail.installment.is_none());

        // Installment-targeted payment resolves back to its installment
        let credit_sale_id = create_credit_sale(&db).await;
        let owning_credit = db
            .credits()
            .get_by_sale(&credit_sale_id)
            .await
            .unwrap()
            .unwrap();
        let first = db
            .credits()
            .list_installments(&owning_credit.id)
            .await
            .unwrap()[0]
            .clone();
        let inst_payment = service
            .pay_installment(&first.id, PaymentMethod::Qr)
            .await
            .unwrap();
        let detail = service.get_payment_detail(&inst_payment.id).await.unwrap();
        assert_eq!(detail.payment.target, PaymentTarget::Installment);
        assert!(detail.sale.is_none());
        assert_eq!(detail.installment.unwrap().id, first.id);
    }

    #[tokio::test]
    async fn test_unknown_installment_is_not_found() {
        let db = testutil::test_db().await;
        let service = PaymentService::new(db);

        let err = service
            .pay_installment("ghost", PaymentMethod::Cash)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "not_found");
    }
}
