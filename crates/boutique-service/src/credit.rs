//! # Credit Queries
//!
//! Read-side operations over credits and their installment schedules.
//!
//! Mutation of credits happens only through the payment cascades in
//! [`crate::payment`]; this module is lookups.

use boutique_core::{Credit, Installment};
use boutique_db::Database;

use crate::error::{ServiceError, ServiceResult};

/// A credit with its full installment schedule.
#[derive(Debug, Clone)]
pub struct CreditDetail {
    pub credit: Credit,
    /// Ordered by installment number.
    pub installments: Vec<Installment>,
}

/// Read-side access to credits and installments.
#[derive(Debug, Clone)]
pub struct CreditService {
    db: Database,
}

impl CreditService {
    /// Creates a new CreditService over a database handle.
    pub fn new(db: Database) -> Self {
        CreditService { db }
    }

    /// Gets the credit financing a sale.
    ///
    /// ## Errors
    /// * `NotFound` - the sale has no credit (cash sale or unknown id)
    pub async fn get_for_sale(&self, sale_id: &str) -> ServiceResult<Credit> {
        self.db
            .credits()
            .get_by_sale(sale_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Credit (for sale)", sale_id))
    }

    /// Gets a credit with its schedule, ordered by installment number.
    pub async fn get_detail(&self, credit_id: &str) -> ServiceResult<CreditDetail> {
        let credit = self
            .db
            .credits()
            .get_by_id(credit_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Credit", credit_id))?;

        let installments = self.db.credits().list_installments(credit_id).await?;

        Ok(CreditDetail {
            credit,
            installments,
        })
    }

    /// Lists the unpaid installments of a credit, ordered by number.
    pub async fn outstanding_installments(
        &self,
        credit_id: &str,
    ) -> ServiceResult<Vec<Installment>> {
        let detail = self.get_detail(credit_id).await?;
        Ok(detail
            .installments
            .into_iter()
            .filter(|i| !i.paid)
            .collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::PaymentService;
    use crate::sale::{CreateSaleRequest, LineRequest, SaleService};
    use crate::testutil;
    use boutique_core::{PaymentMethod, PaymentType, SaleType};

    async fn create_credit_sale(db: &Database) -> String {
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
    async fn test_get_for_sale() {
        let db = testutil::test_db().await;
        let sale_id = create_credit_sale(&db).await;
        let service = CreditService::new(db);

        let credit = service.get_for_sale(&sale_id).await.unwrap();
        assert_eq!(credit.sale_id, sale_id);

        let err = service.get_for_sale("ghost").await.unwrap_err();
        assert_eq!(err.kind(), "not_found");
    }

    #[tokio::test]
    async fn test_outstanding_shrinks_as_installments_are_paid() {
        let db = testutil::test_db().await;
        let sale_id = create_credit_sale(&db).await;
        let service = CreditService::new(db.clone());

        let credit = service.get_for_sale(&sale_id).await.unwrap();
        let outstanding = service.outstanding_installments(&credit.id).await.unwrap();
        assert_eq!(outstanding.len(), 3);

        PaymentService::new(db)
            .pay_installment(&outstanding[0].id, PaymentMethod::Cash)
            .await
            .unwrap();

        let outstanding = service.outstanding_installments(&credit.id).await.unwrap();
        assert_eq!(outstanding.len(), 2);
        assert_eq!(outstanding[0].number, 2);
    }
}
