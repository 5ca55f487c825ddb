//! # Sale Orchestrator
//!
//! All-or-nothing sale creation and cancellation.
//!
//! ## Creation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     create_sale (one transaction)                       │
//! │                                                                         │
//! │  validate request ── lines present, quantities in range                 │
//! │       │                                                                 │
//! │  resolve references ── customer, branch, products, plan (reads)         │
//! │       │                                                                 │
//! │  BEGIN                                                                  │
//! │       ├── insert sale header (pending | paying_credit)                 │
//! │       ├── per line: reserve stock, insert line                         │
//! │       │      └── short stock? → error, ROLLBACK (nothing persists)     │
//! │       └── credit sale: compute financing, insert credit + schedule     │
//! │  COMMIT                                                                 │
//! │                                                                         │
//! │  Either the sale, its lines, its reservations, and its credit all      │
//! │  exist, or none of them do.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reference resolution happens before BEGIN so the transaction holds the
//! write connection only for the mutations themselves.

use chrono::{Months, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use boutique_core::{
    compute_financing, generate_schedule, validation, CoreError, Credit, CreditPlan, Money,
    PaymentType, Sale, SaleLine, SaleState, SaleType, ValidationError,
};
use boutique_db::repository::{credit, inventory, sale};
use boutique_db::{Database, ReserveOutcome};

use crate::error::{ServiceError, ServiceResult};

// =============================================================================
// Request / Response Types
// =============================================================================

/// One requested line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRequest {
    pub product_id: String,
    pub quantity: i64,
}

/// A sale creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSaleRequest {
    pub customer_id: String,
    pub branch_id: String,
    pub sale_type: SaleType,
    pub payment_type: PaymentType,
    pub lines: Vec<LineRequest>,
    /// Required when `payment_type` is credit, ignored otherwise.
    pub credit_plan_id: Option<String>,
    pub notes: Option<String>,
}

/// A sale with its lines and, for credit sales, the financing record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleDetail {
    pub sale: Sale,
    pub lines: Vec<SaleLine>,
    pub credit: Option<Credit>,
}

// =============================================================================
// Service
// =============================================================================

/// Orchestrates sale creation, cancellation, and detail reads.
#[derive(Debug, Clone)]
pub struct SaleService {
    db: Database,
}

impl SaleService {
    /// Creates a new SaleService over a database handle.
    pub fn new(db: Database) -> Self {
        SaleService { db }
    }

    /// Creates a sale atomically: header, lines, stock reservations, and
    /// (for credit sales) the financing record with its full installment
    /// schedule.
    ///
    /// ## Errors
    /// * `EmptyLineItems` - no lines in the request
    /// * `Validation` - quantity out of range, missing plan id, ...
    /// * `NotFound` - unknown customer/branch/product/plan or missing
    ///   inventory record
    /// * `InsufficientStock` - any line short on stock (nothing persists)
    /// * `UnsupportedFrequency` - the plan row holds an unknown cadence
    pub async fn create_sale(&self, req: CreateSaleRequest) -> ServiceResult<SaleDetail> {
        if req.lines.is_empty() {
            return Err(ServiceError::EmptyLineItems);
        }
        validation::validate_line_count(req.lines.len()).map_err(CoreError::from)?;
        for line in &req.lines {
            validation::validate_quantity(line.quantity).map_err(CoreError::from)?;
        }

        // Resolve references up front; every miss aborts before any write.
        self.db
            .customers()
            .get_by_id(&req.customer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Customer", &req.customer_id))?;

        let branch = self
            .db
            .branches()
            .get_by_id(&req.branch_id)
            .await?
            .filter(|b| !b.deleted)
            .ok_or_else(|| ServiceError::not_found("Branch", &req.branch_id))?;

        let mut products = Vec::with_capacity(req.lines.len());
        for line in &req.lines {
            let product = self
                .db
                .products()
                .get_by_id(&line.product_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Product", &line.product_id))?;
            products.push(product);
        }

        let total: Money = req
            .lines
            .iter()
            .zip(&products)
            .map(|(line, product)| product.price().multiply_quantity(line.quantity))
            .fold(Money::zero(), |acc, m| acc + m);

        // Zero-priced products are legal line by line, but the sale total
        // must be payable: payments are strictly positive, so a zero-total
        // sale could never leave pending.
        validation::validate_sale_total(total.cents()).map_err(CoreError::from)?;

        // For credit sales the plan is resolved and validated before BEGIN,
        // so an unsupported frequency never leaves a half-written credit.
        let plan = match req.payment_type {
            PaymentType::Credit => {
                let plan_id = req.credit_plan_id.as_deref().ok_or_else(|| {
                    ValidationError::Required {
                        field: "credit_plan_id".to_string(),
                    }
                })?;
                let row = self
                    .db
                    .plans()
                    .get_by_id(plan_id)
                    .await?
                    .filter(|p| p.active)
                    .ok_or_else(|| ServiceError::not_found("CreditPlan", plan_id))?;
                Some(CreditPlan::try_from(row).map_err(ServiceError::from)?)
            }
            PaymentType::Cash => None,
        };

        let now = Utc::now();
        let state = match req.payment_type {
            PaymentType::Cash => SaleState::Pending,
            PaymentType::Credit => SaleState::PayingCredit,
        };

        let new_sale = Sale {
            id: sale::generate_sale_id(),
            date: now,
            total_cents: total.cents(),
            sale_type: req.sale_type,
            payment_type: req.payment_type,
            state,
            notes: req.notes.clone(),
            customer_id: req.customer_id.clone(),
            branch_id: Some(branch.id.clone()),
            payment_id: None,
        };

        debug!(sale_id = %new_sale.id, total_cents = %new_sale.total_cents, "Creating sale");

        let mut tx = self.db.begin().await?;

        sale::insert_sale(&mut tx, &new_sale).await?;

        let mut lines = Vec::with_capacity(req.lines.len());
        for (line_req, product) in req.lines.iter().zip(&products) {
            match inventory::reserve(&mut tx, &branch.id, &product.id, line_req.quantity).await? {
                ReserveOutcome::Reserved { remaining } => {
                    debug!(product_id = %product.id, remaining = %remaining, "Stock reserved");
                }
                ReserveOutcome::Insufficient { available } => {
                    // Dropping the transaction rolls back the header and
                    // every earlier reservation of this sale.
                    return Err(ServiceError::InsufficientStock {
                        branch_id: branch.id.clone(),
                        product_id: product.id.clone(),
                        available,
                        requested: line_req.quantity,
                    });
                }
            }

            let line = SaleLine {
                id: sale::generate_sale_line_id(),
                sale_id: new_sale.id.clone(),
                product_id: product.id.clone(),
                quantity: line_req.quantity,
                unit_price_cents: product.price_cents,
                subtotal_cents: product.price().multiply_quantity(line_req.quantity).cents(),
            };
            sale::insert_line(&mut tx, &line).await?;
            lines.push(line);
        }

        let mut credit_record = None;
        if let Some(plan) = plan {
            let financing =
                compute_financing(total, plan.annual_rate(), plan.frequency, plan.term_periods)?;

            // Installment 1 falls due one calendar month after the sale.
            let start_date = (now + Months::new(1)).date_naive();
            let schedule = generate_schedule(
                start_date,
                plan.frequency,
                plan.term_periods,
                financing.installment,
            )?;

            let new_credit = Credit {
                id: credit::generate_credit_id(),
                sale_id: new_sale.id.clone(),
                plan_id: plan.id.clone(),
                total_financed_cents: financing.total_financed.cents(),
                installment_cents: financing.installment.cents(),
                total_installments: plan.term_periods,
                installments_paid: 0,
                start_date,
                remaining_cents: financing.total_financed.cents(),
            };

            credit::insert_credit(&mut tx, &new_credit).await?;
            credit::insert_schedule(&mut tx, &new_credit.id, &schedule).await?;
            credit_record = Some(new_credit);
        }

        tx.commit().await.map_err(boutique_db::DbError::from)?;

        info!(
            sale_id = %new_sale.id,
            state = %new_sale.state.as_str(),
            lines = lines.len(),
            "Sale created"
        );

        Ok(SaleDetail {
            sale: new_sale,
            lines,
            credit: credit_record,
        })
    }

    /// Cancels a non-terminal sale and returns every line's stock to the
    /// branch, atomically.
    ///
    /// ## Errors
    /// * `NotFound` - unknown sale
    /// * `InvalidTransition` - the sale is already completed or cancelled
    pub async fn cancel_sale(&self, sale_id: &str) -> ServiceResult<Sale> {
        let existing = self
            .db
            .sales()
            .get_by_id(sale_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Sale", sale_id))?;

        if existing.state.is_terminal() {
            return Err(CoreError::invalid_transition(
                "Sale",
                sale_id,
                existing.state.as_str(),
                "cancel",
            )
            .into());
        }

        let lines = self.db.sales().get_lines(sale_id).await?;

        let mut tx = self.db.begin().await?;

        if let Some(branch_id) = &existing.branch_id {
            for line in &lines {
                inventory::release(&mut tx, branch_id, &line.product_id, line.quantity).await?;
            }
        }

        sale::update_state(&mut tx, sale_id, existing.state, SaleState::Cancelled).await?;

        tx.commit().await.map_err(boutique_db::DbError::from)?;

        info!(sale_id = %sale_id, restocked_lines = lines.len(), "Sale cancelled");

        let mut cancelled = existing;
        cancelled.state = SaleState::Cancelled;
        Ok(cancelled)
    }

    /// Gets a sale with its lines and attached credit, if any.
    pub async fn get_detail(&self, sale_id: &str) -> ServiceResult<SaleDetail> {
        let sale = self
            .db
            .sales()
            .get_by_id(sale_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Sale", sale_id))?;

        let lines = self.db.sales().get_lines(sale_id).await?;
        let credit = self.db.credits().get_by_sale(sale_id).await?;

        Ok(SaleDetail {
            sale,
            lines,
            credit,
        })
    }

    /// Lists sales in a given state, newest first, optionally scoped to one
    /// branch.
    pub async fn list_by_state(
        &self,
        state: SaleState,
        branch_id: Option<&str>,
    ) -> ServiceResult<Vec<Sale>> {
        Ok(self.db.sales().list_by_state(state, branch_id).await?)
    }

    /// Lists a customer's sales, newest first.
    pub async fn list_by_customer(&self, customer_id: &str) -> ServiceResult<Vec<Sale>> {
        Ok(self.db.sales().list_by_customer(customer_id).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
