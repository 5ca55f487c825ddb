//! # Domain Types
//!
//! Core domain types for the boutique back office.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Sale       │   │     Credit      │   │    Payment      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │──►│  sale_id (FK)   │   │  id (UUID)      │       │
//! │  │  state          │   │  remaining      │   │  target         │       │
//! │  │  total_cents    │   │  installments   │   │  amount_cents   │       │
//! │  └────────┬────────┘   └────────┬────────┘   └─────────────────┘       │
//! │           │                     │                                       │
//! │  ┌────────▼────────┐   ┌────────▼────────┐   ┌─────────────────┐       │
//! │  │    SaleLine     │   │   Installment   │   │ InventoryRecord │       │
//! │  │  product, qty   │   │  number, due    │   │ (branch,product)│       │
//! │  └─────────────────┘   └─────────────────┘   │     quantity    │       │
//! │                                               └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reference Discipline
//! All associations are unidirectional foreign keys. Back-references
//! (sale → credit, credit → installments) are lookup queries, never object
//! pointers, so entity graphs stay acyclic.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Annual Rate
// =============================================================================

/// Annual interest rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1200 bps = 12.00% annual interest
///
/// Expressed as a 1e4-scaled fraction, 1200 bps is exactly the 4-decimal
/// value 0.1200 — rate math stays in integers end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualRate(u32);

impl AnnualRate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        AnnualRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero interest.
    #[inline]
    pub const fn zero() -> Self {
        AnnualRate(0)
    }

    /// Per-period rate at 1e4 fixed-point scale, rounded half-up.
    ///
    /// 12.00% annual / 12 monthly periods = 0.0100 → 100.
    /// 10.00% annual / 12 monthly periods = 0.008333... → 0.0083 → 83.
    pub fn per_period_e4(&self, frequency: Frequency) -> i64 {
        let periods = frequency.periods_per_year();
        (self.0 as i64 + periods / 2) / periods
    }
}

impl Default for AnnualRate {
    fn default() -> Self {
        AnnualRate::zero()
    }
}

// =============================================================================
// Financing Frequency
// =============================================================================

/// Payment cadence of a credit plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// One installment per week.
    Weekly,
    /// One installment every 15 days.
    Biweekly,
    /// One installment per calendar month.
    Monthly,
}

impl Frequency {
    /// Periods per year used by the financing math.
    ///
    /// Biweekly is 24 (two per month), not 26, matching the commercial
    /// "quincena" convention.
    #[inline]
    pub const fn periods_per_year(&self) -> i64 {
        match self {
            Frequency::Weekly => 52,
            Frequency::Biweekly => 24,
            Frequency::Monthly => 12,
        }
    }

    /// Advances a due date by one period.
    ///
    /// Monthly advancement is calendar-aware (Jan 31 → Feb 28/29), not a
    /// fixed 30-day step.
    pub fn advance(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Weekly => date + chrono::Duration::weeks(1),
            Frequency::Biweekly => date + chrono::Duration::days(15),
            Frequency::Monthly => date + chrono::Months::new(1),
        }
    }

    /// Stable text form, matching the database representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = CoreError;

    /// Parses the stored text form. Anything else is an unsupported
    /// frequency — surfaced before any financing math runs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Frequency::Weekly),
            "biweekly" => Ok(Frequency::Biweekly),
            "monthly" => Ok(Frequency::Monthly),
            other => Err(CoreError::UnsupportedFrequency {
                frequency: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Sale Enums
// =============================================================================

/// How the sale was transacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum SaleType {
    /// Walk-in counter sale.
    Cash,
    /// Reserved merchandise, paid over time.
    Layaway,
}

/// How the sale is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// Single payment settles the sale.
    Cash,
    /// Installment financing through a credit plan.
    Credit,
}

/// The state of a sale.
///
/// ## State Machine
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │   PENDING ────────────────sale payment──────────────► COMPLETED     │
/// │   PAYING_CREDIT ──────────last installment──────────► COMPLETED     │
/// │   IN_PROCESS                                                        │
/// │                                                                     │
/// │   any non-terminal ───────cancellation──────────────► CANCELLED     │
/// │                            (restocks every line)                    │
/// │                                                                     │
/// │   COMPLETED / CANCELLED are terminal: no transition leaves them.    │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum SaleState {
    /// Awaiting its single payment.
    Pending,
    /// Being prepared/shipped (created by flows outside this core).
    InProcess,
    /// Credit sale with installments outstanding.
    PayingCredit,
    /// Fully paid.
    Completed,
    /// Cancelled; its stock reservations were returned.
    Cancelled,
}

impl SaleState {
    /// Terminal states admit no further transition.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, SaleState::Completed | SaleState::Cancelled)
    }

    /// Stable text form, matching the database representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SaleState::Pending => "pending",
            SaleState::InProcess => "in_process",
            SaleState::PayingCredit => "paying_credit",
            SaleState::Completed => "completed",
            SaleState::Cancelled => "cancelled",
        }
    }
}

// =============================================================================
// Payment Enums
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash.
    Cash,
    /// Card on an external terminal.
    Card,
    /// QR / bank transfer.
    Qr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

/// What a payment settles. A payment links to exactly one sale or one
/// installment, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum PaymentTarget {
    Sale,
    Installment,
}

// =============================================================================
// Product Attributes
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Womens,
    Mens,
    Unisex,
    Kids,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum GarmentType {
    TShirt,
    Shirt,
    Blouse,
    Hoodie,
    Sweater,
    Pants,
    Skirt,
    Shorts,
    Leggings,
    Jeans,
    Dress,
    Jacket,
    Footwear,
    Accessory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
    Xxxl,
    OneSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    AllSeason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Casual,
    Formal,
    Sporty,
    Urban,
    Vintage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Cotton,
    Polyester,
    Wool,
    Denim,
    Leather,
    Linen,
    Synthetic,
}

/// Intended use of a garment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum Usage {
    Daily,
    Work,
    Sport,
    Occasion,
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product. Immutable once referenced by a sale line — the line
/// snapshots the unit price at sale time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Price in cents (smallest currency unit).
    pub price_cents: i64,
    /// Brand is open-ended free text; the rest are closed attribute sets.
    pub brand: String,
    pub gender: Gender,
    pub garment_type: GarmentType,
    pub size: Option<Size>,
    pub season: Option<Season>,
    pub style: Option<Style>,
    pub material: Material,
    pub usage: Usage,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Branch
// =============================================================================

/// A physical sales location holding its own inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    /// Soft-delete flag; deleted branches are hidden from listings but
    /// remain referenced by historical sales.
    pub deleted: bool,
}

// =============================================================================
// Customer
// =============================================================================

/// Shared person data, embedded by composition wherever a record represents
/// a human (customers today; employees live with the out-of-scope user
/// management).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Person {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A customer who owns sales and credits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: String,
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    pub person: Person,
}

// =============================================================================
// Inventory
// =============================================================================

/// Per-(branch, product) stock counter. Unique per pair; mutated only by
/// the inventory ledger operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InventoryRecord {
    pub id: String,
    pub branch_id: String,
    pub product_id: String,
    /// Non-negative by invariant; the ledger rejects any decrement below
    /// zero.
    pub quantity: i64,
}

// =============================================================================
// Sale
// =============================================================================

/// A sale transaction.
///
/// The optional credit attached to a credit sale is not a field here: it is
/// looked up by `credits.sale_id`, keeping the reference graph acyclic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    pub id: String,
    pub date: DateTime<Utc>,
    pub total_cents: i64,
    pub sale_type: SaleType,
    pub payment_type: PaymentType,
    pub state: SaleState,
    pub notes: Option<String>,
    pub customer_id: String,
    /// Branch the stock was reserved at. Sales created through the
    /// orchestrator always carry one.
    pub branch_id: Option<String>,
    /// The single payment that settled a cash sale, once recorded.
    pub payment_id: Option<String>,
}

impl Sale {
    /// Returns the sale total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Sale Line
// =============================================================================

/// One product/quantity/price entry within a sale. Created atomically with
/// its stock reservation; immutable afterwards except through full sale
/// cancellation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleLine {
    pub id: String,
    pub sale_id: String,
    pub product_id: String,
    pub quantity: i64,
    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,
    /// unit_price × quantity.
    pub subtotal_cents: i64,
}

impl SaleLine {
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }
}

// =============================================================================
// Credit Plan
// =============================================================================

/// Reference configuration defining term, frequency, and interest rate for
/// financing. Rarely mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditPlan {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Number of installments.
    pub term_periods: i64,
    pub frequency: Frequency,
    /// Annual interest rate in basis points (1200 = 12.00%).
    pub annual_rate_bps: u32,
    pub active: bool,
}

impl CreditPlan {
    #[inline]
    pub fn annual_rate(&self) -> AnnualRate {
        AnnualRate::from_bps(self.annual_rate_bps)
    }
}

// =============================================================================
// Credit
// =============================================================================

/// An installment-financing record attached 1:1 to a sale.
///
/// ## Invariant
/// `remaining_cents == total_financed_cents - installment_cents * installments_paid`
/// and `installments_paid <= total_installments`, maintained by the payment
/// reconciliation transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Credit {
    pub id: String,
    pub sale_id: String,
    pub plan_id: String,
    pub total_financed_cents: i64,
    /// Fixed amount of every installment.
    pub installment_cents: i64,
    pub total_installments: i64,
    pub installments_paid: i64,
    /// Due date of installment 1 (sale date + 1 month).
    pub start_date: NaiveDate,
    pub remaining_cents: i64,
}

impl Credit {
    #[inline]
    pub fn total_financed(&self) -> Money {
        Money::from_cents(self.total_financed_cents)
    }

    #[inline]
    pub fn installment(&self) -> Money {
        Money::from_cents(self.installment_cents)
    }

    #[inline]
    pub fn remaining(&self) -> Money {
        Money::from_cents(self.remaining_cents)
    }

    /// True once every installment has been paid.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.installments_paid >= self.total_installments
    }
}

// =============================================================================
// Installment
// =============================================================================

/// One scheduled partial payment of a credit. Created in a single batch at
/// credit creation; flips `paid` false→true exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Installment {
    pub id: String,
    pub credit_id: String,
    /// 1-based sequence number within the credit.
    pub number: i64,
    pub amount_cents: i64,
    pub due_date: NaiveDate,
    pub paid: bool,
    pub paid_date: Option<NaiveDate>,
    /// The payment that settled this installment, once recorded.
    pub payment_id: Option<String>,
}

impl Installment {
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Payment
// =============================================================================

/// A recorded payment. Created once, immutable; linked 1:1 to either a sale
/// or an installment via its target kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Payment {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub method: PaymentMethod,
    pub amount_cents: i64,
    pub target: PaymentTarget,
    pub status: PaymentStatus,
}

impl Payment {
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_rate_per_period() {
        // 12.00% / 12 = 0.0100
        assert_eq!(
            AnnualRate::from_bps(1200).per_period_e4(Frequency::Monthly),
            100
        );
        // 10.00% / 12 = 0.008333... → 0.0083 half-up
        assert_eq!(
            AnnualRate::from_bps(1000).per_period_e4(Frequency::Monthly),
            83
        );
        // 12.00% / 52 = 0.002307... → 0.0023
        assert_eq!(
            AnnualRate::from_bps(1200).per_period_e4(Frequency::Weekly),
            23
        );
        // 12.00% / 24 = 0.0050 exact
        assert_eq!(
            AnnualRate::from_bps(1200).per_period_e4(Frequency::Biweekly),
            50
        );
    }

    #[test]
    fn test_frequency_periods_per_year() {
        assert_eq!(Frequency::Weekly.periods_per_year(), 52);
        assert_eq!(Frequency::Biweekly.periods_per_year(), 24);
        assert_eq!(Frequency::Monthly.periods_per_year(), 12);
    }

    #[test]
    fn test_frequency_from_str() {
        assert_eq!("weekly".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert_eq!("monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);

        let err = "daily".parse::<Frequency>().unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedFrequency { .. }));
    }

    #[test]
    fn test_frequency_advance_monthly_is_calendar_aware() {
        let jan31 = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        // Clamped to the end of February, not Jan 31 + 30 days
        assert_eq!(
            Frequency::Monthly.advance(jan31),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );

        let mar15 = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        assert_eq!(
            Frequency::Monthly.advance(mar15),
            NaiveDate::from_ymd_opt(2026, 4, 15).unwrap()
        );
    }

    #[test]
    fn test_frequency_advance_fixed_steps() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(
            Frequency::Weekly.advance(d),
            NaiveDate::from_ymd_opt(2026, 3, 8).unwrap()
        );
        assert_eq!(
            Frequency::Biweekly.advance(d),
            NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
        );
    }

    #[test]
    fn test_sale_state_terminal() {
        assert!(SaleState::Completed.is_terminal());
        assert!(SaleState::Cancelled.is_terminal());
        assert!(!SaleState::Pending.is_terminal());
        assert!(!SaleState::InProcess.is_terminal());
        assert!(!SaleState::PayingCredit.is_terminal());
    }

    #[test]
    fn test_credit_is_settled() {
        let mut credit = Credit {
            id: "c1".to_string(),
            sale_id: "s1".to_string(),
            plan_id: "p1".to_string(),
            total_financed_cents: 30_747,
            installment_cents: 10_249,
            total_installments: 3,
            installments_paid: 2,
            start_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            remaining_cents: 10_249,
        };
        assert!(!credit.is_settled());

        credit.installments_paid = 3;
        assert!(credit.is_settled());
    }

    #[test]
    fn test_person_full_name() {
        let person = Person {
            first_name: "Ana".to_string(),
            last_name: "Quispe".to_string(),
            phone: None,
            email: None,
        };
        assert_eq!(person.full_name(), "Ana Quispe");
    }
}
