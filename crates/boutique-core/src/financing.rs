//! # Financing Module
//!
//! The credit calculator: pure simple-interest financing math.
//!
//! ## The Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SIMPLE INTEREST (not compounding)                                      │
//! │                                                                         │
//! │  I = P × r × t                                                          │
//! │      P = sale total (principal)                                         │
//! │      r = per-period rate = (annual% / 100) / periods_per_year           │
//! │          computed at 4-decimal precision, half-up                       │
//! │      t = term, in periods                                               │
//! │                                                                         │
//! │  total_financed = round2(P + I)                  (half-up to cents)     │
//! │  installment    = round2(total_financed / term)  (half-up to cents)     │
//! │                                                                         │
//! │  Total interest scales linearly with the term; it is never recomputed   │
//! │  per period on the declining balance.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Residual Cent
//! `installment × term` may differ from `total_financed` by a few cents
//! because every installment gets the same half-up rounded amount and the
//! last one is NOT adjusted. See [`tests::test_residual_cent_is_preserved`].

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{AnnualRate, Frequency};
use crate::MAX_TERM_PERIODS;

/// Result of the financing computation for one credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Financing {
    /// Principal plus simple interest, rounded to cents.
    pub total_financed: Money,
    /// Fixed amount of every installment, rounded to cents.
    pub installment: Money,
}

/// Computes total financed amount and per-installment amount for a sale.
///
/// ## Arguments
/// * `sale_total` - principal being financed
/// * `annual_rate` - annual interest rate in basis points
/// * `frequency` - installment cadence (determines periods per year)
/// * `term_periods` - number of installments
///
/// ## Determinism
/// Pure integer arithmetic: the same inputs always produce the same pair.
///
/// ## Example
/// ```rust
/// use boutique_core::financing::compute_financing;
/// use boutique_core::money::Money;
/// use boutique_core::types::{AnnualRate, Frequency};
///
/// let f = compute_financing(
///     Money::from_cents(100_000), // $1000.00
///     AnnualRate::from_bps(1200), // 12.00% annual
///     Frequency::Monthly,
///     6,
/// )
/// .unwrap();
/// assert_eq!(f.total_financed.cents(), 106_000); // $1060.00
/// assert_eq!(f.installment.cents(), 17_667);     // $176.67
/// ```
pub fn compute_financing(
    sale_total: Money,
    annual_rate: AnnualRate,
    frequency: Frequency,
    term_periods: i64,
) -> CoreResult<Financing> {
    if term_periods <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "term_periods".to_string(),
        }
        .into());
    }
    if term_periods > MAX_TERM_PERIODS {
        return Err(ValidationError::OutOfRange {
            field: "term_periods".to_string(),
            min: 1,
            max: MAX_TERM_PERIODS,
        }
        .into());
    }
    if sale_total.is_negative() {
        return Err(ValidationError::MustBePositive {
            field: "sale_total".to_string(),
        }
        .into());
    }

    // Per-period rate at 1e4 scale, half-up; e.g. 10.00%/monthly → 0.0083
    let rate_e4 = annual_rate.per_period_e4(frequency);

    let total_financed = sale_total.with_simple_interest(rate_e4, term_periods);
    let installment = total_financed.divide_half_up(term_periods);

    Ok(Financing {
        total_financed,
        installment,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_six_periods_deterministic() {
        // $1000.00 at 12% annual, 6 monthly installments:
        // r = 0.1200/12 = 0.0100, I = 1000*0.01*6 = 60.00
        let f = compute_financing(
            Money::from_cents(100_000),
            AnnualRate::from_bps(1200),
            Frequency::Monthly,
            6,
        )
        .unwrap();

        assert_eq!(f.total_financed.cents(), 106_000);
        assert_eq!(f.installment.cents(), 17_667);

        // Reproducible across runs
        let again = compute_financing(
            Money::from_cents(100_000),
            AnnualRate::from_bps(1200),
            Frequency::Monthly,
            6,
        )
        .unwrap();
        assert_eq!(f, again);
    }

    #[test]
    fn test_monthly_three_periods_exact_split() {
        // $300.00 at 10% annual, 3 monthly installments:
        // r = 0.1000/12 = 0.008333... → 0.0083
        // I = 300 * 0.0083 * 3 = 7.47 → total 307.47, installment 102.49
        let f = compute_financing(
            Money::from_cents(30_000),
            AnnualRate::from_bps(1000),
            Frequency::Monthly,
            3,
        )
        .unwrap();

        assert_eq!(f.total_financed.cents(), 30_747);
        assert_eq!(f.installment.cents(), 10_249);
        // This one splits exactly: 3 × 102.49 = 307.47
        assert_eq!(f.installment.cents() * 3, f.total_financed.cents());
    }

    #[test]
    fn test_weekly_and_biweekly_rates() {
        // $520.00 at 5.20% annual, 4 weekly installments:
        // r = 0.0520/52 = 0.0010, I = 520 * 0.001 * 4 = 2.08
        let weekly = compute_financing(
            Money::from_cents(52_000),
            AnnualRate::from_bps(520),
            Frequency::Weekly,
            4,
        )
        .unwrap();
        assert_eq!(weekly.total_financed.cents(), 52_208);

        // $240.00 at 12% annual, 2 biweekly installments:
        // r = 0.1200/24 = 0.0050, I = 240 * 0.005 * 2 = 2.40
        let biweekly = compute_financing(
            Money::from_cents(24_000),
            AnnualRate::from_bps(1200),
            Frequency::Biweekly,
            2,
        )
        .unwrap();
        assert_eq!(biweekly.total_financed.cents(), 24_240);
        assert_eq!(biweekly.installment.cents(), 12_120);
    }

    #[test]
    fn test_zero_rate_financing() {
        // Interest-free plan: total financed equals the sale total
        let f = compute_financing(
            Money::from_cents(9_000),
            AnnualRate::zero(),
            Frequency::Monthly,
            3,
        )
        .unwrap();
        assert_eq!(f.total_financed.cents(), 9_000);
        assert_eq!(f.installment.cents(), 3_000);
    }

    /// Documents the preserved behavior: the last installment is NOT
    /// adjusted, so the schedule can sum to slightly more or less than the
    /// financed total.
    #[test]
    fn test_residual_cent_is_preserved() {
        let f = compute_financing(
            Money::from_cents(100_000),
            AnnualRate::from_bps(1200),
            Frequency::Monthly,
            6,
        )
        .unwrap();

        let schedule_sum = f.installment.cents() * 6;
        assert_eq!(schedule_sum, 106_002);
        assert_eq!(schedule_sum - f.total_financed.cents(), 2);
    }

    #[test]
    fn test_rejects_nonpositive_term() {
        assert!(compute_financing(
            Money::from_cents(10_000),
            AnnualRate::from_bps(1000),
            Frequency::Monthly,
            0,
        )
        .is_err());

        assert!(compute_financing(
            Money::from_cents(10_000),
            AnnualRate::from_bps(1000),
            Frequency::Monthly,
            -3,
        )
        .is_err());
    }

    #[test]
    fn test_rejects_oversized_term() {
        assert!(compute_financing(
            Money::from_cents(10_000),
            AnnualRate::from_bps(1000),
            Frequency::Weekly,
            MAX_TERM_PERIODS + 1,
        )
        .is_err());
    }

    #[test]
    fn test_rejects_negative_principal() {
        assert!(compute_financing(
            Money::from_cents(-100),
            AnnualRate::from_bps(1000),
            Frequency::Monthly,
            3,
        )
        .is_err());
    }

    #[test]
    fn test_large_principal_no_overflow() {
        // $10,000,000.00 at 24% annual over 24 monthly periods
        let f = compute_financing(
            Money::from_cents(1_000_000_000),
            AnnualRate::from_bps(2400),
            Frequency::Monthly,
            24,
        )
        .unwrap();
        // r = 0.0200, I = 10_000_000 * 0.02 * 24 = 4_800_000.00
        assert_eq!(f.total_financed.cents(), 1_480_000_000);
    }
}
