//! # Installment Schedule Module
//!
//! Generates the ordered installment schedule for a credit.
//!
//! ## Schedule Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Credit: start = 2026-04-15, term = 4, monthly                          │
//! │                                                                         │
//! │  #1  due 2026-04-15   (due date of installment 1 = start date)          │
//! │  #2  due 2026-05-15   (advanced by one period)                          │
//! │  #3  due 2026-06-15                                                     │
//! │  #4  due 2026-07-15                                                     │
//! │                                                                         │
//! │  Every installment carries the credit's fixed per-installment amount.   │
//! │  Monthly advancement is calendar-aware: Jan 31 → Feb 28/29.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The start date itself is the sale date plus one calendar month — a fixed
//! grace offset before the first installment cycle begins; that offset is
//! applied by the orchestrator when it builds the credit, not here.

use chrono::NaiveDate;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Frequency;

/// One not-yet-persisted installment produced by the generator.
///
/// The persistence layer assigns ids and the owning credit reference when it
/// writes the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallmentDraft {
    /// 1-based sequence number.
    pub number: i64,
    pub amount: Money,
    pub due_date: NaiveDate,
}

/// Produces `term_periods` installment drafts numbered 1..=N.
///
/// Installment 1 is due on `start_date`; each subsequent due date advances
/// by one period of `frequency`. All drafts carry `installment_amount`.
///
/// Pure and deterministic: the same credit parameters always yield the same
/// schedule.
pub fn generate_schedule(
    start_date: NaiveDate,
    frequency: Frequency,
    term_periods: i64,
    installment_amount: Money,
) -> CoreResult<Vec<InstallmentDraft>> {
    if term_periods <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "term_periods".to_string(),
        }
        .into());
    }

    let mut schedule = Vec::with_capacity(term_periods as usize);
    let mut due_date = start_date;

    for number in 1..=term_periods {
        schedule.push(InstallmentDraft {
            number,
            amount: installment_amount,
            due_date,
        });
        due_date = frequency.advance(due_date);
    }

    Ok(schedule)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_schedule_spacing() {
        let schedule = generate_schedule(
            date(2026, 4, 15),
            Frequency::Monthly,
            6,
            Money::from_cents(17_667),
        )
        .unwrap();

        assert_eq!(schedule.len(), 6);
        // First due date equals the start date
        assert_eq!(schedule[0].due_date, date(2026, 4, 15));
        // Exactly one calendar month apart
        for (i, expected_month) in (5..=9).enumerate() {
            assert_eq!(schedule[i + 1].due_date, date(2026, expected_month, 15));
        }
        // Sequence numbers are 1..=6 and amounts are uniform
        for (i, draft) in schedule.iter().enumerate() {
            assert_eq!(draft.number, i as i64 + 1);
            assert_eq!(draft.amount.cents(), 17_667);
        }
    }

    #[test]
    fn test_monthly_schedule_clamps_month_end() {
        // Start on Jan 31: February clamps, later months keep the clamp day
        let schedule = generate_schedule(
            date(2026, 1, 31),
            Frequency::Monthly,
            3,
            Money::from_cents(5_000),
        )
        .unwrap();

        assert_eq!(schedule[0].due_date, date(2026, 1, 31));
        assert_eq!(schedule[1].due_date, date(2026, 2, 28));
        assert_eq!(schedule[2].due_date, date(2026, 3, 28));
    }

    #[test]
    fn test_weekly_schedule_spacing() {
        let schedule = generate_schedule(
            date(2026, 3, 2),
            Frequency::Weekly,
            4,
            Money::from_cents(2_500),
        )
        .unwrap();

        assert_eq!(
            schedule.iter().map(|d| d.due_date).collect::<Vec<_>>(),
            vec![
                date(2026, 3, 2),
                date(2026, 3, 9),
                date(2026, 3, 16),
                date(2026, 3, 23),
            ]
        );
    }

    #[test]
    fn test_biweekly_schedule_spacing() {
        // Biweekly is a fixed 15-day step, crossing month boundaries freely
        let schedule = generate_schedule(
            date(2026, 3, 25),
            Frequency::Biweekly,
            3,
            Money::from_cents(12_120),
        )
        .unwrap();

        assert_eq!(schedule[0].due_date, date(2026, 3, 25));
        assert_eq!(schedule[1].due_date, date(2026, 4, 9));
        assert_eq!(schedule[2].due_date, date(2026, 4, 24));
    }

    #[test]
    fn test_schedule_is_deterministic() {
        let a = generate_schedule(
            date(2026, 4, 15),
            Frequency::Monthly,
            6,
            Money::from_cents(17_667),
        )
        .unwrap();
        let b = generate_schedule(
            date(2026, 4, 15),
            Frequency::Monthly,
            6,
            Money::from_cents(17_667),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_nonpositive_term() {
        assert!(
            generate_schedule(date(2026, 1, 1), Frequency::Monthly, 0, Money::zero()).is_err()
        );
        assert!(
            generate_schedule(date(2026, 1, 1), Frequency::Monthly, -1, Money::zero()).is_err()
        );
    }
}
