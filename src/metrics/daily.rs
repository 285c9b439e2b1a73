//! Dense daily spending series

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{DateRange, Money, Transaction};

/// Spending on a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Money,
}

/// Expense totals for the trailing `window_days` days ending today
pub fn daily_spending(transactions: &[Transaction], window_days: u32) -> Vec<DailyTotal> {
    daily_spending_ending(transactions, window_days, super::today())
}

/// Expense totals for the `window_days` days ending on `today`
///
/// One entry per calendar day, oldest first, with zero for days without
/// expenses. The result has exactly `window_days` entries, or none when the
/// window is empty or reaches past the earliest representable date.
pub fn daily_spending_ending(
    transactions: &[Transaction],
    window_days: u32,
    today: NaiveDate,
) -> Vec<DailyTotal> {
    let Some(window) = DateRange::trailing_days(today, window_days) else {
        return Vec::new();
    };

    let mut by_day: HashMap<NaiveDate, Money> = HashMap::new();
    for txn in transactions
        .iter()
        .filter(|txn| txn.is_expense() && window.contains(txn.date))
    {
        *by_day.entry(txn.date).or_insert_with(Money::zero) += txn.magnitude();
    }

    window
        .days()
        .map(|date| DailyTotal {
            date,
            total: by_day.get(&date).copied().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    #[test]
    fn test_dense_series_with_gap() {
        let start = today() - Duration::days(13);
        let mut txns = Vec::new();
        for offset in 0..14 {
            // leave day 3 (offset 2) empty
            if offset == 2 {
                continue;
            }
            txns.push(Transaction::expense(
                "Café",
                Money::from_cents(1000 + offset),
                start + Duration::days(offset),
            ));
        }

        let series = daily_spending_ending(&txns, 14, today());
        assert_eq!(series.len(), 14);
        assert_eq!(series[0].date, start);
        assert_eq!(series[13].date, today());
        assert_eq!(series[2].date, start + Duration::days(2));
        assert!(series[2].total.is_zero());
        assert_eq!(series[3].total.cents(), 1003);
    }

    #[test]
    fn test_sums_same_day_and_skips_income_and_outside() {
        let txns = vec![
            Transaction::expense("Almoço", Money::from_reais(30), today()),
            Transaction::expense("Jantar", Money::from_reais(45), today()),
            Transaction::income("Pix", Money::from_reais(100), today()),
            Transaction::expense("Antigo", Money::from_reais(999), today() - Duration::days(7)),
            Transaction::expense("Futuro", Money::from_reais(999), today() + Duration::days(1)),
        ];
        let series = daily_spending_ending(&txns, 7, today());
        assert_eq!(series.len(), 7);
        assert_eq!(series[6].total, Money::from_reais(75));
        assert!(series[..6].iter().all(|d| d.total.is_zero()));
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let series = daily_spending_ending(&[], 30, today());
        assert_eq!(series.len(), 30);
        assert!(series.iter().all(|d| d.total.is_zero()));
    }

    #[test]
    fn test_zero_window_is_empty() {
        assert!(daily_spending_ending(&[], 0, today()).is_empty());
    }

    #[test]
    fn test_window_crossing_month_boundary() {
        let series = daily_spending_ending(&[], 20, today());
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 2, 24).unwrap());
        let mut previous = series[0].date;
        for day in &series[1..] {
            assert_eq!(day.date - previous, Duration::days(1));
            previous = day.date;
        }
    }

    #[test]
    fn test_window_past_earliest_date_is_empty() {
        let txns = vec![Transaction::expense("Café", Money::from_reais(5), today())];
        assert!(daily_spending_ending(&txns, 200_000_000, today()).is_empty());
    }
}
