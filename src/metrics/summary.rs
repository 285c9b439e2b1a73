//! Period summaries

use serde::Serialize;

use crate::models::{DateRange, Money, Transaction, TransactionKind};

/// Income, expense and balance over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    /// Sum of income magnitudes (never negative)
    pub total_income: Money,
    /// Sum of expense magnitudes (never negative)
    pub total_expense: Money,
    /// `total_income - total_expense`
    pub balance: Money,
    pub transaction_count: usize,
}

impl Summary {
    /// Fold one transaction into the running totals
    pub fn record(&mut self, txn: &Transaction) {
        match txn.kind {
            TransactionKind::Income => self.total_income += txn.magnitude(),
            TransactionKind::Expense => self.total_expense += txn.magnitude(),
        }
        self.balance = self.total_income - self.total_expense;
        self.transaction_count += 1;
    }

    /// Balance as a percentage of income, or `None` with no income
    pub fn savings_rate(&self) -> Option<f64> {
        self.balance.percent_of(self.total_income)
    }
}

/// Summarize transactions, optionally restricted to an inclusive date range
///
/// An empty input (or a range matching nothing) yields an all-zero summary.
pub fn summarize(transactions: &[Transaction], period: Option<&DateRange>) -> Summary {
    transactions
        .iter()
        .filter(|txn| period.map_or(true, |range| range.contains(txn.date)))
        .fold(Summary::default(), |mut summary, txn| {
            summary.record(txn);
            summary
        })
}
