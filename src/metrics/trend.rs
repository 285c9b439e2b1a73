//! Monthly income/expense trend

use chrono::NaiveDate;
use serde::Serialize;

use super::summary::{summarize, Summary};
use crate::models::{months_before, DateRange, Transaction};

/// The summary of one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyTotals {
    pub year: i32,
    pub month: u32,
    pub summary: Summary,
}

impl MonthlyTotals {
    /// "YYYY-MM"
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }
}

/// One summary per month for the `months` months ending with the month of
/// `today`, oldest first, including months without activity
pub fn monthly_trend(transactions: &[Transaction], months: u32, today: NaiveDate) -> Vec<MonthlyTotals> {
    (0..months)
        .rev()
        .filter_map(|back| {
            let (year, month) = months_before(today, back);
            let range = DateRange::month(year, month).ok()?;
            Some(MonthlyTotals {
                year,
                month,
                summary: summarize(transactions, Some(&range)),
            })
        })
        .collect()
}
