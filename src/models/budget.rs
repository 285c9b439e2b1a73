//! Budget model
//!
//! A budget caps the spending of one category over an inclusive date range.
//! Spent amount, usage and status are never stored here; the metrics engine
//! derives them on every read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, CategoryId};
use super::money::Money;
use super::period::{BudgetPeriod, DateRange};

/// A spending limit for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,

    /// Display name ("Orçamento Alimentação")
    pub name: String,

    /// The category this budget limits
    pub category_id: CategoryId,

    /// Category name (stored for display)
    #[serde(default)]
    pub category_name: String,

    /// Spending limit for the whole range
    pub limit: Money,

    pub period: BudgetPeriod,

    pub start_date: NaiveDate,

    /// Last day covered by the budget (inclusive)
    pub end_date: NaiveDate,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Budget {
    /// Create a budget covering the period that contains `on`
    pub fn new(
        name: impl Into<String>,
        category_id: CategoryId,
        category_name: impl Into<String>,
        limit: Money,
        period: BudgetPeriod,
        on: NaiveDate,
    ) -> Self {
        let range = period.range_containing(on);
        Self {
            id: BudgetId::new(),
            name: name.into(),
            category_id,
            category_name: category_name.into(),
            limit,
            period,
            start_date: range.start(),
            end_date: range.end(),
            active: true,
        }
    }

    /// The date range the limit applies to
    ///
    /// Falls back to a single day at `start_date` when the stored range is
    /// reversed; `validate` reports that case.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date).unwrap_or_else(|_| {
            DateRange::trailing_days(self.start_date, 1)
                .unwrap_or_else(|| self.period.range_containing(self.start_date))
        })
    }

    pub fn set_limit(&mut self, limit: Money) {
        self.limit = limit;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.limit.is_negative() {
            return Err(BudgetValidationError::NegativeLimit);
        }

        if self.limit.is_zero() {
            return Err(BudgetValidationError::ZeroLimit);
        }

        if self.end_date < self.start_date {
            return Err(BudgetValidationError::EndBeforeStart);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.limit, self.period)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeLimit,
    ZeroLimit,
    EndBeforeStart,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLimit => write!(f, "Budget limit cannot be negative"),
            Self::ZeroLimit => write!(f, "Budget limit cannot be zero"),
            Self::EndBeforeStart => write!(f, "Budget end date is before its start date"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_monthly_budget() {
        let budget = Budget::new(
            "Orçamento Alimentação",
            CategoryId::new(),
            "Alimentação",
            Money::from_reais(800),
            BudgetPeriod::Monthly,
            date(2024, 1, 20),
        );
        assert_eq!(budget.start_date, date(2024, 1, 1));
        assert_eq!(budget.end_date, date(2024, 1, 31));
        assert!(budget.active);
        assert_eq!(budget.range().num_days(), 31);
    }

    #[test]
    fn test_validation() {
        let mut budget = Budget::new(
            "Lazer",
            CategoryId::new(),
            "Lazer",
            Money::from_reais(300),
            BudgetPeriod::Monthly,
            date(2024, 1, 1),
        );
        assert!(budget.validate().is_ok());

        budget.set_limit(Money::zero());
        assert_eq!(budget.validate(), Err(BudgetValidationError::ZeroLimit));

        budget.set_limit(Money::from_reais(-1));
        assert_eq!(budget.validate(), Err(BudgetValidationError::NegativeLimit));

        budget.set_limit(Money::from_reais(300));
        budget.end_date = date(2023, 12, 1);
        assert_eq!(budget.validate(), Err(BudgetValidationError::EndBeforeStart));
        assert_eq!(budget.range().num_days(), 1);
    }

    #[test]
    fn test_serialization() {
        let budget = Budget::new(
            "Transporte",
            CategoryId::new(),
            "Transporte",
            Money::from_reais(400),
            BudgetPeriod::Yearly,
            date(2024, 6, 1),
        );
        let json = serde_json::to_string(&budget).unwrap();
        assert!(json.contains("\"period\":\"yearly\""));
        let back: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(budget, back);
    }
}
