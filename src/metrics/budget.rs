//! Budget usage and status
//!
//! Spent amount, usage percentage, remaining amount and status are derived
//! on every call from the budget and the current transaction snapshot.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use tracing::warn;

use super::StatusThresholds;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, BudgetId, BudgetPeriod, CategoryId, Money, Transaction};

/// Status tier of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Good,
    Warning,
    Exceeded,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Exceeded => "exceeded",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => write!(f, "No controle"),
            Self::Warning => write!(f, "Atenção"),
            Self::Exceeded => write!(f, "Excedido"),
        }
    }
}

/// A budget with its derived fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetView {
    pub budget_id: BudgetId,
    pub name: String,
    pub category_id: CategoryId,
    pub category_name: String,
    pub period: BudgetPeriod,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub active: bool,
    pub limit: Money,
    /// Sum of expense magnitudes in the category within the budget range
    pub spent: Money,
    /// `spent / limit * 100`, unrounded
    pub usage_percentage: f64,
    /// `limit - spent`; negative once the budget is overspent
    pub remaining: Money,
    pub status: BudgetStatus,
    /// Number of transactions counted toward `spent`
    pub transaction_count: usize,
}

/// Derive a budget's view using the default 80% / 100% thresholds
pub fn compute_budget_status(
    budget: &Budget,
    transactions: &[Transaction],
) -> FinanceResult<BudgetView> {
    compute_budget_status_with(budget, transactions, &StatusThresholds::default())
}

/// Derive a budget's view with explicit status thresholds
///
/// Counts expense transactions whose category is the budget's category and
/// whose date lies in `[start_date, end_date]`. A non-positive limit is
/// rejected with `InvalidBudget` instead of dividing by it.
pub fn compute_budget_status_with(
    budget: &Budget,
    transactions: &[Transaction],
    thresholds: &StatusThresholds,
) -> FinanceResult<BudgetView> {
    if !budget.limit.is_positive() {
        warn!(budget = %budget.name, limit = budget.limit.cents(), "Rejected budget with non-positive limit");
        return Err(FinanceError::InvalidBudget {
            name: budget.name.clone(),
            limit_cents: budget.limit.cents(),
        });
    }

    let range = budget.range();
    let counted: Vec<&Transaction> = transactions
        .iter()
        .filter(|txn| {
            txn.is_expense()
                && txn.category_id == Some(budget.category_id)
                && range.contains(txn.date)
        })
        .collect();

    let spent: Money = counted.iter().map(|txn| txn.magnitude()).sum();
    let usage_percentage = spent.percent_of(budget.limit).unwrap_or(0.0);

    Ok(BudgetView {
        budget_id: budget.id,
        name: budget.name.clone(),
        category_id: budget.category_id,
        category_name: budget.category_name.clone(),
        period: budget.period,
        start_date: budget.start_date,
        end_date: budget.end_date,
        active: budget.active,
        limit: budget.limit,
        spent,
        usage_percentage,
        remaining: budget.limit - spent,
        status: thresholds.classify(usage_percentage),
        transaction_count: counted.len(),
    })
}

/// Totals across a set of budget views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BudgetsOverview {
    pub total_limit: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
    pub good_count: usize,
    pub warning_count: usize,
    pub exceeded_count: usize,
}

impl BudgetsOverview {
    pub fn budget_count(&self) -> usize {
        self.good_count + self.warning_count + self.exceeded_count
    }

    /// Overall usage across every budget, 0 when there is no limit at all
    pub fn usage_percentage(&self) -> f64 {
        self.total_spent.percent_of(self.total_limit).unwrap_or(0.0)
    }
}

/// Aggregate budget views for the budgets screen header cards
pub fn summarize_budgets(views: &[BudgetView]) -> BudgetsOverview {
    let mut overview = views
        .iter()
        .fold(BudgetsOverview::default(), |mut acc, view| {
            acc.total_limit += view.limit;
            acc.total_spent += view.spent;
            match view.status {
                BudgetStatus::Good => acc.good_count += 1,
                BudgetStatus::Warning => acc.warning_count += 1,
                BudgetStatus::Exceeded => acc.exceeded_count += 1,
            }
            acc
        });
    overview.total_remaining = overview.total_limit - overview.total_spent;
    overview
}
