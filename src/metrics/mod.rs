//! Financial metrics engine
//!
//! Pure functions that turn raw transactions, budgets and goals into the
//! display-ready aggregates every screen shows: period summaries, budget
//! usage and status, goal progress, category rankings and dense time
//! series. Nothing here does I/O or mutates its inputs, and every division
//! is guarded so no view ever carries NaN or infinity.
//!
//! Amounts are accumulated as exact centavos; floating point appears only in
//! the derived percentages.

pub mod budget;
pub mod daily;
pub mod goal;
pub mod ranking;
pub mod summary;
pub mod trend;

pub use budget::{
    compute_budget_status, compute_budget_status_with, summarize_budgets, BudgetStatus,
    BudgetView, BudgetsOverview,
};
pub use daily::{daily_spending, daily_spending_ending, DailyTotal};
pub use goal::{
    compute_goal_progress, compute_goal_progress_on, contribute, summarize_goals, GoalView,
    GoalsOverview,
};
pub use ranking::{rank_expense_categories, CategoryShare};
pub use summary::{summarize, Summary};
pub use trend::{monthly_trend, MonthlyTotals};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};

/// Usage at or above this percentage puts a budget in the warning tier
pub const WARNING_THRESHOLD_PERCENT: f64 = 80.0;

/// Usage strictly above this percentage marks a budget as exceeded
pub const EXCEEDED_THRESHOLD_PERCENT: f64 = 100.0;

/// Longest day-based window (daily series, advisor analysis): ten years
pub const MAX_WINDOW_DAYS: u32 = 3660;

/// Longest monthly trend
pub const MAX_TREND_MONTHS: u32 = 120;

/// The percentages that separate good, warning and exceeded budgets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusThresholds {
    pub warning_percent: f64,
    pub exceeded_percent: f64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            warning_percent: WARNING_THRESHOLD_PERCENT,
            exceeded_percent: EXCEEDED_THRESHOLD_PERCENT,
        }
    }
}

impl StatusThresholds {
    /// Create thresholds, rejecting non-finite values or a warning tier
    /// above the exceeded tier
    pub fn new(warning_percent: f64, exceeded_percent: f64) -> FinanceResult<Self> {
        if !warning_percent.is_finite() || !exceeded_percent.is_finite() {
            return Err(FinanceError::Config(
                "status thresholds must be finite numbers".into(),
            ));
        }
        if warning_percent < 0.0 || warning_percent > exceeded_percent {
            return Err(FinanceError::Config(format!(
                "warning threshold {} must be between 0 and the exceeded threshold {}",
                warning_percent, exceeded_percent
            )));
        }
        Ok(Self {
            warning_percent,
            exceeded_percent,
        })
    }

    /// Classify a usage percentage
    pub fn classify(&self, usage_percentage: f64) -> BudgetStatus {
        if usage_percentage > self.exceeded_percent {
            BudgetStatus::Exceeded
        } else if usage_percentage >= self.warning_percent {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Good
        }
    }
}

/// Today's local date, read once per engine call that needs it
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let thresholds = StatusThresholds::default();
        assert_eq!(thresholds.warning_percent, 80.0);
        assert_eq!(thresholds.exceeded_percent, 100.0);
    }

    #[test]
    fn test_classify_boundaries() {
        let thresholds = StatusThresholds::default();
        assert_eq!(thresholds.classify(0.0), BudgetStatus::Good);
        assert_eq!(thresholds.classify(79.99), BudgetStatus::Good);
        assert_eq!(thresholds.classify(80.0), BudgetStatus::Warning);
        assert_eq!(thresholds.classify(100.0), BudgetStatus::Warning);
        assert_eq!(thresholds.classify(100.01), BudgetStatus::Exceeded);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = StatusThresholds::new(50.0, 90.0).unwrap();
        assert_eq!(thresholds.classify(60.0), BudgetStatus::Warning);
        assert_eq!(thresholds.classify(90.5), BudgetStatus::Exceeded);
    }

    #[test]
    fn test_invalid_thresholds() {
        assert!(StatusThresholds::new(120.0, 100.0).is_err());
        assert!(StatusThresholds::new(f64::NAN, 100.0).is_err());
        assert!(StatusThresholds::new(-1.0, 100.0).is_err());
    }
}
