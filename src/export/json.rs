//! JSON Export functionality
//!
//! Exports every derived view the engine produces as one versioned document.
//! Amounts are serialized as integer centavos.

use crate::config::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::metrics::{
    compute_budget_status_with, compute_goal_progress_on, daily_spending_ending, monthly_trend,
    rank_expense_categories, summarize, BudgetView, CategoryShare, DailyTotal, GoalView,
    MonthlyTotals, Summary,
};
use crate::models::{BudgetPeriod, DateRange};
use crate::source::{FinanceSource, TransactionFilter};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Every metric for one point in time
#[derive(Debug, Clone, Serialize)]
pub struct MetricsExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The date the views were computed for
    pub as_of: NaiveDate,

    /// The month `summary` and `ranking` cover
    pub month: DateRange,

    pub summary: Summary,
    pub budgets: Vec<BudgetView>,
    pub goals: Vec<GoalView>,
    pub ranking: Vec<CategoryShare>,
    pub daily: Vec<DailyTotal>,
    pub trend: Vec<MonthlyTotals>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub category_count: usize,
    pub budget_count: usize,
    pub goal_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<NaiveDate>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<NaiveDate>,
}

impl MetricsExport {
    /// Compute every view from a source as of `today`
    pub fn from_source(
        source: &dyn FinanceSource,
        settings: &Settings,
        today: NaiveDate,
    ) -> FinanceResult<Self> {
        let thresholds = settings.thresholds()?;
        let month = BudgetPeriod::Monthly.range_containing(today);

        let transactions = source.transactions(&TransactionFilter::new())?;
        let categories = source.categories(None)?;
        let budgets = source.budgets(None)?;
        let goals = source.goals(None)?;

        let month_transactions: Vec<_> = transactions
            .iter()
            .filter(|txn| month.contains(txn.date))
            .cloned()
            .collect();

        let budget_views = budgets
            .iter()
            .map(|budget| compute_budget_status_with(budget, &transactions, &thresholds))
            .collect::<FinanceResult<Vec<_>>>()?;
        let goal_views = goals
            .iter()
            .map(|goal| compute_goal_progress_on(goal, today))
            .collect::<FinanceResult<Vec<_>>>()?;

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            category_count: categories.len(),
            budget_count: budgets.len(),
            goal_count: goals.len(),
            earliest_transaction: transactions.iter().map(|t| t.date).min(),
            latest_transaction: transactions.iter().map(|t| t.date).max(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            as_of: today,
            month,
            summary: summarize(&month_transactions, None),
            ranking: rank_expense_categories(&month_transactions),
            daily: daily_spending_ending(&transactions, settings.daily_window_days, today),
            trend: monthly_trend(&transactions, settings.trend_months, today),
            budgets: budget_views,
            goals: goal_views,
            metadata,
        })
    }
}

/// Export the metrics bundle to JSON
pub fn export_metrics_json<W: Write>(
    export: &MetricsExport,
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}
