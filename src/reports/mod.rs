//! Reports module for FinanceFlow
//!
//! Terminal renderings of the metrics engine's views: the dashboard, budget
//! overview, spending by category, goal progress and the time series.

pub mod budget_overview;
pub mod dashboard;
pub mod goals;
pub mod spending;
pub mod trend;

pub use budget_overview::BudgetOverviewReport;
pub use dashboard::DashboardReport;
pub use goals::GoalsReport;
pub use spending::SpendingReport;
pub use trend::{DailySpendingReport, MonthlyTrendReport};
