//! CLI commands for the metric views and reports
//!
//! Summary, budgets, goals, category ranking, daily series, monthly trend
//! and the dashboard. Table-shaped views can also be written to CSV.

use clap::Args;
use std::path::PathBuf;

use super::{create_output, Session};
use crate::config::Settings;
use crate::display::{format_percentage, DisplayPrefs};
use crate::error::{FinanceError, FinanceResult};
use crate::metrics::{summarize, MAX_TREND_MONTHS, MAX_WINDOW_DAYS};
use crate::models::{BudgetPeriod, DateRange, TransactionKind};
use crate::reports::{
    BudgetOverviewReport, DailySpendingReport, DashboardReport, GoalsReport, MonthlyTrendReport,
    SpendingReport,
};
use crate::source::TransactionFilter;

/// Arguments for `summary`
#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Month ("2025-01") or range ("2025-01-01..2025-03-31"); defaults to the current month
    #[arg(short, long)]
    pub period: Option<String>,

    /// Summarize every transaction regardless of date
    #[arg(long, conflicts_with = "period")]
    pub all: bool,
}

/// Arguments for `budgets`
#[derive(Args, Debug, Default)]
pub struct BudgetsArgs {
    /// Include inactive budgets
    #[arg(short, long)]
    pub all: bool,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `goals`
#[derive(Args, Debug, Default)]
pub struct GoalsArgs {
    /// Show only goals still in progress
    #[arg(long, conflicts_with = "achieved")]
    pub pending: bool,

    /// Show only achieved goals
    #[arg(long)]
    pub achieved: bool,
}

/// Arguments for `categories`
#[derive(Args, Debug, Default)]
pub struct CategoriesArgs {
    /// Month ("2025-01") or range ("2025-01-01..2025-03-31"); defaults to the current month
    #[arg(short, long)]
    pub period: Option<String>,

    /// Show top N categories only
    #[arg(long)]
    pub top: Option<usize>,

    /// List the category records instead of the spending ranking
    #[arg(long)]
    pub list: bool,

    /// With --list, only categories of this kind (income/expense)
    #[arg(long, requires = "list")]
    pub kind: Option<String>,

    /// Export the ranking to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `daily`
#[derive(Args, Debug, Default)]
pub struct DailyArgs {
    /// Number of days, ending today (defaults to the configured window)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_WINDOW_DAYS as i64))]
    pub days: Option<u32>,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `trend`
#[derive(Args, Debug, Default)]
pub struct TrendArgs {
    /// Number of months, ending with the current one (defaults to the configured length)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_TREND_MONTHS as i64))]
    pub months: Option<u32>,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn resolve_period(period: Option<&str>, session: &Session) -> FinanceResult<DateRange> {
    match period {
        Some(p) => DateRange::parse(p).map_err(|e| {
            FinanceError::Validation(format!(
                "{}. Use YYYY-MM (e.g., 2025-01) or YYYY-MM-DD..YYYY-MM-DD",
                e
            ))
        }),
        None => Ok(BudgetPeriod::Monthly.range_containing(session.today())),
    }
}

/// Print income, expenses and balance for a period
pub fn handle_summary_command(
    session: &Session,
    settings: &Settings,
    args: SummaryArgs,
) -> FinanceResult<()> {
    let prefs = DisplayPrefs::from_settings(settings);
    let (label, filter) = if args.all {
        ("Todo o período".to_string(), TransactionFilter::new())
    } else {
        let range = resolve_period(args.period.as_deref(), session)?;
        (
            format!("{} a {}", prefs.date(range.start()), prefs.date(range.end())),
            TransactionFilter::new().in_range(range),
        )
    };

    let transactions = session.source().transactions(&filter)?;
    let summary = summarize(&transactions, None);

    println!("Resumo: {}", label);
    println!("{}", "=".repeat(40));
    println!("{:<16} {:>20}", "Receitas:", prefs.money(summary.total_income));
    println!("{:<16} {:>20}", "Despesas:", prefs.money(summary.total_expense));
    println!("{:<16} {:>20}", "Saldo:", prefs.money(summary.balance));
    println!("{:<16} {:>20}", "Transações:", summary.transaction_count);
    if let Some(rate) = summary.savings_rate() {
        println!("{:<16} {:>20}", "Poupança:", format_percentage(rate, 1));
    }

    Ok(())
}

/// Show every budget with usage and status
pub fn handle_budgets_command(
    session: &Session,
    settings: &Settings,
    args: BudgetsArgs,
) -> FinanceResult<()> {
    let report = BudgetOverviewReport::generate(session.source(), settings, args.all)?;

    if let Some(path) = args.output {
        let mut writer = create_output(&path)?;
        report.export_csv(&mut writer)?;
        println!("Budget report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

/// Show goal progress
pub fn handle_goals_command(
    session: &Session,
    settings: &Settings,
    args: GoalsArgs,
) -> FinanceResult<()> {
    let achieved = match (args.pending, args.achieved) {
        (true, _) => Some(false),
        (_, true) => Some(true),
        _ => None,
    };
    let report = GoalsReport::generate(session.source(), settings, achieved, session.today())?;
    println!("{}", report.format_terminal());
    Ok(())
}

/// Show the expense ranking, or list category records with `--list`
pub fn handle_categories_command(
    session: &Session,
    settings: &Settings,
    args: CategoriesArgs,
) -> FinanceResult<()> {
    if args.list {
        let kind = args
            .kind
            .as_deref()
            .map(|k| k.parse::<TransactionKind>().map_err(FinanceError::Validation))
            .transpose()?;
        return list_categories(session, kind);
    }

    let range = resolve_period(args.period.as_deref(), session)?;
    let mut report = SpendingReport::generate(session.source(), settings, range)?;
    if let Some(top) = args.top {
        report.truncate_to(top);
    }

    if let Some(path) = args.output {
        let mut writer = create_output(&path)?;
        report.export_csv(&mut writer)?;
        println!("Spending report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

fn list_categories(session: &Session, kind: Option<TransactionKind>) -> FinanceResult<()> {
    let categories = session.source().categories(kind)?;
    if categories.is_empty() {
        println!("Nenhuma categoria cadastrada.");
        return Ok(());
    }

    println!("{:<20} {:<8} {:<8} Descrição", "Categoria", "Tipo", "Cor");
    println!("{}", "-".repeat(60));
    for category in categories {
        println!(
            "{:<20} {:<8} {:<8} {}",
            category.name,
            category.kind.to_string(),
            category.color.as_deref().unwrap_or("-"),
            category.description.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

/// Show the dense daily spending series
pub fn handle_daily_command(
    session: &Session,
    settings: &Settings,
    args: DailyArgs,
) -> FinanceResult<()> {
    let report =
        DailySpendingReport::generate(session.source(), settings, args.days, session.today())?;

    if let Some(path) = args.output {
        let mut writer = create_output(&path)?;
        report.export_csv(&mut writer)?;
        println!("Daily spending exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

/// Show income and expense per month
pub fn handle_trend_command(
    session: &Session,
    settings: &Settings,
    args: TrendArgs,
) -> FinanceResult<()> {
    let report =
        MonthlyTrendReport::generate(session.source(), settings, args.months, session.today())?;

    if let Some(path) = args.output {
        let mut writer = create_output(&path)?;
        report.export_csv(&mut writer)?;
        println!("Monthly trend exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

/// Show the dashboard
pub fn handle_dashboard_command(session: &Session, settings: &Settings) -> FinanceResult<()> {
    let report = DashboardReport::generate(session.source(), settings, session.today())?;
    println!("{}", report.format_terminal());
    Ok(())
}
