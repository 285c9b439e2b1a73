//! CSV Export functionality
//!
//! Flat tables for spreadsheets: raw transactions, budget views and goal
//! views. Amounts are written as decimal reais with a dot separator.

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::MetricsExport;
use crate::models::Transaction;
use std::io::Write;

fn export_error(e: csv::Error) -> FinanceError {
    FinanceError::Export(e.to_string())
}

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> FinanceResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["ID", "Date", "Description", "Kind", "Category", "Amount"])
        .map_err(export_error)?;

    for txn in transactions {
        csv.write_record([
            txn.id.to_string(),
            txn.date.to_string(),
            txn.description.clone(),
            txn.kind.as_str().to_string(),
            txn.category_label().to_string(),
            txn.magnitude().to_decimal_string(),
        ])
        .map_err(export_error)?;
    }

    csv.flush().map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}

/// Export budget views to CSV
pub fn export_budgets_csv<W: Write>(export: &MetricsExport, writer: &mut W) -> FinanceResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "Budget",
        "Category",
        "Start Date",
        "End Date",
        "Limit",
        "Spent",
        "Remaining",
        "Usage Percentage",
        "Status",
    ])
    .map_err(export_error)?;

    for view in &export.budgets {
        csv.write_record([
            view.name.clone(),
            view.category_name.clone(),
            view.start_date.to_string(),
            view.end_date.to_string(),
            view.limit.to_decimal_string(),
            view.spent.to_decimal_string(),
            view.remaining.to_decimal_string(),
            format!("{:.2}", view.usage_percentage),
            view.status.as_str().to_string(),
        ])
        .map_err(export_error)?;
    }

    csv.flush().map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}

/// Export goal views to CSV
pub fn export_goals_csv<W: Write>(export: &MetricsExport, writer: &mut W) -> FinanceResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "Goal",
        "Target",
        "Current",
        "Remaining",
        "Progress",
        "Target Date",
        "Days Remaining",
        "Achieved",
    ])
    .map_err(export_error)?;

    for view in &export.goals {
        csv.write_record([
            view.name.clone(),
            view.target_amount.to_decimal_string(),
            view.current_amount.to_decimal_string(),
            view.amount_remaining.to_decimal_string(),
            view.progress_percentage.to_string(),
            view.target_date.to_string(),
            view.days_remaining.to_string(),
            view.achieved.to_string(),
        ])
        .map_err(export_error)?;
    }

    csv.flush().map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Money;
    use crate::source::{demo_dataset, InMemorySource};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    fn export() -> MetricsExport {
        let source = InMemorySource::new(demo_dataset(today()));
        MetricsExport::from_source(&source, &Settings::default(), today()).unwrap()
    }

    #[test]
    fn test_export_transactions_quotes_commas() {
        let txn = Transaction::expense("Padaria, café", Money::from_cents(1250), today());

        let mut buffer = Vec::new();
        export_transactions_csv(&[txn], &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert!(csv.contains("\"Padaria, café\",expense,Sem categoria,12.50"));
    }

    #[test]
    fn test_export_budgets() {
        let mut buffer = Vec::new();
        export_budgets_csv(&export(), &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert_eq!(csv.lines().count(), 4);
        assert!(csv.contains("Lazer,2024-01-01,2024-01-31,300.00,380.00,-80.00,126.67,exceeded"));
    }

    #[test]
    fn test_export_goals() {
        let mut buffer = Vec::new();
        export_goals_csv(&export(), &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert!(csv.contains("Notebook Novo,3500.00,3500.00,0.00,100,"));
        assert!(csv.contains("Viagem para Europa,8000.00,2400.00,5600.00,30,2024-05-19,120,false"));
    }
}
