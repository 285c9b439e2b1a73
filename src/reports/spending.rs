//! Spending Report
//!
//! Expense ranking by category for a date range, with the period's income
//! and balance for context.

use crate::config::Settings;
use crate::display::{format_bar, format_percentage, truncate, DisplayPrefs};
use crate::error::{FinanceError, FinanceResult};
use crate::metrics::{rank_expense_categories, summarize, CategoryShare, Summary};
use crate::models::DateRange;
use crate::source::{FinanceSource, TransactionFilter};
use std::io::Write;

/// Spending Report
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Inclusive range the report covers
    pub range: DateRange,
    /// Income, expense and balance within the range
    pub summary: Summary,
    /// Expense categories, highest total first
    pub categories: Vec<CategoryShare>,
    prefs: DisplayPrefs,
}

impl SpendingReport {
    /// Generate a spending report for a date range
    pub fn generate(
        source: &dyn FinanceSource,
        settings: &Settings,
        range: DateRange,
    ) -> FinanceResult<Self> {
        let transactions = source.transactions(&TransactionFilter::new().in_range(range))?;

        Ok(Self {
            range,
            summary: summarize(&transactions, None),
            categories: rank_expense_categories(&transactions),
            prefs: DisplayPrefs::from_settings(settings),
        })
    }

    /// Keep only the `limit` largest categories
    pub fn truncate_to(&mut self, limit: usize) {
        self.categories.truncate(limit);
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        let prefs = &self.prefs;

        output.push_str(&format!(
            "Gastos por categoria: {} a {}\n",
            prefs.date(self.range.start()),
            prefs.date(self.range.end())
        ));
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!("Receitas: {}\n", prefs.money(self.summary.total_income)));
        output.push_str(&format!("Despesas: {}\n", prefs.money(self.summary.total_expense)));
        output.push_str(&format!("Saldo:    {}\n\n", prefs.money(self.summary.balance)));

        if self.categories.is_empty() {
            output.push_str("Nenhuma despesa no período.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<24} {:>14} {:>6} {:>8}  {}\n",
            "Categoria", "Total", "Qtd", "%", ""
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        let max_share = self
            .categories
            .iter()
            .map(|c| c.percentage_of_total)
            .fold(0.0, f64::max);

        for share in &self.categories {
            output.push_str(&format!(
                "{:<24} {:>14} {:>6} {:>8}  {}\n",
                truncate(&share.category, 24),
                prefs.money(share.total),
                share.transaction_count,
                format_percentage(share.percentage_of_total, 1),
                format_bar(share.percentage_of_total, max_share, 20)
            ));
        }

        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "TOTAL DE DESPESAS",
            prefs.money(self.summary.total_expense)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinanceResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record([
            "Start Date",
            "End Date",
            "Category",
            "Amount",
            "Transaction Count",
            "Percentage",
        ])
        .map_err(|e| FinanceError::Export(e.to_string()))?;

        let start = self.range.start().to_string();
        let end = self.range.end().to_string();

        for share in &self.categories {
            csv.write_record([
                start.as_str(),
                end.as_str(),
                share.category.as_str(),
                share.total.to_decimal_string().as_str(),
                share.transaction_count.to_string().as_str(),
                format!("{:.2}", share.percentage_of_total).as_str(),
            ])
            .map_err(|e| FinanceError::Export(e.to_string()))?;
        }

        let expense_count: usize = self.categories.iter().map(|c| c.transaction_count).sum();
        let total_percentage = if self.categories.is_empty() { "0.00" } else { "100.00" };
        csv.write_record([
            start.as_str(),
            end.as_str(),
            "TOTAL",
            self.summary.total_expense.to_decimal_string().as_str(),
            expense_count.to_string().as_str(),
            total_percentage,
        ])
        .map_err(|e| FinanceError::Export(e.to_string()))?;

        csv.flush().map_err(|e| FinanceError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, Money, UNCATEGORIZED};
    use crate::source::{demo_dataset, InMemorySource};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    fn current_month_report() -> SpendingReport {
        let source = InMemorySource::new(demo_dataset(today()));
        let range = BudgetPeriod::Monthly.range_containing(today());
        SpendingReport::generate(&source, &Settings::default(), range).unwrap()
    }

    #[test]
    fn test_generate_spending_report() {
        let report = current_month_report();

        assert_eq!(report.summary.total_income, Money::from_reais(5500));
        assert_eq!(report.summary.total_expense, Money::from_reais(4200));

        assert_eq!(report.categories[0].category, "Moradia");
        assert_eq!(report.categories[0].total, Money::from_reais(2000));

        let total: f64 = report.categories.iter().map(|c| c.percentage_of_total).sum();
        assert!((total - 100.0).abs() < 1e-9);

        let uncategorized = report
            .categories
            .iter()
            .find(|c| c.category == UNCATEGORIZED)
            .unwrap();
        assert_eq!(uncategorized.total, Money::from_reais(570));
    }

    #[test]
    fn test_truncate_to() {
        let mut report = current_month_report();
        report.truncate_to(2);
        assert_eq!(report.categories.len(), 2);
    }

    #[test]
    fn test_format_terminal() {
        let output = current_month_report().format_terminal();

        assert!(output.contains("01/01/2024 a 31/01/2024"));
        assert!(output.contains("Moradia"));
        assert!(output.contains("R$ 4.200,00"));
    }

    #[test]
    fn test_empty_range() {
        let source = InMemorySource::new(demo_dataset(today()));
        let range = DateRange::month(2030, 1).unwrap();
        let report = SpendingReport::generate(&source, &Settings::default(), range).unwrap();

        assert!(report.categories.is_empty());
        assert!(report.format_terminal().contains("Nenhuma despesa"));
    }

    #[test]
    fn test_export_csv() {
        let report = current_month_report();

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert!(csv.starts_with("Start Date,End Date,Category,Amount"));
        assert!(csv.contains("2024-01-01,2024-01-31,Moradia,2000.00,"));
        assert!(csv.contains("TOTAL,4200.00,"));
    }
}
