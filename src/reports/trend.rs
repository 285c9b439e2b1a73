//! Time series reports: daily spending and the monthly income/expense trend

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::{format_bar, DisplayPrefs};
use crate::error::{FinanceError, FinanceResult};
use crate::metrics::{daily_spending_ending, monthly_trend, DailyTotal, MonthlyTotals};
use crate::source::{FinanceSource, TransactionFilter};
use std::io::Write;

/// Spending per day over a trailing window
#[derive(Debug, Clone)]
pub struct DailySpendingReport {
    pub series: Vec<DailyTotal>,
    prefs: DisplayPrefs,
}

impl DailySpendingReport {
    /// `window_days` defaults to the configured daily window
    pub fn generate(
        source: &dyn FinanceSource,
        settings: &Settings,
        window_days: Option<u32>,
        today: NaiveDate,
    ) -> FinanceResult<Self> {
        let transactions = source.transactions(&TransactionFilter::new())?;
        let window = window_days.unwrap_or(settings.daily_window_days);

        Ok(Self {
            series: daily_spending_ending(&transactions, window, today),
            prefs: DisplayPrefs::from_settings(settings),
        })
    }

    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Gastos diários ({} dias)\n", self.series.len()));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        let max = self
            .series
            .iter()
            .map(|day| day.total.cents())
            .max()
            .unwrap_or(0);

        for day in &self.series {
            output.push_str(&format!(
                "{:<12} {:>14}  {}\n",
                self.prefs.date(day.date),
                self.prefs.money(day.total),
                format_bar(day.total.cents() as f64, max as f64, 25)
            ));
        }

        output
    }

    /// Export the series to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinanceResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Date", "Total"])
            .map_err(|e| FinanceError::Export(e.to_string()))?;
        for day in &self.series {
            csv.write_record([day.date.to_string(), day.total.to_decimal_string()])
                .map_err(|e| FinanceError::Export(e.to_string()))?;
        }
        csv.flush().map_err(|e| FinanceError::Export(e.to_string()))?;
        Ok(())
    }
}

/// Income, expense and balance per calendar month
#[derive(Debug, Clone)]
pub struct MonthlyTrendReport {
    pub months: Vec<MonthlyTotals>,
    prefs: DisplayPrefs,
}

impl MonthlyTrendReport {
    /// `months` defaults to the configured trend length
    pub fn generate(
        source: &dyn FinanceSource,
        settings: &Settings,
        months: Option<u32>,
        today: NaiveDate,
    ) -> FinanceResult<Self> {
        let transactions = source.transactions(&TransactionFilter::new())?;
        let months = months.unwrap_or(settings.trend_months);

        Ok(Self {
            months: monthly_trend(&transactions, months, today),
            prefs: DisplayPrefs::from_settings(settings),
        })
    }

    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        let prefs = &self.prefs;

        output.push_str("Receitas x Despesas por mês\n");
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>16} {:>16} {:>16} {:>8}\n",
            "Mês", "Receitas", "Despesas", "Saldo", "Qtd"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for month in &self.months {
            output.push_str(&format!(
                "{:<10} {:>16} {:>16} {:>16} {:>8}\n",
                month.label(),
                prefs.money(month.summary.total_income),
                prefs.money(month.summary.total_expense),
                prefs.money(month.summary.balance),
                month.summary.transaction_count
            ));
        }

        output
    }

    /// Export the trend to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinanceResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Month", "Income", "Expense", "Balance", "Transaction Count"])
            .map_err(|e| FinanceError::Export(e.to_string()))?;
        for month in &self.months {
            csv.write_record([
                month.label(),
                month.summary.total_income.to_decimal_string(),
                month.summary.total_expense.to_decimal_string(),
                month.summary.balance.to_decimal_string(),
                month.summary.transaction_count.to_string(),
            ])
            .map_err(|e| FinanceError::Export(e.to_string()))?;
        }
        csv.flush().map_err(|e| FinanceError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::source::{demo_dataset, InMemorySource};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    fn source() -> InMemorySource {
        InMemorySource::new(demo_dataset(today()))
    }

    #[test]
    fn test_daily_report_uses_configured_window() {
        let report = DailySpendingReport::generate(&source(), &Settings::default(), None, today())
            .unwrap();

        assert_eq!(report.series.len(), 14);
        assert_eq!(report.series.last().unwrap().date, today());
        // Nothing was spent on the 20th
        assert_eq!(report.series.last().unwrap().total, Money::zero());
    }

    #[test]
    fn test_daily_report_explicit_window() {
        let report =
            DailySpendingReport::generate(&source(), &Settings::default(), Some(3), today())
                .unwrap();
        assert_eq!(report.series.len(), 3);

        let output = report.format_terminal();
        assert!(output.contains("Gastos diários (3 dias)"));
        assert!(output.contains("20/01/2024"));
    }

    #[test]
    fn test_monthly_trend_report() {
        let report = MonthlyTrendReport::generate(&source(), &Settings::default(), None, today())
            .unwrap();

        assert_eq!(report.months.len(), 6);
        assert_eq!(report.months[5].label(), "2024-01");
        assert_eq!(report.months[4].summary.total_income, Money::from_reais(5500));
        assert_eq!(report.months[4].summary.total_expense, Money::from_reais(4200));

        let output = report.format_terminal();
        assert!(output.contains("2023-12"));
    }

    #[test]
    fn test_monthly_trend_csv() {
        let report = MonthlyTrendReport::generate(&source(), &Settings::default(), Some(2), today())
            .unwrap();

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert!(csv.starts_with("Month,Income,Expense,Balance,Transaction Count"));
        assert!(csv.contains("2024-01,5500.00,4200.00,1300.00,18"));
    }
}
