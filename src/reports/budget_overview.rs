//! Budget Overview Report
//!
//! Every budget with its usage, remaining amount and status tier, plus the
//! advisor's one-line analysis of each.

use crate::advisor::{analyze_budget, BudgetAnalysis};
use crate::config::Settings;
use crate::display::{format_bar, format_percentage, status_badge, truncate, DisplayPrefs};
use crate::error::{FinanceError, FinanceResult};
use crate::metrics::{
    compute_budget_status_with, summarize_budgets, BudgetStatus, BudgetView, BudgetsOverview,
};
use crate::models::TransactionKind;
use crate::source::{FinanceSource, TransactionFilter};
use std::io::Write;

/// Budget Overview Report
#[derive(Debug, Clone)]
pub struct BudgetOverviewReport {
    /// One row per budget, in source order
    pub views: Vec<BudgetView>,
    /// Totals and status counts
    pub overview: BudgetsOverview,
    /// Advisor message per budget, aligned with `views`
    pub analyses: Vec<BudgetAnalysis>,
    prefs: DisplayPrefs,
}

impl BudgetOverviewReport {
    /// Generate the report for active budgets, or all of them with `include_inactive`
    pub fn generate(
        source: &dyn FinanceSource,
        settings: &Settings,
        include_inactive: bool,
    ) -> FinanceResult<Self> {
        let thresholds = settings.thresholds()?;
        let budgets = source.budgets(if include_inactive { None } else { Some(true) })?;
        let expenses =
            source.transactions(&TransactionFilter::new().of_kind(TransactionKind::Expense))?;

        let views = budgets
            .iter()
            .map(|budget| compute_budget_status_with(budget, &expenses, &thresholds))
            .collect::<FinanceResult<Vec<_>>>()?;
        let overview = summarize_budgets(&views);
        let analyses = views.iter().map(analyze_budget).collect();

        Ok(Self {
            views,
            overview,
            analyses,
            prefs: DisplayPrefs::from_settings(settings),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        let prefs = &self.prefs;

        output.push_str("Orçamentos\n");
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "Limite total: {}   Gasto: {}   Restante: {}\n",
            prefs.money(self.overview.total_limit),
            prefs.money(self.overview.total_spent),
            prefs.money(self.overview.total_remaining)
        ));
        output.push_str(&format!(
            "No controle: {}   Atenção: {}   Excedidos: {}\n\n",
            self.overview.good_count, self.overview.warning_count, self.overview.exceeded_count
        ));

        if self.views.is_empty() {
            output.push_str("Nenhum orçamento cadastrado.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<22} {:>14} {:>14} {:>9} {:>10}\n",
            "Categoria", "Gasto", "Limite", "Uso", "Status"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for view in &self.views {
            output.push_str(&format!(
                "{:<22} {:>14} {:>14} {:>9} {:>10}\n",
                truncate(&view.category_name, 22),
                prefs.money(view.spent),
                prefs.money(view.limit),
                format_percentage(view.usage_percentage, 2),
                status_badge(view.status)
            ));
            output.push_str(&format!(
                "  {}  {} a {}\n",
                format_bar(view.usage_percentage.min(100.0), 100.0, 30),
                prefs.date(view.start_date),
                prefs.date(view.end_date)
            ));
        }

        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "{:<22} {:>14} {:>14} {:>9}\n",
            "TOTAL",
            prefs.money(self.overview.total_spent),
            prefs.money(self.overview.total_limit),
            format_percentage(self.overview.usage_percentage(), 2)
        ));

        output.push('\n');
        for analysis in &self.analyses {
            output.push_str(&analysis.message);
            output.push('\n');
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinanceResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record([
            "Budget",
            "Category",
            "Period",
            "Start Date",
            "End Date",
            "Limit",
            "Spent",
            "Remaining",
            "Usage Percentage",
            "Status",
            "Transaction Count",
        ])
        .map_err(|e| FinanceError::Export(e.to_string()))?;

        for view in &self.views {
            csv.write_record([
                view.name.clone(),
                view.category_name.clone(),
                view.period.as_str().to_string(),
                view.start_date.to_string(),
                view.end_date.to_string(),
                view.limit.to_decimal_string(),
                view.spent.to_decimal_string(),
                view.remaining.to_decimal_string(),
                format!("{:.2}", view.usage_percentage),
                view.status.as_str().to_string(),
                view.transaction_count.to_string(),
            ])
            .map_err(|e| FinanceError::Export(e.to_string()))?;
        }

        csv.flush().map_err(|e| FinanceError::Export(e.to_string()))?;
        Ok(())
    }

    /// Budgets in the exceeded tier
    pub fn exceeded(&self) -> impl Iterator<Item = &BudgetView> {
        self.views
            .iter()
            .filter(|view| view.status == BudgetStatus::Exceeded)
    }
}
