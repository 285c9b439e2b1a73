//! Dashboard Report
//!
//! The home screen in text form: this month's summary, budget alerts, goal
//! progress, the largest expense categories and the advisor's insights.

use chrono::NaiveDate;

use crate::advisor::{generate_insights, FinancialAnalysis};
use crate::config::Settings;
use crate::display::{format_percentage, goal_time_label, status_badge, truncate, DisplayPrefs};
use crate::error::FinanceResult;
use crate::metrics::{
    compute_budget_status_with, compute_goal_progress_on, rank_expense_categories, summarize,
    BudgetStatus, BudgetView, CategoryShare, GoalView, Summary,
};
use crate::models::{BudgetPeriod, DateRange};
use crate::source::{FinanceSource, TransactionFilter};

/// Categories listed in the spending card
const TOP_CATEGORIES: usize = 5;

/// Dashboard Report
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub as_of: NaiveDate,
    pub month: DateRange,
    pub summary: Summary,
    pub budgets: Vec<BudgetView>,
    pub goals: Vec<GoalView>,
    pub top_categories: Vec<CategoryShare>,
    pub insights: Vec<String>,
    prefs: DisplayPrefs,
}

impl DashboardReport {
    pub fn generate(
        source: &dyn FinanceSource,
        settings: &Settings,
        today: NaiveDate,
    ) -> FinanceResult<Self> {
        let thresholds = settings.thresholds()?;
        let month = BudgetPeriod::Monthly.range_containing(today);

        let all_transactions = source.transactions(&TransactionFilter::new())?;
        let month_transactions: Vec<_> = all_transactions
            .iter()
            .filter(|txn| month.contains(txn.date))
            .cloned()
            .collect();

        let budgets = source.budgets(Some(true))?;
        let budget_views = budgets
            .iter()
            .map(|budget| compute_budget_status_with(budget, &all_transactions, &thresholds))
            .collect::<FinanceResult<Vec<_>>>()?;

        let goals = source.goals(None)?;
        let goal_views = goals
            .iter()
            .map(|goal| compute_goal_progress_on(goal, today))
            .collect::<FinanceResult<Vec<_>>>()?;

        let analysis = FinancialAnalysis::from_records(
            &all_transactions,
            &budgets,
            &goals,
            today,
            settings.analysis_window_days,
        );

        let mut top_categories = rank_expense_categories(&month_transactions);
        top_categories.truncate(TOP_CATEGORIES);

        Ok(Self {
            as_of: today,
            month,
            summary: summarize(&month_transactions, None),
            insights: generate_insights(&analysis, &budget_views),
            budgets: budget_views,
            goals: goal_views,
            top_categories,
            prefs: DisplayPrefs::from_settings(settings),
        })
    }

    /// Budgets in the warning or exceeded tier
    pub fn alerts(&self) -> impl Iterator<Item = &BudgetView> {
        self.budgets
            .iter()
            .filter(|view| view.status != BudgetStatus::Good)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        let prefs = &self.prefs;

        output.push_str(&format!(
            "FinanceFlow - {} a {}\n",
            prefs.date(self.month.start()),
            prefs.date(self.month.end())
        ));
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "Receitas: {}   Despesas: {}   Saldo: {}\n",
            prefs.money(self.summary.total_income),
            prefs.money(self.summary.total_expense),
            prefs.money(self.summary.balance)
        ));
        if let Some(rate) = self.summary.savings_rate() {
            output.push_str(&format!("Taxa de poupança: {}\n", format_percentage(rate, 1)));
        }

        output.push_str("\nMaiores gastos do mês\n");
        output.push_str(&"-".repeat(80));
        output.push('\n');
        if self.top_categories.is_empty() {
            output.push_str("  Nenhuma despesa registrada.\n");
        }
        for share in &self.top_categories {
            output.push_str(&format!(
                "  {:<28} {:>14} {:>8}\n",
                truncate(&share.category, 28),
                prefs.money(share.total),
                format_percentage(share.percentage_of_total, 1)
            ));
        }

        output.push_str("\nAlertas de orçamento\n");
        output.push_str(&"-".repeat(80));
        output.push('\n');
        let mut any_alert = false;
        for view in self.alerts() {
            any_alert = true;
            output.push_str(&format!(
                "  {:<28} {:>14} de {:<14} {:>8} {}\n",
                truncate(&view.category_name, 28),
                prefs.money(view.spent),
                prefs.money(view.limit),
                format_percentage(view.usage_percentage, 1),
                status_badge(view.status)
            ));
        }
        if !any_alert {
            output.push_str("  Todos os orçamentos sob controle.\n");
        }

        output.push_str("\nMetas\n");
        output.push_str(&"-".repeat(80));
        output.push('\n');
        if self.goals.is_empty() {
            output.push_str("  Nenhuma meta cadastrada.\n");
        }
        for view in &self.goals {
            output.push_str(&format!(
                "  {:<28} {:>4}%  {}\n",
                truncate(&view.name, 28),
                view.progress_percentage,
                goal_time_label(view)
            ));
        }

        output.push_str("\nInsights\n");
        output.push_str(&"-".repeat(80));
        output.push('\n');
        for insight in &self.insights {
            output.push_str(&format!("  {}\n", insight));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::source::{demo_dataset, Dataset, InMemorySource};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    #[test]
    fn test_generate_dashboard() {
        let source = InMemorySource::new(demo_dataset(today()));
        let report = DashboardReport::generate(&source, &Settings::default(), today()).unwrap();

        assert_eq!(report.summary.balance, Money::from_reais(1300));
        assert_eq!(report.top_categories.len(), 5);
        assert_eq!(report.top_categories[0].category, "Moradia");
        assert_eq!(report.alerts().count(), 3);
        assert_eq!(report.goals.len(), 3);
        assert!(report.insights[0].starts_with("✅"));
    }

    #[test]
    fn test_format_terminal() {
        let source = InMemorySource::new(demo_dataset(today()));
        let output = DashboardReport::generate(&source, &Settings::default(), today())
            .unwrap()
            .format_terminal();

        assert!(output.contains("01/01/2024 a 31/01/2024"));
        assert!(output.contains("Saldo: R$ 1.300,00"));
        assert!(output.contains("Maiores gastos do mês"));
        assert!(output.contains("EXCEDIDO"));
        assert!(output.contains("Viagem para Europa"));
    }

    #[test]
    fn test_empty_dataset() {
        let source = InMemorySource::new(Dataset::default());
        let report = DashboardReport::generate(&source, &Settings::default(), today()).unwrap();

        assert_eq!(report.summary, Summary::default());
        assert_eq!(report.alerts().count(), 0);
        assert_eq!(report.insights.len(), 1);

        let output = report.format_terminal();
        assert!(output.contains("Nenhuma despesa registrada."));
        assert!(output.contains("Todos os orçamentos sob controle."));
        assert!(output.contains("Nenhuma meta cadastrada."));
    }
}
