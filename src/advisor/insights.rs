//! Financial analysis, insights and savings suggestions
//!
//! Everything here is derived from the metrics engine's output over a
//! trailing analysis window (90 days by default).

use chrono::NaiveDate;
use serde::Serialize;

use crate::display::format_percentage;
use crate::metrics::{rank_expense_categories, summarize, BudgetStatus, BudgetView, CategoryShare, Summary};
use crate::models::{Budget, BudgetId, DateRange, Goal, Money, Transaction};

/// Shown when there is nothing to analyse
pub const NO_DATA_INSIGHT: &str =
    "Não foi possível analisar suas finanças. Adicione algumas transações primeiro.";

/// A snapshot of the user's recent finances
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialAnalysis {
    pub window: DateRange,
    pub summary: Summary,
    /// Expense categories ranked by total spent
    pub expense_by_category: Vec<CategoryShare>,
    pub active_budgets: usize,
    pub pending_goals: usize,
}

impl FinancialAnalysis {
    /// Analyse the `window_days` days ending on `today` (at least one day)
    pub fn from_records(
        transactions: &[Transaction],
        budgets: &[Budget],
        goals: &[Goal],
        today: NaiveDate,
        window_days: u32,
    ) -> Self {
        let window = DateRange::trailing_days(today, window_days.max(1))
            .unwrap_or_else(|| crate::models::BudgetPeriod::Monthly.range_containing(today));
        let recent: Vec<Transaction> = transactions
            .iter()
            .filter(|txn| window.contains(txn.date))
            .cloned()
            .collect();

        Self {
            window,
            summary: summarize(&recent, None),
            expense_by_category: rank_expense_categories(&recent),
            active_budgets: budgets.iter().filter(|b| b.active).count(),
            pending_goals: goals.iter().filter(|g| !g.is_achieved()).count(),
        }
    }

    pub fn has_data(&self) -> bool {
        self.summary.transaction_count > 0
    }

    /// "nos últimos 3 meses", "nos últimos 45 dias", "no último dia"
    pub fn window_label(&self) -> String {
        match self.window.num_days() {
            1 => "no último dia".to_string(),
            30 => "no último mês".to_string(),
            days if days % 30 == 0 => format!("nos últimos {} meses", days / 30),
            days => format!("nos últimos {} dias", days),
        }
    }

    /// The category with the most spending
    pub fn highest_expense(&self) -> Option<&CategoryShare> {
        self.expense_by_category.first()
    }
}

/// Short observations for the dashboard insights card
pub fn generate_insights(analysis: &FinancialAnalysis, budget_views: &[BudgetView]) -> Vec<String> {
    if !analysis.has_data() {
        return vec![NO_DATA_INSIGHT.to_string()];
    }

    let mut insights = Vec::new();
    let balance = analysis.summary.balance;

    if balance.is_positive() {
        insights.push(format!(
            "✅ Parabéns! Você teve um saldo positivo de {} {}.",
            balance,
            analysis.window_label()
        ));
    } else {
        insights.push(format!(
            "⚠️ Atenção: Você teve um saldo negativo de {} {}.",
            balance.abs(),
            analysis.window_label()
        ));
    }

    if let Some(highest) = analysis.highest_expense() {
        insights.push(format!(
            "📊 Sua maior categoria de gastos é '{}' com {}.",
            highest.category, highest.total
        ));
    }

    for view in budget_views
        .iter()
        .filter(|v| v.active && v.status == BudgetStatus::Exceeded)
    {
        insights.push(format!(
            "⚠️ Atenção: Você ultrapassou o orçamento de '{}' em {}.",
            view.category_name,
            format_percentage(view.usage_percentage - 100.0, 2)
        ));
    }

    if analysis.active_budgets == 0 {
        insights.push("💡 Considere criar orçamentos para controlar melhor seus gastos.".to_string());
    }

    if analysis.pending_goals == 0 {
        insights.push("🎯 Que tal definir algumas metas financeiras para se motivar?".to_string());
    }

    insights
}

/// A savings or investment suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Suggestion {
    ExpenseReduction {
        category: String,
        message: String,
        potential_saving: Money,
    },
    EmergencyFund {
        message: String,
        target_amount: Money,
    },
    Investment {
        message: String,
        recommended_amount: Money,
    },
}

impl Suggestion {
    pub fn message(&self) -> &str {
        match self {
            Self::ExpenseReduction { message, .. }
            | Self::EmergencyFund { message, .. }
            | Self::Investment { message, .. } => message,
        }
    }

    /// The amount the suggestion is about
    pub fn amount(&self) -> Money {
        match self {
            Self::ExpenseReduction { potential_saving, .. } => *potential_saving,
            Self::EmergencyFund { target_amount, .. } => *target_amount,
            Self::Investment { recommended_amount, .. } => *recommended_amount,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::ExpenseReduction { .. } => "expense_reduction",
            Self::EmergencyFund { .. } => "emergency_fund",
            Self::Investment { .. } => "investment",
        }
    }
}

/// Savings suggestions derived from the analysis
///
/// - the top category costs more than 30% of income: cut it by 10-20%
///   (15% shown as the potential saving)
/// - positive balance: build an emergency fund of half the period's expenses
/// - balance above 10% of expenses: invest 70% of it
pub fn generate_suggestions(analysis: &FinancialAnalysis) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    let Summary {
        total_income,
        total_expense,
        balance,
        ..
    } = analysis.summary;

    if let Some(highest) = analysis.highest_expense() {
        if exceeds_fraction(highest.total, total_income, 3, 10) {
            suggestions.push(Suggestion::ExpenseReduction {
                category: highest.category.clone(),
                message: format!(
                    "Você gasta {} em '{}'. Considere reduzir em 10-20%.",
                    highest.total, highest.category
                ),
                potential_saving: highest.total.scale(15, 100),
            });
        }
    }

    if balance.is_positive() {
        let target = total_expense.scale(1, 2);
        suggestions.push(Suggestion::EmergencyFund {
            message: format!("Considere criar uma reserva de emergência de {}.", target),
            target_amount: target,
        });
    }

    if exceeds_fraction(balance, total_expense, 1, 10) {
        suggestions.push(Suggestion::Investment {
            message: "Você tem um bom saldo positivo. Considere investir parte em Tesouro Direto ou CDBs."
                .to_string(),
            recommended_amount: balance.scale(7, 10),
        });
    }

    suggestions
}

/// `amount > whole * num / den`, exactly
fn exceeds_fraction(amount: Money, whole: Money, num: i64, den: i64) -> bool {
    i128::from(amount.cents()) * i128::from(den) > i128::from(whole.cents()) * i128::from(num)
}

/// One budget's performance line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetAnalysis {
    pub budget_id: BudgetId,
    pub budget_name: String,
    pub category_name: String,
    pub limit: Money,
    pub spent: Money,
    pub usage_percentage: f64,
    pub status: BudgetStatus,
    pub message: String,
}

/// Describe how a budget is doing
pub fn analyze_budget(view: &BudgetView) -> BudgetAnalysis {
    let message = match view.status {
        BudgetStatus::Exceeded => format!(
            "⚠️ Orçamento de '{}' ultrapassado em {}",
            view.category_name,
            format_percentage(view.usage_percentage - 100.0, 1)
        ),
        BudgetStatus::Warning => format!(
            "⚡ Orçamento de '{}' quase no limite ({})",
            view.category_name,
            format_percentage(view.usage_percentage, 1)
        ),
        BudgetStatus::Good => format!(
            "✅ Orçamento de '{}' sob controle ({})",
            view.category_name,
            format_percentage(view.usage_percentage, 1)
        ),
    };

    BudgetAnalysis {
        budget_id: view.budget_id,
        budget_name: view.name.clone(),
        category_name: view.category_name.clone(),
        limit: view.limit,
        spent: view.spent,
        usage_percentage: view.usage_percentage,
        status: view.status,
        message,
    }
}
