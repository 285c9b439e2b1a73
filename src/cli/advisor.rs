//! Advisor commands: chat answers, insights and savings suggestions

use clap::Args;

use super::Session;
use crate::advisor::{
    generate_insights, generate_suggestions, respond, FinancialAnalysis, Suggestion, GREETING,
    QUICK_QUESTIONS,
};
use crate::config::Settings;
use crate::display::DisplayPrefs;
use crate::error::FinanceResult;
use crate::metrics::{compute_budget_status_with, MAX_WINDOW_DAYS};
use crate::source::TransactionFilter;

/// Arguments for `ask`
#[derive(Args, Debug, Default)]
pub struct AskArgs {
    /// The question; without one the greeting and sample questions are shown
    pub question: Vec<String>,
}

/// Arguments for `insights` and `suggest`
#[derive(Args, Debug, Default)]
pub struct InsightsArgs {
    /// Days of history to analyse (defaults to the configured window)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_WINDOW_DAYS as i64))]
    pub days: Option<u32>,
}

/// Answer a question from the scripted rule table
pub fn handle_ask_command(args: AskArgs) -> FinanceResult<()> {
    let question = args.question.join(" ");
    if question.trim().is_empty() {
        println!("{}", GREETING);
        println!();
        println!("Perguntas rápidas:");
        for q in QUICK_QUESTIONS {
            println!("  - {}", q);
        }
        return Ok(());
    }

    println!("{}", respond(&question));
    Ok(())
}

fn analyse(
    session: &Session,
    settings: &Settings,
    days: Option<u32>,
) -> FinanceResult<FinancialAnalysis> {
    let source = session.source();
    let transactions = source.transactions(&TransactionFilter::new())?;
    let budgets = source.budgets(None)?;
    let goals = source.goals(None)?;

    Ok(FinancialAnalysis::from_records(
        &transactions,
        &budgets,
        &goals,
        session.today(),
        days.unwrap_or(settings.analysis_window_days),
    ))
}

/// Print the insight lines for the analysis window
pub fn handle_insights_command(
    session: &Session,
    settings: &Settings,
    args: InsightsArgs,
) -> FinanceResult<()> {
    let analysis = analyse(session, settings, args.days)?;
    let thresholds = settings.thresholds()?;
    let transactions = session.source().transactions(&TransactionFilter::new())?;
    let views = session
        .source()
        .budgets(Some(true))?
        .iter()
        .map(|budget| compute_budget_status_with(budget, &transactions, &thresholds))
        .collect::<FinanceResult<Vec<_>>>()?;

    for insight in generate_insights(&analysis, &views) {
        println!("{}", insight);
    }
    Ok(())
}

/// Print savings and investment suggestions
pub fn handle_suggest_command(
    session: &Session,
    settings: &Settings,
    args: InsightsArgs,
) -> FinanceResult<()> {
    let analysis = analyse(session, settings, args.days)?;
    let suggestions = generate_suggestions(&analysis);
    let prefs = DisplayPrefs::from_settings(settings);

    if suggestions.is_empty() {
        println!("Nenhuma sugestão no momento.");
        return Ok(());
    }

    for suggestion in &suggestions {
        let label = match suggestion {
            Suggestion::ExpenseReduction { .. } => "Economia",
            Suggestion::EmergencyFund { .. } => "Reserva",
            Suggestion::Investment { .. } => "Investimento",
        };
        println!("[{}] {}", label, suggestion.message());
        println!("  Valor: {}", prefs.money(suggestion.amount()));
    }
    Ok(())
}
