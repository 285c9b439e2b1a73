//! Categorization commands
//!
//! Suggest categories for a free-text description, or assign categories to
//! every uncategorized transaction in the dataset.

use clap::Subcommand;
use tracing::info;

use super::Session;
use crate::categorize::{
    batch_categorize, categorize, suggest_categories, DEFAULT_BATCH_LIMIT,
    DEFAULT_SUGGESTION_LIMIT,
};
use crate::display::format_percentage;
use crate::error::{FinanceError, FinanceResult};
use crate::models::TransactionKind;

/// Categorize subcommands
#[derive(Subcommand, Debug)]
pub enum CategorizeCommands {
    /// Suggest categories for a description
    Suggest {
        /// Transaction description
        description: String,

        /// Only pick the best category of this kind (income/expense)
        #[arg(short, long)]
        kind: Option<String>,

        /// Maximum number of suggestions
        #[arg(short, long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
        limit: usize,
    },

    /// Categorize uncategorized transactions
    Batch {
        /// Maximum number of transactions to process
        #[arg(short, long, default_value_t = DEFAULT_BATCH_LIMIT)]
        limit: usize,

        /// Write the assigned categories back to the dataset file
        #[arg(long)]
        save: bool,
    },
}

/// Handle categorize commands
pub fn handle_categorize_command(
    session: &mut Session,
    cmd: CategorizeCommands,
) -> FinanceResult<()> {
    match cmd {
        CategorizeCommands::Suggest {
            description,
            kind,
            limit,
        } => handle_suggest(session, &description, kind.as_deref(), limit),
        CategorizeCommands::Batch { limit, save } => handle_batch(session, limit, save),
    }
}

fn handle_suggest(
    session: &Session,
    description: &str,
    kind: Option<&str>,
    limit: usize,
) -> FinanceResult<()> {
    let categories = &session.dataset().categories;

    if let Some(kind) = kind {
        let kind: TransactionKind = kind.parse().map_err(FinanceError::Validation)?;
        match categorize(description, kind, categories) {
            Some(found) => println!(
                "{} (confiança {})",
                found.category_name,
                format_percentage(found.confidence * 100.0, 0)
            ),
            None => println!("Nenhuma categoria encontrada para '{}'", description),
        }
        return Ok(());
    }

    let suggestions = suggest_categories(description, categories, limit);
    if suggestions.is_empty() {
        println!("Nenhuma categoria encontrada para '{}'", description);
        return Ok(());
    }

    for suggestion in suggestions {
        println!(
            "{:<16} {:<8} {:>5}  [{}]",
            suggestion.category_name,
            suggestion.kind.to_string(),
            format_percentage(suggestion.confidence * 100.0, 0),
            suggestion.matched_keywords.join(", ")
        );
    }
    Ok(())
}

fn handle_batch(session: &mut Session, limit: usize, save: bool) -> FinanceResult<()> {
    let dataset = session.source_mut().dataset_mut();
    let categories = dataset.categories.clone();
    let outcome = batch_categorize(&mut dataset.transactions, &categories, limit);

    for detail in &outcome.details {
        println!(
            "{:<40} -> {}",
            detail.description,
            detail.suggested_category.as_deref().unwrap_or("(sem sugestão)")
        );
    }
    println!();
    println!(
        "Processadas: {}   Categorizadas: {}   Sem categoria: {}",
        outcome.total_processed, outcome.categorized, outcome.uncategorized
    );

    if save && outcome.categorized > 0 {
        let path = session.save()?;
        info!(path = %path.display(), categorized = outcome.categorized, "Saved categorized transactions");
        println!("Dataset saved to: {}", path.display());
    }

    Ok(())
}
