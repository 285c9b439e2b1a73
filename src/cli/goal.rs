//! Goal contribution command

use clap::Args;
use tracing::info;

use super::Session;
use crate::config::Settings;
use crate::display::{goal_time_label, DisplayPrefs};
use crate::error::{FinanceError, FinanceResult};
use crate::metrics::compute_goal_progress_on;
use crate::models::Money;
use crate::source::FinanceSource;

/// Arguments for `contribute`
#[derive(Args, Debug)]
pub struct ContributeArgs {
    /// Goal name or ID
    pub goal: String,

    /// Amount to add (e.g., "200", "150,50", "R$ 75")
    pub amount: String,

    /// Write the updated goal back to the dataset file
    #[arg(long)]
    pub save: bool,
}

/// Add money to a goal and show its new progress
pub fn handle_contribute_command(
    session: &mut Session,
    settings: &Settings,
    args: ContributeArgs,
) -> FinanceResult<()> {
    let amount = Money::parse(&args.amount)
        .map_err(|e| FinanceError::Validation(e.to_string()))?;
    let goal_id = session.dataset().find_goal(&args.goal)?.id;

    let updated = session.source_mut().contribute(goal_id, amount)?;
    let view = compute_goal_progress_on(&updated, session.today())?;
    let prefs = DisplayPrefs::from_settings(settings);

    println!("Contribuição de {} registrada em '{}'", prefs.money(amount), view.name);
    println!(
        "  {} de {} ({}%) - {}",
        prefs.money(view.current_amount),
        prefs.money(view.target_amount),
        view.progress_percentage,
        goal_time_label(&view)
    );
    if view.achieved {
        println!("  Meta atingida!");
    }

    if args.save {
        let path = session.save()?;
        info!(path = %path.display(), "Saved contribution");
        println!("Dataset saved to: {}", path.display());
    }

    Ok(())
}
