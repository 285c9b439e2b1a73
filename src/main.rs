use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use financeflow::cli::{
    handle_ask_command, handle_budgets_command, handle_categories_command,
    handle_categorize_command, handle_config_command, handle_contribute_command,
    handle_daily_command, handle_dashboard_command, handle_export_command, handle_goals_command,
    handle_insights_command, handle_suggest_command, handle_summary_command, handle_trend_command,
    AskArgs, BudgetsArgs, CategoriesArgs, CategorizeCommands, ConfigCommands, ContributeArgs,
    DailyArgs, ExportCommands, GoalsArgs, InsightsArgs, Session, SummaryArgs, TrendArgs,
};
use financeflow::config::{FinancePaths, Settings};

#[derive(Parser)]
#[command(
    name = "financeflow",
    version,
    about = "Personal finance metrics from the command line",
    long_about = "FinanceFlow turns your transactions, budgets and goals into \
                  summaries, budget alerts, goal progress, spending rankings and \
                  savings advice."
)]
struct Cli {
    /// Dataset file (JSON); defaults to finance.json in the data directory
    #[arg(long, global = true, env = "FINANCEFLOW_DATA")]
    data: Option<PathBuf>,

    /// Use the built-in demonstration dataset
    #[arg(long, global = true)]
    demo: bool,

    /// Compute everything as if today were this date (YYYY-MM-DD)
    #[arg(long, global = true, value_name = "DATE")]
    as_of: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income, expenses and balance for a period
    Summary(SummaryArgs),

    /// Budget usage and status
    #[command(alias = "budget")]
    Budgets(BudgetsArgs),

    /// Goal progress
    #[command(alias = "goal")]
    Goals(GoalsArgs),

    /// Add money to a goal
    Contribute(ContributeArgs),

    /// Spending ranking by category
    Categories(CategoriesArgs),

    /// Spending per day
    Daily(DailyArgs),

    /// Income and expenses per month
    Trend(TrendArgs),

    /// Overview of the current month
    #[command(alias = "home")]
    Dashboard,

    /// Ask the financial advisor a question
    Ask(AskArgs),

    /// Observations about recent finances
    Insights(InsightsArgs),

    /// Savings and investment suggestions
    Suggest(InsightsArgs),

    /// Keyword-based transaction categorization
    #[command(subcommand)]
    Categorize(CategorizeCommands),

    /// Export metrics to JSON, YAML or CSV
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = FinancePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(Commands::Config(cmd)) => {
            handle_config_command(&paths, &mut settings, cmd)?;
            return Ok(());
        }
        Some(Commands::Ask(args)) => {
            handle_ask_command(args)?;
            return Ok(());
        }
        other => other,
    };

    let today = cli.as_of.unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut session = Session::open(&paths, cli.data, cli.demo, today)?;

    match command {
        Some(Commands::Summary(args)) => handle_summary_command(&session, &settings, args)?,
        Some(Commands::Budgets(args)) => handle_budgets_command(&session, &settings, args)?,
        Some(Commands::Goals(args)) => handle_goals_command(&session, &settings, args)?,
        Some(Commands::Contribute(args)) => {
            handle_contribute_command(&mut session, &settings, args)?
        }
        Some(Commands::Categories(args)) => {
            handle_categories_command(&session, &settings, args)?
        }
        Some(Commands::Daily(args)) => handle_daily_command(&session, &settings, args)?,
        Some(Commands::Trend(args)) => handle_trend_command(&session, &settings, args)?,
        Some(Commands::Insights(args)) => handle_insights_command(&session, &settings, args)?,
        Some(Commands::Suggest(args)) => handle_suggest_command(&session, &settings, args)?,
        Some(Commands::Categorize(cmd)) => handle_categorize_command(&mut session, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&session, &settings, cmd)?,
        Some(Commands::Dashboard) | None => handle_dashboard_command(&session, &settings)?,
        Some(Commands::Config(_)) | Some(Commands::Ask(_)) => {}
    }

    Ok(())
}
