//! CLI commands for data export
//!
//! Provides commands for exporting computed metrics in various formats.

use clap::{Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

use super::{create_output, Session};
use crate::config::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::export::{
    export_budgets_csv, export_goals_csv, export_metrics_json, export_metrics_yaml,
    export_transactions_csv, MetricsExport,
};
use crate::source::TransactionFilter;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full metrics bundle)
    Json,
    /// YAML format (full metrics bundle, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export every metric as one document
    All {
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export transactions to CSV
    Transactions {
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export budget views to CSV
    Budgets {
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export goal views to CSV
    Goals {
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show export information without writing files
    Info,
}

/// Handle export commands
pub fn handle_export_command(
    session: &Session,
    settings: &Settings,
    cmd: ExportCommands,
) -> FinanceResult<()> {
    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let export = MetricsExport::from_source(session.source(), settings, session.today())?;
            write_to(output, |writer| match format {
                ExportFormat::Json => export_metrics_json(&export, writer, pretty),
                ExportFormat::Yaml => export_metrics_yaml(&export, writer),
            })
        }
        ExportCommands::Transactions { output } => {
            let transactions = session.source().transactions(&TransactionFilter::new())?;
            write_to(output, |writer| export_transactions_csv(&transactions, writer))
        }
        ExportCommands::Budgets { output } => {
            let export = MetricsExport::from_source(session.source(), settings, session.today())?;
            write_to(output, |writer| export_budgets_csv(&export, writer))
        }
        ExportCommands::Goals { output } => {
            let export = MetricsExport::from_source(session.source(), settings, session.today())?;
            write_to(output, |writer| export_goals_csv(&export, writer))
        }
        ExportCommands::Info => handle_export_info(session, settings),
    }
}

/// Run an exporter against a file, or stdout when no path is given
fn write_to<F>(output: Option<PathBuf>, export: F) -> FinanceResult<()>
where
    F: FnOnce(&mut Box<dyn Write>) -> FinanceResult<()>,
{
    let mut writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(create_output(path)?),
        None => Box::new(io::stdout().lock()),
    };

    export(&mut writer)?;
    if output.is_none() {
        writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    if let Some(path) = output {
        eprintln!("Exported to: {}", path.display());
    }
    Ok(())
}

fn handle_export_info(session: &Session, settings: &Settings) -> FinanceResult<()> {
    let export = MetricsExport::from_source(session.source(), settings, session.today())?;
    let meta = &export.metadata;

    println!("Export Information");
    println!("==================");
    println!("Schema version: {}", export.schema_version);
    println!("As of:          {}", export.as_of);
    println!();
    println!("Transactions: {}", meta.transaction_count);
    println!("Categories:   {}", meta.category_count);
    println!("Budgets:      {}", meta.budget_count);
    println!("Goals:        {}", meta.goal_count);
    if let (Some(first), Some(last)) = (meta.earliest_transaction, meta.latest_transaction) {
        println!("Date range:   {} to {}", first, last);
    }
    Ok(())
}
