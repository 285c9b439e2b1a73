//! Export module for FinanceFlow
//!
//! Writes the computed metrics in multiple formats:
//! - JSON: the full versioned bundle, machine-readable
//! - YAML: the same bundle, human-readable
//! - CSV: flat transaction, budget and goal tables for spreadsheets

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_budgets_csv, export_goals_csv, export_transactions_csv};
pub use json::{export_metrics_json, ExportMetadata, MetricsExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_metrics_yaml;
