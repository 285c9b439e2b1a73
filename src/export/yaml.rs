//! YAML Export functionality
//!
//! The same bundle as the JSON export, in a human-readable layout.

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::MetricsExport;
use std::io::Write;

/// Export the metrics bundle to YAML
pub fn export_metrics_yaml<W: Write>(export: &MetricsExport, writer: &mut W) -> FinanceResult<()> {
    writeln!(writer, "# FinanceFlow metrics export")
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer, "# As of: {}", export.as_of)
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer, "# Amounts are in centavos.")
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}
