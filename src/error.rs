//! Custom error types for FinanceFlow
//!
//! This module defines the error hierarchy for the crate using thiserror.
//! The metrics engine only ever raises the three precondition variants
//! (`InvalidBudget`, `InvalidGoal`, `InvalidContribution`); the rest belong
//! to the data-access, configuration and export layers.

use thiserror::Error;

/// The main error type for FinanceFlow operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// A budget whose limit is zero or negative
    #[error("Invalid budget '{name}': limit must be positive, got {limit_cents} cents")]
    InvalidBudget { name: String, limit_cents: i64 },

    /// A goal whose target is zero or negative
    #[error("Invalid goal '{name}': target must be positive, got {target_cents} cents")]
    InvalidGoal { name: String, target_cents: i64 },

    /// A contribution that is zero or negative
    #[error("Invalid contribution to goal '{goal}': amount must be positive, got {amount_cents} cents")]
    InvalidContribution { goal: String, amount_cents: i64 },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Snapshot loading/saving errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinanceError {
    /// Create a "not found" error for goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Goal",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is one of the engine's precondition violations
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InvalidBudget { .. } | Self::InvalidGoal { .. } | Self::InvalidContribution { .. }
        )
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for FinanceFlow operations
pub type FinanceResult<T> = Result<T, FinanceError>;
