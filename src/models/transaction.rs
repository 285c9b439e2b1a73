//! Transaction model
//!
//! Transactions carry an unsigned magnitude plus an income/expense tag. The
//! metrics engine always uses the absolute amount, so a record imported with
//! a signed amount still aggregates correctly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Label used when a transaction has no category
pub const UNCATEGORIZED: &str = "Sem categoria";

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Receita"),
            Self::Expense => write!(f, "Despesa"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" | "receita" => Ok(Self::Income),
            "expense" | "despesa" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Free-text description ("Supermercado Extra", "Salário")
    pub description: String,

    /// Magnitude of the transaction
    pub amount: Money,

    /// Income or expense
    pub kind: TransactionKind,

    /// Category reference (None when uncategorized)
    #[serde(default)]
    pub category_id: Option<CategoryId>,

    /// Category name (stored for display, even if category_id is set)
    #[serde(default)]
    pub category_name: String,

    /// Day the transaction occurred
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new uncategorized transaction
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            description: description.into(),
            amount,
            kind,
            category_id: None,
            category_name: String::new(),
            date,
        }
    }

    /// Shorthand for an expense
    pub fn expense(description: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self::new(description, amount, TransactionKind::Expense, date)
    }

    /// Shorthand for an income
    pub fn income(description: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self::new(description, amount, TransactionKind::Income, date)
    }

    /// Attach a category reference
    pub fn with_category(mut self, id: CategoryId, name: impl Into<String>) -> Self {
        self.category_id = Some(id);
        self.category_name = name.into();
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_categorized(&self) -> bool {
        self.category_id.is_some()
    }

    /// The amount as a non-negative magnitude
    pub fn magnitude(&self) -> Money {
        self.amount.abs()
    }

    /// Name to show for the category, falling back to "Sem categoria"
    pub fn category_label(&self) -> &str {
        if self.category_name.trim().is_empty() {
            UNCATEGORIZED
        } else {
            &self.category_name
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }
        if self.amount.is_zero() {
            return Err(TransactionValidationError::ZeroAmount);
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_expense() { "-" } else { "+" };
        write!(
            f,
            "{} {} {}{}",
            self.date.format("%Y-%m-%d"),
            self.description,
            sign,
            self.magnitude()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    ZeroAmount,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Transaction description cannot be empty"),
            Self::ZeroAmount => write!(f, "Transaction amount cannot be zero"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
