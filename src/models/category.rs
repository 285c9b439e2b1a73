//! Category model
//!
//! Categories are referenced (never owned) by transactions and budgets.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::TransactionKind;

/// An income or expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name ("Alimentação", "Salário")
    pub name: String,

    /// Whether this category classifies income or expenses
    pub kind: TransactionKind,

    #[serde(default)]
    pub description: Option<String>,

    /// Hex color used by charts ("#EF4444")
    #[serde(default)]
    pub color: Option<String>,

    /// Icon name used by the UI
    #[serde(default)]
    pub icon: Option<String>,

    /// System default category (shared by every user)
    #[serde(default)]
    pub is_default: bool,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, kind: TransactionKind) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
            description: None,
            color: None,
            icon: None,
            is_default: false,
        }
    }

    /// Set the chart color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.chars().count() > 100 {
            return Err(CategoryValidationError::NameTooLong(self.name.chars().count()));
        }

        if let Some(color) = &self.color {
            let valid = color.len() == 7
                && color.starts_with('#')
                && color[1..].chars().all(|c| c.is_ascii_hexdigit());
            if !valid {
                return Err(CategoryValidationError::InvalidColor(color.clone()));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidColor(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 100)", len)
            }
            Self::InvalidColor(color) => write!(f, "Invalid color code: {}", color),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
