//! Report formatting utilities for terminal output
//!
//! Amounts and percentages follow pt-BR conventions (comma as the decimal
//! separator). Widths count characters, not bytes, so accented category
//! names line up.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::metrics::{BudgetStatus, GoalView};
use crate::models::Money;

/// Currency and date preferences applied when rendering reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPrefs {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for DisplayPrefs {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl DisplayPrefs {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }

    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a date, falling back to ISO 8601 when the pattern is invalid
    pub fn date(&self, date: NaiveDate) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.to_string();
        }
        out
    }
}

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money) -> String {
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", amount)
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", amount)
    } else {
        amount.to_string()
    }
}

/// Format a percentage with a comma decimal separator ("81,25%")
pub fn format_percentage(pct: f64, decimals: usize) -> String {
    format!("{}%", format_decimal(pct, decimals))
}

/// Format a number with a comma decimal separator
pub fn format_decimal(value: f64, decimals: usize) -> String {
    // Avoid printing "-0,0" for tiny negatives
    let value = if value.abs() < 0.5 * 10f64.powi(-(decimals as i32)) {
        0.0
    } else {
        value
    };
    format!("{:.*}", decimals, value).replace('.', ",")
}

/// Short label for a budget status tier
pub fn status_badge(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Good => "OK",
        BudgetStatus::Warning => "ATENÇÃO",
        BudgetStatus::Exceeded => "EXCEDIDO",
    }
}

/// "45 dias restantes", "Vencido" or "Concluída"
pub fn goal_time_label(view: &GoalView) -> String {
    if view.achieved {
        "Concluída".to_string()
    } else if view.is_overdue() {
        "Vencido".to_string()
    } else if view.days_remaining == 1 {
        "1 dia restante".to_string()
    } else {
        format!("{} dias restantes", view.days_remaining)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Right-align text in a field of given width
pub fn right_align(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - len), s)
    }
}

/// Left-align text in a field of given width
pub fn left_align(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}
