//! Savings goal model
//!
//! A goal tracks money saved toward a target amount by a target date. The
//! saved amount only grows through contributions (see
//! `metrics::goal::contribute`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,

    /// Display name ("Reserva de Emergência")
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Amount to reach
    pub target_amount: Money,

    /// Amount saved so far
    #[serde(default)]
    pub current_amount: Money,

    /// Day the goal should be reached by
    pub target_date: NaiveDate,
}

impl Goal {
    /// Create a new goal with nothing saved yet
    pub fn new(name: impl Into<String>, target_amount: Money, target_date: NaiveDate) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            description: None,
            target_amount,
            current_amount: Money::zero(),
            target_date,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Start from an amount already saved
    pub fn with_current_amount(mut self, current_amount: Money) -> Self {
        self.current_amount = current_amount;
        self
    }

    /// Whether the saved amount has reached the target
    pub fn is_achieved(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget);
        }

        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent);
        }

        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {}",
            self.name, self.current_amount, self.target_amount
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget,
    NegativeCurrent,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget => write!(f, "Goal target must be positive"),
            Self::NegativeCurrent => write!(f, "Goal saved amount cannot be negative"),
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn target_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    #[test]
    fn test_new_goal() {
        let goal = Goal::new("Viagem para Europa", Money::from_reais(8000), target_date())
            .with_current_amount(Money::from_reais(2400));
        assert_eq!(goal.current_amount.cents(), 240000);
        assert!(!goal.is_achieved());
    }

    #[test]
    fn test_achieved_at_exact_target() {
        let goal = Goal::new("Notebook Novo", Money::from_reais(3500), target_date())
            .with_current_amount(Money::from_reais(3500));
        assert!(goal.is_achieved());
    }

    #[test]
    fn test_validation() {
        let goal = Goal::new("Reserva", Money::from_reais(10000), target_date());
        assert!(goal.validate().is_ok());

        let zero = Goal::new("Reserva", Money::zero(), target_date());
        assert_eq!(zero.validate(), Err(GoalValidationError::NonPositiveTarget));

        let negative = Goal::new("Reserva", Money::from_reais(10), target_date())
            .with_current_amount(Money::from_reais(-1));
        assert_eq!(negative.validate(), Err(GoalValidationError::NegativeCurrent));
    }
}
