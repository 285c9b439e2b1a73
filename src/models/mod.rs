//! Core data models for FinanceFlow
//!
//! This module contains the raw records the metrics engine consumes:
//! transactions, categories, budgets, savings goals, plus the money,
//! id and date-range value types they are built from.

pub mod budget;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{Budget, BudgetValidationError};
pub use category::{Category, CategoryValidationError};
pub use goal::{Goal, GoalValidationError};
pub use ids::{BudgetId, CategoryId, GoalId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use period::{months_before, BudgetPeriod, DateRange, PeriodError};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError, UNCATEGORIZED};
