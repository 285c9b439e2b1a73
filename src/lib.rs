//! FinanceFlow - personal finance metrics
//!
//! This library turns a user's transactions, budgets and savings goals into
//! the aggregates a personal finance dashboard shows: period summaries,
//! budget usage with status tiers, goal progress, category rankings and
//! dense daily/monthly series. Around that engine sit a keyword-based
//! advisor, a transaction categorizer, terminal reports and exporters.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (money, transactions, categories, budgets, goals)
//! - `metrics`: Pure aggregation functions over the models
//! - `source`: Dataset snapshots and the `FinanceSource` data-access seam
//! - `advisor`: Scripted chat answers, insights and savings suggestions
//! - `categorize`: Keyword-based category suggestions
//! - `reports` / `display`: Terminal rendering
//! - `export`: JSON, YAML and CSV output
//! - `config`: Paths and persisted settings
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use financeflow::metrics::{compute_budget_status, BudgetStatus};
//! use financeflow::source::demo_dataset;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
//! let data = demo_dataset(today);
//! let view = compute_budget_status(&data.budgets[0], &data.transactions).unwrap();
//! assert_eq!(view.status, BudgetStatus::Warning);
//! ```

pub mod advisor;
pub mod categorize;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod metrics;
pub mod models;
pub mod reports;
pub mod source;

pub use error::{FinanceError, FinanceResult};
