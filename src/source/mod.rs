//! Data access for the metrics engine
//!
//! The engine itself only accepts plain record slices. This module is where
//! those records come from: a `FinanceSource` answers the filtered reads the
//! screens issue (date range, category, kind, active and achieved flags) and
//! applies goal contributions. `InMemorySource` serves a `Dataset` snapshot
//! loaded from JSON or built from the demonstration fixtures.

pub mod dataset;
pub mod file_io;
pub mod fixtures;

pub use dataset::Dataset;
pub use fixtures::demo_dataset;

use tracing::debug;

use crate::error::{FinanceError, FinanceResult};
use crate::metrics;
use crate::models::{
    Budget, Category, CategoryId, DateRange, Goal, GoalId, Money, Transaction, TransactionKind,
};

/// Optional constraints on a transaction read
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Inclusive date range
    pub range: Option<DateRange>,
    pub category_id: Option<CategoryId>,
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn in_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn of_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Check whether a transaction passes every set constraint
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.range.map_or(true, |range| range.contains(txn.date))
            && self
                .category_id
                .map_or(true, |id| txn.category_id == Some(id))
            && self.kind.map_or(true, |kind| txn.kind == kind)
    }
}

/// Where the engine's records come from
///
/// Implementations return owned snapshots; the engine never holds on to
/// them between calls.
pub trait FinanceSource {
    /// Transactions passing `filter`, oldest first
    fn transactions(&self, filter: &TransactionFilter) -> FinanceResult<Vec<Transaction>>;

    /// Categories, optionally restricted to one kind
    fn categories(&self, kind: Option<TransactionKind>) -> FinanceResult<Vec<Category>>;

    /// Budgets, optionally restricted by their `active` flag
    fn budgets(&self, active: Option<bool>) -> FinanceResult<Vec<Budget>>;

    /// Goals, optionally restricted by whether they are achieved
    fn goals(&self, achieved: Option<bool>) -> FinanceResult<Vec<Goal>>;

    /// A single goal
    fn goal(&self, id: GoalId) -> FinanceResult<Goal>;

    /// Increase a goal's saved amount and return the stored result
    fn contribute(&mut self, id: GoalId, amount: Money) -> FinanceResult<Goal>;
}

/// A `FinanceSource` over an in-memory `Dataset`
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    dataset: Dataset,
}

impl InMemorySource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn dataset_mut(&mut self) -> &mut Dataset {
        &mut self.dataset
    }

    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }
}

impl FinanceSource for InMemorySource {
    fn transactions(&self, filter: &TransactionFilter) -> FinanceResult<Vec<Transaction>> {
        let mut txns: Vec<Transaction> = self
            .dataset
            .transactions
            .iter()
            .filter(|txn| filter.matches(txn))
            .cloned()
            .collect();
        txns.sort_by_key(|txn| txn.date);
        debug!(count = txns.len(), ?filter, "Read transactions");
        Ok(txns)
    }

    fn categories(&self, kind: Option<TransactionKind>) -> FinanceResult<Vec<Category>> {
        Ok(self
            .dataset
            .categories
            .iter()
            .filter(|c| kind.map_or(true, |k| c.kind == k))
            .cloned()
            .collect())
    }

    fn budgets(&self, active: Option<bool>) -> FinanceResult<Vec<Budget>> {
        Ok(self
            .dataset
            .budgets
            .iter()
            .filter(|b| active.map_or(true, |a| b.active == a))
            .cloned()
            .collect())
    }

    fn goals(&self, achieved: Option<bool>) -> FinanceResult<Vec<Goal>> {
        Ok(self
            .dataset
            .goals
            .iter()
            .filter(|g| achieved.map_or(true, |a| g.is_achieved() == a))
            .cloned()
            .collect())
    }

    fn goal(&self, id: GoalId) -> FinanceResult<Goal> {
        self.dataset
            .goals
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(|| FinanceError::goal_not_found(id.to_string()))
    }

    fn contribute(&mut self, id: GoalId, amount: Money) -> FinanceResult<Goal> {
        let current = self.goal(id)?;
        let updated = metrics::contribute(&current, amount)?;
        self.dataset.replace_goal(updated.clone())?;
        debug!(goal = %updated.name, amount = amount.cents(), "Applied contribution");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    fn source() -> InMemorySource {
        InMemorySource::new(demo_dataset(today()))
    }

    #[test]
    fn test_unfiltered_read_is_sorted() {
        let txns = source().transactions(&TransactionFilter::new()).unwrap();
        assert!(!txns.is_empty());
        assert!(txns.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_filter_by_kind_and_range() {
        let january = DateRange::month(2024, 1).unwrap();
        let filter = TransactionFilter::new()
            .in_range(january)
            .of_kind(TransactionKind::Income);
        let txns = source().transactions(&filter).unwrap();
        assert!(!txns.is_empty());
        assert!(txns.iter().all(|t| t.is_income() && january.contains(t.date)));
    }

    #[test]
    fn test_filter_by_category() {
        let src = source();
        let food = src
            .categories(Some(TransactionKind::Expense))
            .unwrap()
            .into_iter()
            .find(|c| c.name == "Alimentação")
            .unwrap();
        let txns = src
            .transactions(&TransactionFilter::new().in_category(food.id))
            .unwrap();
        assert!(txns.iter().all(|t| t.category_id == Some(food.id)));
    }

    #[test]
    fn test_budget_and_goal_flags() {
        let src = source();
        assert_eq!(src.budgets(Some(true)).unwrap().len(), 3);
        assert!(src.budgets(Some(false)).unwrap().is_empty());

        let achieved = src.goals(Some(true)).unwrap();
        assert_eq!(achieved.len(), 1);
        assert_eq!(achieved[0].name, "Notebook Novo");
        assert_eq!(src.goals(Some(false)).unwrap().len(), 2);
    }

    #[test]
    fn test_contribute_updates_stored_goal() {
        let mut src = source();
        let goal = src.goals(Some(false)).unwrap().remove(0);
        let before = goal.current_amount;

        let updated = src.contribute(goal.id, Money::from_reais(200)).unwrap();
        assert_eq!(updated.current_amount, before + Money::from_reais(200));
        assert_eq!(src.goal(goal.id).unwrap().current_amount, updated.current_amount);
    }

    #[test]
    fn test_rejected_contribution_leaves_goal_alone() {
        let mut src = source();
        let goal = src.goals(None).unwrap().remove(0);
        assert!(src.contribute(goal.id, Money::zero()).is_err());
        assert_eq!(src.goal(goal.id).unwrap(), goal);
    }

    #[test]
    fn test_unknown_goal() {
        let err = source().goal(GoalId::new()).unwrap_err();
        assert!(err.is_not_found());
    }
}
