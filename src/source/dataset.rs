//! In-memory snapshot of a user's financial records

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::file_io::{read_json_required, write_json_atomic};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, Category, CategoryId, Goal, GoalId, Transaction};

/// Every record the engine reads, as one serializable snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl Dataset {
    /// Load a snapshot from a JSON file
    pub fn load(path: impl AsRef<Path>) -> FinanceResult<Self> {
        let path = path.as_ref();
        let dataset: Dataset = read_json_required(path)?;
        debug!(
            path = %path.display(),
            transactions = dataset.transactions.len(),
            budgets = dataset.budgets.len(),
            goals = dataset.goals.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Save the snapshot atomically
    pub fn save(&self, path: impl AsRef<Path>) -> FinanceResult<()> {
        let path = path.as_ref();
        write_json_atomic(path, self)?;
        debug!(path = %path.display(), "Saved dataset");
        Ok(())
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Find a goal by id, or by case-insensitive name
    pub fn find_goal(&self, query: &str) -> FinanceResult<&Goal> {
        let query = query.trim();
        if let Ok(id) = query.parse::<GoalId>() {
            if let Some(goal) = self.goals.iter().find(|g| g.id == id) {
                return Ok(goal);
            }
        }

        let lowered = query.to_lowercase();
        self.goals
            .iter()
            .find(|g| g.name.to_lowercase() == lowered)
            .ok_or_else(|| FinanceError::goal_not_found(query))
    }

    /// Replace a goal with an updated version of itself
    pub fn replace_goal(&mut self, goal: Goal) -> FinanceResult<()> {
        let slot = self
            .goals
            .iter_mut()
            .find(|g| g.id == goal.id)
            .ok_or_else(|| FinanceError::goal_not_found(goal.id.to_string()))?;
        *slot = goal;
        Ok(())
    }

    /// Check every record, reporting the first invalid one
    pub fn validate(&self) -> FinanceResult<()> {
        for category in &self.categories {
            category
                .validate()
                .map_err(|e| FinanceError::Validation(format!("{}: {}", category.name, e)))?;
        }
        for txn in &self.transactions {
            txn.validate()
                .map_err(|e| FinanceError::Validation(format!("{}: {}", txn.id, e)))?;
        }
        for budget in &self.budgets {
            budget
                .validate()
                .map_err(|e| FinanceError::Validation(format!("{}: {}", budget.name, e)))?;
        }
        for goal in &self.goals {
            goal.validate()
                .map_err(|e| FinanceError::Validation(format!("{}: {}", goal.name, e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample() -> Dataset {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        Dataset {
            goals: vec![Goal::new("Notebook Novo", Money::from_reais(3500), date)],
            transactions: vec![Transaction::expense("Padaria", Money::from_cents(950), date)],
            ..Default::default()
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finance.json");

        let dataset = sample();
        dataset.save(&path).unwrap();
        let loaded = Dataset::load(&path).unwrap();
        assert_eq!(loaded, dataset);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Dataset::load(temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, FinanceError::Storage(_)));
    }

    #[test]
    fn test_find_goal_by_name_or_id() {
        let dataset = sample();
        let id = dataset.goals[0].id;
        assert_eq!(dataset.find_goal("notebook novo").unwrap().id, id);
        assert_eq!(dataset.find_goal(&id.as_uuid().to_string()).unwrap().id, id);
        assert!(dataset.find_goal("Casa própria").unwrap_err().is_not_found());
    }

    #[test]
    fn test_replace_goal() {
        let mut dataset = sample();
        let mut goal = dataset.goals[0].clone();
        goal.current_amount = Money::from_reais(100);
        dataset.replace_goal(goal).unwrap();
        assert_eq!(dataset.goals[0].current_amount, Money::from_reais(100));

        let stranger = Goal::new("Outra", Money::from_reais(1), NaiveDate::MIN);
        assert!(dataset.replace_goal(stranger).is_err());
    }

    #[test]
    fn test_validate_reports_bad_record() {
        let mut dataset = sample();
        assert!(dataset.validate().is_ok());
        dataset.goals[0].target_amount = Money::zero();
        assert!(matches!(dataset.validate(), Err(FinanceError::Validation(_))));
    }
}
