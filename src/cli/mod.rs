//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the metrics engine and reports.

pub mod advisor;
pub mod categorize;
pub mod config;
pub mod export;
pub mod goal;
pub mod report;

pub use advisor::{
    handle_ask_command, handle_insights_command, handle_suggest_command, AskArgs, InsightsArgs,
};
pub use categorize::{handle_categorize_command, CategorizeCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportCommands};
pub use goal::{handle_contribute_command, ContributeArgs};
pub use report::{
    handle_budgets_command, handle_categories_command, handle_daily_command,
    handle_dashboard_command, handle_goals_command, handle_summary_command, handle_trend_command,
    BudgetsArgs, CategoriesArgs, DailyArgs, GoalsArgs, SummaryArgs, TrendArgs,
};

use chrono::NaiveDate;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::FinancePaths;
use crate::error::{FinanceError, FinanceResult};
use crate::source::{demo_dataset, Dataset, FinanceSource, InMemorySource};

/// Where the records for one invocation come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOrigin {
    /// The built-in demonstration dataset
    Demo,
    /// A JSON snapshot on disk
    File(PathBuf),
}

/// The records and reference date one command runs against
#[derive(Debug)]
pub struct Session {
    source: InMemorySource,
    origin: DataOrigin,
    today: NaiveDate,
}

impl Session {
    /// Open the dataset named on the command line
    ///
    /// `--demo` wins over `--data`. Without either, the default dataset file
    /// is used when it exists and an empty dataset otherwise.
    pub fn open(
        paths: &FinancePaths,
        data: Option<PathBuf>,
        demo: bool,
        today: NaiveDate,
    ) -> FinanceResult<Self> {
        if demo {
            debug!(%today, "Using demonstration dataset");
            return Ok(Self::with_dataset(demo_dataset(today), DataOrigin::Demo, today));
        }

        let (path, dataset) = match data {
            Some(path) => {
                let dataset = Dataset::load(&path)?;
                (path, dataset)
            }
            None => {
                let path = paths.dataset_file();
                let dataset = if path.exists() {
                    Dataset::load(&path)?
                } else {
                    warn!(
                        path = %path.display(),
                        "No dataset found; pass --data <file> or --demo"
                    );
                    Dataset::default()
                };
                (path, dataset)
            }
        };

        dataset.validate()?;
        Ok(Self::with_dataset(dataset, DataOrigin::File(path), today))
    }

    pub fn with_dataset(dataset: Dataset, origin: DataOrigin, today: NaiveDate) -> Self {
        Self {
            source: InMemorySource::new(dataset),
            origin,
            today,
        }
    }

    pub fn source(&self) -> &dyn FinanceSource {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut InMemorySource {
        &mut self.source
    }

    pub fn dataset(&self) -> &Dataset {
        self.source.dataset()
    }

    pub fn origin(&self) -> &DataOrigin {
        &self.origin
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Write the dataset back to the file it came from
    pub fn save(&self) -> FinanceResult<&Path> {
        match &self.origin {
            DataOrigin::File(path) => {
                self.source.dataset().save(path)?;
                Ok(path)
            }
            DataOrigin::Demo => Err(FinanceError::Validation(
                "The demonstration dataset cannot be saved; use --data <file>".into(),
            )),
        }
    }
}

/// Open an output file for an export
pub(crate) fn create_output(path: &Path) -> FinanceResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        FinanceError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    #[test]
    fn test_open_demo() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let session = Session::open(&paths, None, true, today()).unwrap();
        assert_eq!(session.origin(), &DataOrigin::Demo);
        assert_eq!(session.dataset().goals.len(), 3);
        assert!(session.save().is_err());
    }

    #[test]
    fn test_open_missing_default_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let session = Session::open(&paths, None, false, today()).unwrap();
        assert_eq!(session.dataset(), &Dataset::default());
    }

    #[test]
    fn test_open_missing_explicit_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let missing = temp_dir.path().join("nope.json");
        assert!(Session::open(&paths, Some(missing), false, today()).is_err());
    }

    #[test]
    fn test_save_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let file = temp_dir.path().join("finance.json");
        demo_dataset(today()).save(&file).unwrap();

        let mut session = Session::open(&paths, Some(file.clone()), false, today()).unwrap();
        let goal_id = session.dataset().goals[1].id;
        session
            .source_mut()
            .contribute(goal_id, crate::models::Money::from_reais(100))
            .unwrap();
        assert_eq!(session.save().unwrap(), file.as_path());

        let reloaded = Dataset::load(&file).unwrap();
        assert_eq!(
            reloaded.goals[1].current_amount,
            crate::models::Money::from_reais(2500)
        );
    }
}
