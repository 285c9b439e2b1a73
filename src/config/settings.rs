//! User settings for FinanceFlow
//!
//! Holds the presentation policy the metrics engine is parameterised by
//! (status thresholds, series windows) plus display preferences.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::FinancePaths;
use crate::error::{FinanceError, FinanceResult};
use crate::metrics::{
    StatusThresholds, EXCEEDED_THRESHOLD_PERCENT, MAX_TREND_MONTHS, MAX_WINDOW_DAYS,
    WARNING_THRESHOLD_PERCENT,
};
use crate::source::file_io::write_json_atomic;

/// User settings for FinanceFlow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Budget usage (%) at which the warning tier starts
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold_percent: f64,

    /// Budget usage (%) above which a budget is exceeded
    #[serde(default = "default_exceeded_threshold")]
    pub exceeded_threshold_percent: f64,

    /// Days covered by the daily spending series
    #[serde(default = "default_daily_window")]
    pub daily_window_days: u32,

    /// Months covered by the monthly trend
    #[serde(default = "default_trend_months")]
    pub trend_months: u32,

    /// Days of history the advisor analyses
    #[serde(default = "default_analysis_window")]
    pub analysis_window_days: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_warning_threshold() -> f64 {
    WARNING_THRESHOLD_PERCENT
}

fn default_exceeded_threshold() -> f64 {
    EXCEEDED_THRESHOLD_PERCENT
}

fn default_daily_window() -> u32 {
    14
}

fn default_trend_months() -> u32 {
    6
}

fn default_analysis_window() -> u32 {
    90
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            warning_threshold_percent: default_warning_threshold(),
            exceeded_threshold_percent: default_exceeded_threshold(),
            daily_window_days: default_daily_window(),
            trend_months: default_trend_months(),
            analysis_window_days: default_analysis_window(),
        }
    }
}

/// Keys accepted by [`Settings::set`]
pub const SETTING_KEYS: &[&str] = &[
    "currency_symbol",
    "date_format",
    "warning_threshold_percent",
    "exceeded_threshold_percent",
    "daily_window_days",
    "trend_months",
    "analysis_window_days",
];

impl Settings {
    /// The configured budget status thresholds
    pub fn thresholds(&self) -> FinanceResult<StatusThresholds> {
        StatusThresholds::new(self.warning_threshold_percent, self.exceeded_threshold_percent)
    }

    /// Check thresholds and series lengths
    pub fn validate(&self) -> FinanceResult<()> {
        self.thresholds()?;
        check_window("daily_window_days", self.daily_window_days, MAX_WINDOW_DAYS)?;
        check_window("trend_months", self.trend_months, MAX_TREND_MONTHS)?;
        check_window("analysis_window_days", self.analysis_window_days, MAX_WINDOW_DAYS)
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> FinanceResult<Self> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            debug!(path = %settings_path.display(), "No settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FinanceError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        debug!(path = %settings_path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> FinanceResult<()> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Update one setting from its string form
    ///
    /// Leaves the settings unchanged when the new value is rejected.
    pub fn set(&mut self, key: &str, value: &str) -> FinanceResult<()> {
        let value = value.trim();
        let mut updated = self.clone();
        match key {
            "currency_symbol" => updated.currency_symbol = value.to_string(),
            "date_format" => updated.date_format = value.to_string(),
            "warning_threshold_percent" => {
                updated.warning_threshold_percent = parse_value(key, value)?
            }
            "exceeded_threshold_percent" => {
                updated.exceeded_threshold_percent = parse_value(key, value)?
            }
            "daily_window_days" => updated.daily_window_days = parse_value(key, value)?,
            "trend_months" => updated.trend_months = parse_value(key, value)?,
            "analysis_window_days" => updated.analysis_window_days = parse_value(key, value)?,
            _ => {
                return Err(FinanceError::Config(format!(
                    "Unknown setting '{}'. Valid keys: {}",
                    key,
                    SETTING_KEYS.join(", ")
                )))
            }
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

fn check_window(key: &str, value: u32, max: u32) -> FinanceResult<()> {
    if value == 0 || value > max {
        return Err(FinanceError::Config(format!(
            "{} must be between 1 and {}, got {}",
            key, max, value
        )));
    }
    Ok(())
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> FinanceResult<T> {
    value
        .parse()
        .map_err(|_| FinanceError::Config(format!("Invalid value for {}: {}", key, value)))
}
