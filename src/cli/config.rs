//! Configuration commands

use clap::Subcommand;

use crate::config::{FinancePaths, Settings};
use crate::error::FinanceResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current settings and paths
    Show,

    /// Change one setting
    Set {
        /// Setting name (e.g., warning_threshold_percent)
        key: String,
        /// New value
        value: String,
    },

    /// Print the data directory
    Path,
}

/// Handle config commands
pub fn handle_config_command(
    paths: &FinancePaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> FinanceResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("FinanceFlow Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Dataset file:     {}", paths.dataset_file().display());
            println!();
            println!("Settings:");
            println!("  currency_symbol:            {}", settings.currency_symbol);
            println!("  date_format:                {}", settings.date_format);
            println!("  warning_threshold_percent:  {}", settings.warning_threshold_percent);
            println!("  exceeded_threshold_percent: {}", settings.exceeded_threshold_percent);
            println!("  daily_window_days:          {}", settings.daily_window_days);
            println!("  trend_months:               {}", settings.trend_months);
            println!("  analysis_window_days:       {}", settings.analysis_window_days);
        }
        ConfigCommands::Set { key, value } => {
            settings.set(&key, &value)?;
            settings.save(paths)?;
            println!("Set {} = {}", key, value);
        }
        ConfigCommands::Path => {
            println!("{}", paths.data_dir().display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        handle_config_command(
            &paths,
            &mut settings,
            ConfigCommands::Set {
                key: "trend_months".into(),
                value: "12".into(),
            },
        )
        .unwrap();

        assert_eq!(settings.trend_months, 12);
        assert_eq!(Settings::load_or_create(&paths).unwrap().trend_months, 12);
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        let result = handle_config_command(
            &paths,
            &mut settings,
            ConfigCommands::Set {
                key: "colour".into(),
                value: "blue".into(),
            },
        );
        assert!(result.is_err());
        assert!(!paths.settings_file().exists());
    }
}
