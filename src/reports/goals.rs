//! Goals Report
//!
//! Progress of every savings goal and the totals shown above the list.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::{format_bar, goal_time_label, truncate, DisplayPrefs};
use crate::error::FinanceResult;
use crate::metrics::{compute_goal_progress_on, summarize_goals, GoalView, GoalsOverview};
use crate::source::FinanceSource;

/// Goals Report
#[derive(Debug, Clone)]
pub struct GoalsReport {
    pub as_of: NaiveDate,
    pub views: Vec<GoalView>,
    pub overview: GoalsOverview,
    prefs: DisplayPrefs,
}

impl GoalsReport {
    /// Generate the report; `achieved` filters to achieved or pending goals
    pub fn generate(
        source: &dyn FinanceSource,
        settings: &Settings,
        achieved: Option<bool>,
        today: NaiveDate,
    ) -> FinanceResult<Self> {
        let views = source
            .goals(achieved)?
            .iter()
            .map(|goal| compute_goal_progress_on(goal, today))
            .collect::<FinanceResult<Vec<_>>>()?;
        let overview = summarize_goals(&views);

        Ok(Self {
            as_of: today,
            views,
            overview,
            prefs: DisplayPrefs::from_settings(settings),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        let prefs = &self.prefs;

        output.push_str(&format!("Metas financeiras em {}\n", prefs.date(self.as_of)));
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "Guardado: {} de {}   Ativas: {}   Concluídas: {}   Progresso médio: {}%\n\n",
            prefs.money(self.overview.total_saved),
            prefs.money(self.overview.total_target),
            self.overview.active_count,
            self.overview.achieved_count,
            self.overview.average_progress
        ));

        if self.views.is_empty() {
            output.push_str("Nenhuma meta cadastrada.\n");
            return output;
        }

        for view in &self.views {
            output.push_str(&format!(
                "{:<40} {:>18}\n",
                truncate(&view.name, 40),
                goal_time_label(view)
            ));
            if let Some(description) = &view.description {
                output.push_str(&format!("  {}\n", description));
            }
            output.push_str(&format!(
                "  {} {:>3}%\n",
                format_bar(f64::from(view.progress_percentage), 100.0, 40),
                view.progress_percentage
            ));
            output.push_str(&format!(
                "  {} de {}   faltam {}   prazo {}\n\n",
                prefs.money(view.current_amount),
                prefs.money(view.target_amount),
                prefs.money(view.amount_remaining),
                prefs.date(view.target_date)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{demo_dataset, InMemorySource};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    fn source() -> InMemorySource {
        InMemorySource::new(demo_dataset(today()))
    }

    #[test]
    fn test_generate_goals_report() {
        let report = GoalsReport::generate(&source(), &Settings::default(), None, today()).unwrap();

        assert_eq!(report.views.len(), 3);
        assert_eq!(report.overview.active_count, 2);
        assert_eq!(report.overview.achieved_count, 1);
        assert_eq!(report.overview.average_progress, 48);
    }

    #[test]
    fn test_filter_pending_goals() {
        let report =
            GoalsReport::generate(&source(), &Settings::default(), Some(false), today()).unwrap();

        assert_eq!(report.views.len(), 2);
        assert!(report.views.iter().all(|v| !v.achieved));
    }

    #[test]
    fn test_format_terminal() {
        let report = GoalsReport::generate(&source(), &Settings::default(), None, today()).unwrap();
        let output = report.format_terminal();

        assert!(output.contains("Reserva de Emergência"));
        assert!(output.contains("120 dias restantes"));
        assert!(output.contains("Concluída"));
        assert!(output.contains(" 65%"));
        assert!(output.contains("31/12/2024"));
    }
}
