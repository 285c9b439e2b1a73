//! Goal progress and contributions

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Goal, GoalId, Money};

/// A goal with its derived fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalView {
    pub goal_id: GoalId,
    pub name: String,
    pub description: Option<String>,
    pub target_amount: Money,
    pub current_amount: Money,
    pub target_date: NaiveDate,
    /// Whole percent in `0..=100`, rounded half up
    pub progress_percentage: u32,
    pub achieved: bool,
    /// Days until the target date; zero or negative once it has passed
    pub days_remaining: i64,
    /// `target - current`, never below zero
    pub amount_remaining: Money,
}

impl GoalView {
    /// The target date is today or already behind us
    pub fn is_overdue(&self) -> bool {
        self.days_remaining <= 0
    }

    pub fn is_active(&self) -> bool {
        !self.achieved
    }
}

/// Derive a goal's view relative to today's date
pub fn compute_goal_progress(goal: &Goal) -> FinanceResult<GoalView> {
    compute_goal_progress_on(goal, super::today())
}

/// Derive a goal's view relative to an explicit date
pub fn compute_goal_progress_on(goal: &Goal, today: NaiveDate) -> FinanceResult<GoalView> {
    if !goal.target_amount.is_positive() {
        warn!(goal = %goal.name, target = goal.target_amount.cents(), "Rejected goal with non-positive target");
        return Err(FinanceError::InvalidGoal {
            name: goal.name.clone(),
            target_cents: goal.target_amount.cents(),
        });
    }

    Ok(GoalView {
        goal_id: goal.id,
        name: goal.name.clone(),
        description: goal.description.clone(),
        target_amount: goal.target_amount,
        current_amount: goal.current_amount,
        target_date: goal.target_date,
        progress_percentage: progress_percent(goal.current_amount, goal.target_amount),
        achieved: goal.current_amount >= goal.target_amount,
        days_remaining: (goal.target_date - today).num_days(),
        amount_remaining: (goal.target_amount - goal.current_amount).floor_zero(),
    })
}

/// `current / target * 100` rounded half up, clamped to `0..=100`
///
/// Computed in integers so a goal exactly halfway between two percents
/// always rounds the same way. `target` must be positive.
fn progress_percent(current: Money, target: Money) -> u32 {
    let current = i128::from(current.floor_zero().cents());
    let target = i128::from(target.cents());
    let rounded = (current * 200 + target) / (target * 2);
    rounded.min(100) as u32
}

/// Add a positive contribution to a goal
///
/// Returns the updated goal and leaves the input untouched. Overshooting the
/// target is allowed.
pub fn contribute(goal: &Goal, amount: Money) -> FinanceResult<Goal> {
    let rejected = || FinanceError::InvalidContribution {
        goal: goal.name.clone(),
        amount_cents: amount.cents(),
    };
    if !amount.is_positive() {
        warn!(goal = %goal.name, amount = amount.cents(), "Rejected non-positive contribution");
        return Err(rejected());
    }

    let current_amount = goal.current_amount.checked_add(amount).ok_or_else(|| {
        warn!(goal = %goal.name, amount = amount.cents(), "Contribution overflows the saved amount");
        rejected()
    })?;

    Ok(Goal {
        current_amount,
        ..goal.clone()
    })
}

/// Totals across a set of goal views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GoalsOverview {
    pub total_target: Money,
    pub total_saved: Money,
    pub active_count: usize,
    pub achieved_count: usize,
    /// Mean progress of the goals not yet achieved, rounded half up
    pub average_progress: u32,
}

/// Aggregate goal views for the goals screen header cards
pub fn summarize_goals(views: &[GoalView]) -> GoalsOverview {
    let mut overview = GoalsOverview::default();
    let mut active_progress_sum: u64 = 0;

    for view in views {
        overview.total_target += view.target_amount;
        overview.total_saved += view.current_amount;
        if view.achieved {
            overview.achieved_count += 1;
        } else {
            overview.active_count += 1;
            active_progress_sum += u64::from(view.progress_percentage);
        }
    }

    if overview.active_count > 0 {
        let count = overview.active_count as u64;
        overview.average_progress = ((active_progress_sum * 2 + count) / (count * 2)) as u32;
    }

    overview
}
