//! Display formatting for terminal output

pub mod report;

pub use report::{
    double_separator, format_bar, format_decimal, format_money_colored, format_percentage,
    goal_time_label, left_align, right_align, separator, status_badge, truncate, DisplayPrefs,
};
