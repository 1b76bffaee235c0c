//! Goal display formatting

use crate::models::Goal;

use super::report::format_bar;

/// One line per goal: "name: $target by date (Saved: $x)" plus progress
pub fn format_goal_line(goal: &Goal, symbol: &str, bar_width: usize) -> String {
    let status = if goal.is_reached() {
        "reached".to_string()
    } else {
        format!("{} to go", goal.remaining().format_with_symbol(symbol))
    };

    format!(
        "{}: {} by {} (Saved: {}) {} {:.0}% {}",
        goal.name,
        goal.target_amount.format_with_symbol(symbol),
        goal.target_date.format("%Y-%m-%d"),
        goal.amount_saved.format_with_symbol(symbol),
        format_bar(goal.progress_percent(), 100.0, bar_width),
        goal.progress_percent(),
        status
    )
}

pub fn format_goal_list(goals: &[Goal], symbol: &str, bar_width: usize) -> String {
    if goals.is_empty() {
        return "No goals saved yet.\n".to_string();
    }

    let mut output = String::from("Saved Goals:\n");
    for goal in goals {
        output.push_str("  ");
        output.push_str(&format_goal_line(goal, symbol, bar_width));
        output.push('\n');
    }
    output
}
