//! Report formatting for terminal output
//!
//! The dashboard totals and the category breakdown chart, plus the small
//! text helpers they share.

use crate::reports::{CategoryBreakdown, Summary};

/// Format the dashboard totals
pub fn format_summary(summary: &Summary, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str("Financial Summary\n");
    output.push_str(&separator(36));
    output.push('\n');

    let rows = [
        ("Total Income", summary.income),
        ("Total Expenses", summary.expenses),
        ("Savings for Goals", summary.savings),
        ("Remaining Balance", summary.balance),
    ];
    for (label, amount) in rows {
        output.push_str(&format!(
            "{}{}\n",
            left_align(&format!("{}:", label), 20),
            right_align(&amount.format_with_symbol(symbol), 16)
        ));
    }

    output
}

/// Format the breakdown as a bar chart, one row per category
pub fn format_breakdown(breakdown: &CategoryBreakdown, symbol: &str, bar_width: usize) -> String {
    let mut output = String::new();

    let title = match breakdown.month {
        Some(month) => format!("Expense Categories Distribution ({})", month),
        None => "Expense Categories Distribution".to_string(),
    };
    output.push_str(&title);
    output.push('\n');
    output.push_str(&separator(title.chars().count()));
    output.push('\n');

    if breakdown.total_expenses.is_zero() {
        output.push_str("No expenses recorded.\n");
        return output;
    }

    let max = breakdown.max_total().cents() as f64;
    for bucket in &breakdown.buckets {
        output.push_str(&format!(
            "{} {} {} {}\n",
            left_align(bucket.category.name(), 10),
            format_bar(bucket.total.cents() as f64, max, bar_width),
            right_align(&format_percentage(bucket.percentage), 6),
            bucket.total.format_with_symbol(symbol)
        ));
    }

    output.push_str(&separator(10 + bar_width + 8));
    output.push('\n');
    output.push_str(&format!(
        "{} {}\n",
        left_align("Total", 10 + bar_width + 8),
        breakdown.total_expenses.format_with_symbol(symbol)
    ));

    output
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

pub fn right_align(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

pub fn left_align(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
