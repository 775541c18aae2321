//! Report formatting for terminal output

use crate::reports::{BudgetOverview, BudgetReport};

/// Format a single-category report
///
/// The transaction list is omitted when the category has none.
pub fn format_budget_report(report: &BudgetReport, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("\nBudget Report for {}:\n", report.category));
    output.push_str(&format!(
        "Current Budget: {}\n",
        report.budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Spent: {}\n",
        report.spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining: {}\n",
        report.remaining.format_with_symbol(symbol)
    ));

    if !report.transactions.is_empty() {
        output.push_str("\nTransactions:\n");
        for line in &report.transactions {
            output.push_str(&format!(
                "{}. {} - {}\n",
                line.index,
                line.amount.format_with_symbol(symbol),
                line.description
            ));
        }
    }

    output
}

/// Format the all-budgets summary, one line per category
pub fn format_overview(overview: &BudgetOverview, symbol: &str) -> String {
    if overview.is_empty() {
        return "No budgets set yet\n".to_string();
    }

    let mut output = String::from("\nAll Budgets Summary:\n");
    for row in &overview.rows {
        output.push_str(&format!(
            "{}: Current: {} | Spent: {} | Remaining: {}\n",
            row.category,
            row.budget.format_with_symbol(symbol),
            row.spent.format_with_symbol(symbol),
            row.remaining.format_with_symbol(symbol)
        ));
    }

    output
}

/// Message for viewing a category without a budget
pub fn format_missing_report(category: &str) -> String {
    format!("No budget set for {}\n", category)
}
