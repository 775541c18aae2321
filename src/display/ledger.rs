//! Ledger operation messages
//!
//! The confirmation and warning lines printed after each ledger operation.

use crate::models::{ExpenseOutcome, Money};

/// Confirmation after a budget is set
pub fn format_budget_set(category: &str, amount: Money, symbol: &str) -> String {
    format!(
        "Budget for {} set to {}",
        category,
        amount.format_with_symbol(symbol)
    )
}

/// Confirmation after funds are added
pub fn format_funds_added(category: &str, amount: Money, total: Money, symbol: &str) -> String {
    format!(
        "{} added to {}. New total: {}",
        amount.format_with_symbol(symbol),
        category,
        total.format_with_symbol(symbol)
    )
}

/// Confirmation or overspend warning after an expense is recorded
pub fn format_expense(category: &str, amount: Money, outcome: ExpenseOutcome, symbol: &str) -> String {
    match outcome {
        ExpenseOutcome::Overspent { remaining } => format!(
            "Warning: This expense ({}) exceeds remaining budget ({}) for {}",
            amount.format_with_symbol(symbol),
            remaining.format_with_symbol(symbol),
            category
        ),
        ExpenseOutcome::Recorded { .. } => format!(
            "Expense of {} added to {}",
            amount.format_with_symbol(symbol),
            category
        ),
    }
}

/// Message for a change attempted on a category without a budget
pub fn format_no_budget(category: &str) -> String {
    format!(
        "No budget set for {}. Please set a budget first.",
        category
    )
}
