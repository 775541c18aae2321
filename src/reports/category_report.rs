//! Single-category budget report
//!
//! Shows a category's budget, total spent, what remains, and each recorded
//! transaction in the order it was entered.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Ledger, Money};

/// A transaction as it appears in a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionLine {
    /// 1-based position in the category's transaction list
    pub index: usize,
    pub amount: Money,
    /// Description, or `Transaction {index}` when none was given
    pub description: String,
}

/// Budget report for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetReport {
    pub category: String,
    pub budget: Money,
    pub spent: Money,
    pub remaining: Money,
    pub transactions: Vec<TransactionLine>,
}

impl BudgetReport {
    /// Generate the report for a category
    pub fn generate(ledger: &Ledger, category: &str) -> TrackerResult<Self> {
        let entry = ledger
            .get(category)
            .ok_or_else(|| TrackerError::no_budget(category))?;

        let transactions = entry
            .transactions
            .iter()
            .enumerate()
            .map(|(i, txn)| TransactionLine {
                index: i + 1,
                amount: txn.amount,
                description: txn.display_description(i + 1),
            })
            .collect();

        Ok(Self {
            category: category.to_string(),
            budget: entry.budget,
            spent: entry.spent(),
            remaining: entry.remaining(),
            transactions,
        })
    }
}
