//! The budget ledger
//!
//! Holds every category's budget amount together with its transactions.
//! Categories are keyed by their exact name (no case folding or trimming) and
//! iterate in ascending name order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::reports::{BudgetOverview, BudgetReport};

use super::money::Money;
use super::transaction::Transaction;

/// A category's allocated funds and the expenses recorded against it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBudget {
    /// Funds allocated to the category (not what is left of them)
    pub budget: Money,

    /// Expenses in the order they were recorded
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl CategoryBudget {
    /// Create a budget with no transactions
    pub fn new(budget: Money) -> Self {
        Self {
            budget,
            transactions: Vec::new(),
        }
    }

    /// Sum of all recorded transaction amounts
    pub fn spent(&self) -> Money {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Budget minus spent; negative once the category is overspent
    pub fn remaining(&self) -> Money {
        self.budget - self.spent()
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining().is_negative()
    }

    /// Spent and remaining, or `None` if either leaves the i64 cents range
    pub fn checked_totals(&self) -> Option<(Money, Money)> {
        let spent = self
            .transactions
            .iter()
            .try_fold(Money::zero(), |acc, t| acc.checked_add(t.amount))?;
        let remaining = self.budget.checked_sub(spent)?;
        Some((spent, remaining))
    }
}

/// Result of recording an expense
///
/// `remaining` is what was left in the category before the expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseOutcome {
    /// The expense fit within the remaining budget
    Recorded { remaining: Money },
    /// The expense was recorded but exceeds the remaining budget
    Overspent { remaining: Money },
}

/// All categories with their budgets and transactions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    categories: BTreeMap<String, CategoryBudget>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Look up a category's budget and transactions
    pub fn get(&self, category: &str) -> Option<&CategoryBudget> {
        self.categories.get(category)
    }

    /// Iterate categories in ascending name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryBudget)> {
        self.categories
            .iter()
            .map(|(name, budget)| (name.as_str(), budget))
    }

    /// Total number of transactions across all categories
    pub fn transaction_count(&self) -> usize {
        self.categories.values().map(|c| c.transactions.len()).sum()
    }

    /// Set a category's budget, creating the category if needed
    ///
    /// Replaces any previous budget and discards the category's transactions.
    pub fn set_budget(&mut self, category: impl Into<String>, amount: Money) {
        let category = category.into();
        tracing::debug!(category = %category, amount = %amount, "setting budget");
        self.categories.insert(category, CategoryBudget::new(amount));
    }

    /// Add funds to an existing category's budget
    ///
    /// Returns the new budget amount. Negative amounts reduce the budget.
    pub fn add_funds(&mut self, category: &str, amount: Money) -> TrackerResult<Money> {
        let entry = self
            .categories
            .get_mut(category)
            .ok_or_else(|| TrackerError::no_budget(category))?;

        let total = entry
            .budget
            .checked_add(amount)
            .filter(|total| total.checked_sub(entry.spent()).is_some())
            .ok_or_else(|| out_of_range(category, amount))?;

        entry.budget = total;
        tracing::debug!(category, amount = %amount, total = %entry.budget, "added funds");
        Ok(entry.budget)
    }

    /// Record an expense against an existing category
    ///
    /// An expense larger than what is left is still recorded; the outcome
    /// says whether it went over. Amounts that would take the category's
    /// totals out of range are rejected without recording anything.
    pub fn add_expense(
        &mut self,
        category: &str,
        amount: Money,
        description: impl Into<String>,
    ) -> TrackerResult<ExpenseOutcome> {
        let entry = self
            .categories
            .get_mut(category)
            .ok_or_else(|| TrackerError::no_budget(category))?;

        let remaining = entry.remaining();
        entry
            .spent()
            .checked_add(amount)
            .and_then(|spent| entry.budget.checked_sub(spent))
            .ok_or_else(|| out_of_range(category, amount))?;

        let outcome = if amount > remaining {
            tracing::info!(category, amount = %amount, remaining = %remaining, "expense exceeds remaining budget");
            ExpenseOutcome::Overspent { remaining }
        } else {
            ExpenseOutcome::Recorded { remaining }
        };

        entry.transactions.push(Transaction::new(amount, description));
        tracing::debug!(category, amount = %amount, "recorded expense");
        Ok(outcome)
    }

    /// Report for a single category
    pub fn view_budget(&self, category: &str) -> TrackerResult<BudgetReport> {
        BudgetReport::generate(self, category)
    }

    /// Summary of every category in name order
    pub fn view_all_budgets(&self) -> BudgetOverview {
        BudgetOverview::generate(self)
    }
}

fn out_of_range(category: &str, amount: Money) -> TrackerError {
    TrackerError::Validation(format!(
        "{} would take the totals for {} out of range",
        amount, category
    ))
}

impl FromIterator<(String, CategoryBudget)> for Ledger {
    fn from_iter<I: IntoIterator<Item = (String, CategoryBudget)>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}
