//! All-budgets overview
//!
//! One summary row per category, in category name order, plus grand totals.

use crate::models::{Ledger, Money};

/// Summary of a single category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSummaryRow {
    pub category: String,
    pub budget: Money,
    pub spent: Money,
    pub remaining: Money,
}

/// Overview of every category in the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetOverview {
    pub rows: Vec<BudgetSummaryRow>,
    pub total_budget: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
}

impl BudgetOverview {
    /// Generate the overview from a ledger
    pub fn generate(ledger: &Ledger) -> Self {
        let mut overview = Self {
            rows: Vec::with_capacity(ledger.len()),
            total_budget: Money::zero(),
            total_spent: Money::zero(),
            total_remaining: Money::zero(),
        };

        for (name, entry) in ledger.iter() {
            let row = BudgetSummaryRow {
                category: name.to_string(),
                budget: entry.budget,
                spent: entry.spent(),
                remaining: entry.remaining(),
            };
            overview.total_budget += row.budget;
            overview.total_spent += row.spent;
            overview.total_remaining += row.remaining;
            overview.rows.push(row);
        }

        overview
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        Money::parse(s).unwrap()
    }

    #[test]
    fn test_empty_ledger() {
        let overview = Ledger::new().view_all_budgets();
        assert!(overview.is_empty());
        assert_eq!(overview.total_budget, Money::zero());
    }

    #[test]
    fn test_rows_sorted_with_totals() {
        let mut ledger = Ledger::new();
        ledger.set_budget("Savings", money("234.37"));
        ledger.set_budget("Brotherhood", money("3334.66"));
        ledger.add_expense("Savings", money("300.00"), "").unwrap();

        let overview = BudgetOverview::generate(&ledger);
        let names: Vec<&str> = overview.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["Brotherhood", "Savings"]);

        assert_eq!(overview.rows[1].spent, money("300.00"));
        assert_eq!(overview.rows[1].remaining, money("-65.63"));
        assert_eq!(overview.total_budget, money("3569.03"));
        assert_eq!(overview.total_spent, money("300.00"));
        assert_eq!(overview.total_remaining, money("3269.03"));

    }
}
