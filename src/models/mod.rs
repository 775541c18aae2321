//! Core data models for the budget tracker
//!
//! This module contains the money type, transactions and the ledger that ties
//! categories to their budgets.

pub mod ledger;
pub mod money;
pub mod transaction;

pub use ledger::{CategoryBudget, ExpenseOutcome, Ledger};
pub use money::Money;
pub use transaction::Transaction;
