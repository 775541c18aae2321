//! Display formatting for terminal output
//!
//! Turns ledger outcomes and reports into the text shown to the user.

pub mod ledger;
pub mod report;

pub use ledger::{format_budget_set, format_expense, format_funds_added, format_no_budget};
pub use report::{format_budget_report, format_missing_report, format_overview};
