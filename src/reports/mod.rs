//! Reports derived from the ledger
//!
//! Spent and remaining amounts are computed fresh from the transactions every
//! time a report is generated.

pub mod category_report;
pub mod overview;

pub use category_report::{BudgetReport, TransactionLine};
pub use overview::{BudgetOverview, BudgetSummaryRow};
