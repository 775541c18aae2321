//! Export module for the budget tracker
//!
//! Full-dump exports of the ledger:
//! - CSV: one row per transaction (spreadsheet-compatible)
//! - JSON: every category with budget, spent, remaining and transactions

pub mod csv;
pub mod json;

pub use self::csv::{export_transactions_csv, TRANSACTIONS_HEADER};
pub use self::json::{export_full_json, LedgerExport, EXPORT_SCHEMA_VERSION};
