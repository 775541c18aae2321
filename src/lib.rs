//! Budget Tracker - console budget tracking by category
//!
//! Keeps a set of named spending categories, each with a budget amount and a
//! log of expenses. Supports adding funds, recording expenses with overspend
//! warnings, and reporting per category or across all categories. The ledger
//! is stored in a flat text file between runs.
//!
//! # Architecture
//!
//! - `models`: money, transactions and the ledger itself
//! - `reports`: per-category report and all-budgets overview
//! - `storage`: ledger file encoding and atomic persistence
//! - `display`: terminal formatting of messages and reports
//! - `cli`: clap subcommands and the interactive menu
//! - `export`: JSON and CSV dumps of the ledger
//! - `config`: data directory and user settings
//! - `error`: custom error types
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use budget_tracker::models::{Ledger, Money};
//!
//! let mut ledger = Ledger::new();
//! ledger.set_budget("Food", Money::parse("100.00").unwrap());
//! ledger.add_expense("Food", Money::parse("30.00").unwrap(), "Lunch").unwrap();
//!
//! let report = ledger.view_budget("Food").unwrap();
//! assert_eq!(report.remaining, Money::parse("70.00").unwrap());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
