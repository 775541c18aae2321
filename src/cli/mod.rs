//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the ledger, plus the interactive menu.

pub mod budget;
pub mod export;
pub mod menu;

pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, ExportFormat};
pub use menu::{run_menu, Menu, MenuChoice};
