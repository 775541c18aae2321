//! JSON Export functionality
//!
//! Exports the whole ledger, with derived spent/remaining figures, as a single
//! JSON document. Amounts are integer cents.

use crate::error::TrackerResult;
use crate::models::{Ledger, Money, Transaction};
use serde::Serialize;
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Application version that created the export
    pub app_version: String,

    /// Every category in name order
    pub categories: Vec<CategoryExport>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// One category in the export
#[derive(Debug, Clone, Serialize)]
pub struct CategoryExport {
    pub name: String,
    pub budget: Money,
    pub spent: Money,
    pub remaining: Money,
    pub overspent: bool,
    pub transactions: Vec<Transaction>,
}

/// Totals across the ledger
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub category_count: usize,
    pub transaction_count: usize,
    pub total_budget: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
}

impl LedgerExport {
    /// Build an export from a ledger
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let overview = ledger.view_all_budgets();

        let categories = ledger
            .iter()
            .map(|(name, entry)| CategoryExport {
                name: name.to_string(),
                budget: entry.budget,
                spent: entry.spent(),
                remaining: entry.remaining(),
                overspent: entry.is_overspent(),
                transactions: entry.transactions.clone(),
            })
            .collect();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            categories,
            metadata: ExportMetadata {
                category_count: ledger.len(),
                transaction_count: ledger.transaction_count(),
                total_budget: overview.total_budget,
                total_spent: overview.total_spent,
                total_remaining: overview.total_remaining,
            },
        }
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(ledger: &Ledger, writer: &mut W, pretty: bool) -> TrackerResult<()> {
    let export = LedgerExport::from_ledger(ledger);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)?;
    } else {
        serde_json::to_writer(&mut *writer, &export)?;
    }
    writeln!(writer)?;

    Ok(())
}
