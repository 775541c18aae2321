//! CLI command for data export

use crate::error::TrackerResult;
use crate::export::{export_full_json, export_transactions_csv};
use crate::models::Ledger;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full ledger with totals)
    Json,
    /// CSV format (transactions only)
    Csv,
}

/// Export the ledger to `output` in the given format
pub fn handle_export_command(
    ledger: &Ledger,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> TrackerResult<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => {
            export_full_json(ledger, &mut writer, pretty)?;
            writer.flush()?;
            println!(
                "Exported {} categories ({} transactions) to {}",
                ledger.len(),
                ledger.transaction_count(),
                output.display()
            );
        }
        ExportFormat::Csv => {
            let rows = export_transactions_csv(ledger, &mut writer)?;
            writer.flush()?;
            println!("Exported {} transactions to {}", rows, output.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_export_to_files() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new();
        ledger.set_budget("Food", Money::from_cents(1000));
        ledger.add_expense("Food", Money::from_cents(250), "Snack").unwrap();

        let json_path = temp_dir.path().join("ledger.json");
        handle_export_command(&ledger, &json_path, ExportFormat::Json, true).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json["metadata"]["category_count"], 1);

        let csv_path = temp_dir.path().join("ledger.csv");
        handle_export_command(&ledger, &csv_path, ExportFormat::Csv, false).unwrap();
        let csv = std::fs::read_to_string(&csv_path).unwrap();
        assert!(csv.ends_with("Food,1,2.50,Snack\n"));
    }
}
