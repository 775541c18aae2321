//! CSV Export functionality
//!
//! Exports every transaction as one row, grouped by category in name order.

use crate::error::TrackerResult;
use crate::models::Ledger;
use std::io::Write;

/// Header row of the transaction export
pub const TRANSACTIONS_HEADER: [&str; 4] = ["Category", "Index", "Amount", "Description"];

/// Export all transactions to CSV, returning the number of rows written
pub fn export_transactions_csv<W: Write>(ledger: &Ledger, writer: W) -> TrackerResult<usize> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv.write_record(TRANSACTIONS_HEADER)?;

    let mut rows = 0;
    for (name, entry) in ledger.iter() {
        for (i, txn) in entry.transactions.iter().enumerate() {
            let index = (i + 1).to_string();
            let amount = txn.amount.format_plain();
            csv.write_record([name, index.as_str(), amount.as_str(), txn.description.as_str()])?;
            rows += 1;
        }
    }

    csv.flush()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_export_transactions_csv() {
        let mut ledger = Ledger::new();
        ledger.set_budget("Food", Money::from_cents(10000));
        ledger
            .add_expense("Food", Money::from_cents(3000), "Lunch, with tip")
            .unwrap();
        ledger
            .add_expense("Food", Money::from_cents(-250), "")
            .unwrap();
        ledger.set_budget("Gas", Money::from_cents(5000));

        let mut output = Vec::new();
        let rows = export_transactions_csv(&ledger, &mut output).unwrap();

        assert_eq!(rows, 2);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Category,Index,Amount,Description\n\
             Food,1,30.00,\"Lunch, with tip\"\n\
             Food,2,-2.50,\n"
        );
    }

    #[test]
    fn test_empty_ledger_writes_header_only() {
        let mut output = Vec::new();
        let rows = export_transactions_csv(&Ledger::new(), &mut output).unwrap();

        assert_eq!(rows, 0);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Category,Index,Amount,Description\n"
        );
    }
}
