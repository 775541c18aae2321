//! Line-oriented text encoding of the ledger
//!
//! Each category is written as a header line followed by two lines per
//! transaction:
//!
//! ```text
//! <category>|<budget> <transaction count>
//! <amount>
//! <description>
//! ```
//!
//! Nothing is escaped. A category containing `|` or a line break, or a
//! description containing a line break, would make the file ambiguous, so the
//! encoder rejects them.

use std::collections::BTreeMap;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{CategoryBudget, Ledger, Money, Transaction};

const FIELD_SEPARATOR: char = '|';

/// Upper bound on the capacity reserved from a header's count field
const MAX_PREALLOCATED_TRANSACTIONS: usize = 1024;

/// Check that a category name can be stored in the ledger file
pub fn check_category(category: &str) -> TrackerResult<()> {
    if category.contains(FIELD_SEPARATOR) {
        return Err(TrackerError::Validation(format!(
            "category name '{}' must not contain '{}'",
            category, FIELD_SEPARATOR
        )));
    }
    if has_line_break(category) {
        return Err(TrackerError::Validation(format!(
            "category name '{}' must not contain line breaks",
            category.escape_debug()
        )));
    }
    Ok(())
}

/// Check that a transaction description can be stored in the ledger file
pub fn check_description(description: &str) -> TrackerResult<()> {
    if has_line_break(description) {
        return Err(TrackerError::Validation(format!(
            "description '{}' must not contain line breaks",
            description.escape_debug()
        )));
    }
    Ok(())
}

fn has_line_break(s: &str) -> bool {
    s.contains(['\n', '\r'])
}

/// Encode the ledger, categories in name order
pub fn encode(ledger: &Ledger) -> TrackerResult<String> {
    let mut output = String::new();

    for (name, entry) in ledger.iter() {
        check_category(name)?;
        output.push_str(&format!(
            "{}{}{} {}\n",
            name,
            FIELD_SEPARATOR,
            entry.budget.format_plain(),
            entry.transactions.len()
        ));

        for txn in &entry.transactions {
            check_description(&txn.description)?;
            output.push_str(&txn.amount.format_plain());
            output.push('\n');
            output.push_str(&txn.description);
            output.push('\n');
        }
    }

    Ok(output)
}

/// Decode a ledger from its text encoding
///
/// Blank lines between records are skipped. A description missing at the very
/// end of the input decodes as empty. When a category appears twice, the later
/// record wins.
pub fn decode(input: &str) -> TrackerResult<Ledger> {
    let mut categories: BTreeMap<String, CategoryBudget> = BTreeMap::new();
    let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line));

    while let Some((line_no, header)) = lines.next() {
        if header.trim().is_empty() {
            continue;
        }

        let (name, budget, count) = parse_header(header, line_no)?;

        let mut transactions = Vec::with_capacity(count.min(MAX_PREALLOCATED_TRANSACTIONS));
        for n in 1..=count {
            let (amount_line_no, amount_line) = lines.next().ok_or_else(|| {
                TrackerError::Storage(format!(
                    "line {}: category '{}' declares {} transactions but the file ends after {}",
                    line_no,
                    name,
                    count,
                    n - 1
                ))
            })?;
            let amount = Money::parse(amount_line).map_err(|e| {
                TrackerError::Storage(format!("line {}: {}", amount_line_no, e))
            })?;
            let description = lines
                .next()
                .map(|(_, line)| line.to_string())
                .unwrap_or_default();

            transactions.push(Transaction::new(amount, description));
        }

        let record = CategoryBudget {
            budget,
            transactions,
        };
        if record.checked_totals().is_none() {
            return Err(TrackerError::Storage(format!(
                "line {}: amounts for '{}' are out of range",
                line_no, name
            )));
        }

        let previous = categories.insert(name.to_string(), record);
        if previous.is_some() {
            tracing::warn!(category = name, line = line_no, "duplicate category in ledger file");
        }
    }

    Ok(categories.into_iter().collect())
}

fn parse_header(line: &str, line_no: usize) -> TrackerResult<(&str, Money, usize)> {
    let malformed = || {
        TrackerError::Storage(format!(
            "line {}: expected '<category>{}<budget> <count>', found '{}'",
            line_no, FIELD_SEPARATOR, line
        ))
    };

    let (name, rest) = line.split_once(FIELD_SEPARATOR).ok_or_else(malformed)?;

    let mut fields = rest.split_whitespace();
    let (Some(budget), Some(count), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(malformed());
    };

    let budget = Money::parse(budget)
        .map_err(|e| TrackerError::Storage(format!("line {}: {}", line_no, e)))?;
    let count = count.parse::<usize>().map_err(|_| {
        TrackerError::Storage(format!(
            "line {}: invalid transaction count '{}'",
            line_no, count
        ))
    })?;

    Ok((name, budget, count))
}
