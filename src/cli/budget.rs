//! Budget CLI commands
//!
//! One-shot commands for setting budgets, adding funds, recording expenses and
//! viewing reports.

use clap::Subcommand;
use std::io::Write;

use crate::config::Settings;
use crate::display;
use crate::error::TrackerResult;
use crate::models::{Ledger, Money};
use crate::storage::codec;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set a category's budget (creates the category, clears its expenses)
    Set {
        /// Category name
        category: String,
        /// Amount (e.g., "100" or "100.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Add funds to a category's budget
    Fund {
        /// Category name
        category: String,
        /// Amount to add (negative amounts reduce the budget)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Record an expense against a category
    #[command(alias = "expense")]
    Spend {
        /// Category name
        category: String,
        /// Amount spent (negative for a refund)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Show the report for one category
    #[command(alias = "view")]
    Show {
        /// Category name
        category: String,
    },

    /// Show a summary of every category
    #[command(alias = "ls")]
    List,
}

impl BudgetCommands {
    /// Whether the command changes the ledger
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Set { .. } | Self::Fund { .. } | Self::Spend { .. })
    }
}

/// Handle a budget command
///
/// Unknown categories are reported on `out` and leave the ledger untouched.
/// A mutation is applied before its confirmation is written, so the ledger
/// may have changed even when an error from `out` is returned.
pub fn handle_budget_command<W: Write>(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: BudgetCommands,
    out: &mut W,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, amount } => {
            codec::check_category(&category)?;
            let amount = Money::parse(&amount)?;

            ledger.set_budget(category.clone(), amount);
            writeln!(out, "{}", display::format_budget_set(&category, amount, symbol))?;
        }

        BudgetCommands::Fund { category, amount } => {
            let amount = Money::parse(&amount)?;

            match ledger.add_funds(&category, amount) {
                Ok(total) => {
                    writeln!(
                        out,
                        "{}",
                        display::format_funds_added(&category, amount, total, symbol)
                    )?;
                }
                Err(e) if e.is_no_budget() => {
                    writeln!(out, "{}", display::format_no_budget(&category))?;
                }
                Err(e) => return Err(e),
            }
        }

        BudgetCommands::Spend {
            category,
            amount,
            description,
        } => {
            let description = description.unwrap_or_default();
            codec::check_description(&description)?;
            let amount = Money::parse(&amount)?;

            match ledger.add_expense(&category, amount, description) {
                Ok(outcome) => {
                    writeln!(
                        out,
                        "{}",
                        display::format_expense(&category, amount, outcome, symbol)
                    )?;
                }
                Err(e) if e.is_no_budget() => {
                    writeln!(out, "{}", display::format_no_budget(&category))?;
                }
                Err(e) => return Err(e),
            }
        }

        BudgetCommands::Show { category } => {
            match ledger.view_budget(&category) {
                Ok(report) => write!(out, "{}", display::format_budget_report(&report, symbol))?,
                Err(e) if e.is_no_budget() => {
                    write!(out, "{}", display::format_missing_report(&category))?
                }
                Err(e) => return Err(e),
            }
        }

        BudgetCommands::List => {
            let overview = ledger.view_all_budgets();
            write!(out, "{}", display::format_overview(&overview, symbol))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ledger: &mut Ledger, cmd: BudgetCommands) -> (bool, String) {
        let before = ledger.clone();
        let mut out = Vec::new();
        handle_budget_command(ledger, &Settings::default(), cmd, &mut out).unwrap();
        (*ledger != before, String::from_utf8(out).unwrap())
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn spend(category: &str, amount: &str, description: &str) -> BudgetCommands {
        BudgetCommands::Spend {
            category: category.into(),
            amount: amount.into(),
            description: Some(description.into()).filter(|d: &String| !d.is_empty()),
        }
    }

    #[test]
    fn test_set_spend_and_show() {
        let mut ledger = Ledger::new();

        let (changed, out) = run(
            &mut ledger,
            BudgetCommands::Set {
                category: "Food".into(),
                amount: "100".into(),
            },
        );
        assert!(changed);
        assert_eq!(out, "Budget for Food set to $100.00\n");

        let (_, out) = run(&mut ledger, spend("Food", "30", "Lunch"));
        assert_eq!(out, "Expense of $30.00 added to Food\n");

        let (changed, out) = run(&mut ledger, spend("Food", "80.00", ""));
        assert!(changed);
        assert_eq!(
            out,
            "Warning: This expense ($80.00) exceeds remaining budget ($70.00) for Food\n"
        );

        let (changed, out) = run(
            &mut ledger,
            BudgetCommands::Show {
                category: "Food".into(),
            },
        );
        assert!(!changed);
        assert!(out.contains("Remaining: -$10.00\n"));
        assert!(out.contains("2. $80.00 - Transaction 2\n"));
    }

    #[test]
    fn test_unknown_category_reports_and_does_not_change() {
        let mut ledger = Ledger::new();

        let (changed, out) = run(&mut ledger, spend("Food", "1", ""));
        assert!(!changed);
        assert_eq!(out, "No budget set for Food. Please set a budget first.\n");

        let (changed, out) = run(
            &mut ledger,
            BudgetCommands::Fund {
                category: "Food".into(),
                amount: "1".into(),
            },
        );
        assert!(!changed);
        assert_eq!(out, "No budget set for Food. Please set a budget first.\n");

        let (_, out) = run(
            &mut ledger,
            BudgetCommands::Show {
                category: "Food".into(),
            },
        );
        assert_eq!(out, "No budget set for Food\n");

        assert!(ledger.is_empty());
    }

    #[test]
    fn test_fund_negative_amount() {
        let mut ledger = Ledger::new();
        ledger.set_budget("Food", Money::from_cents(1000));

        let (changed, out) = run(
            &mut ledger,
            BudgetCommands::Fund {
                category: "Food".into(),
                amount: "-2.50".into(),
            },
        );
        assert!(changed);
        assert_eq!(out, "-$2.50 added to Food. New total: $7.50\n");
    }

    #[test]
    fn test_list_empty() {
        let (changed, out) = run(&mut Ledger::new(), BudgetCommands::List);
        assert!(!changed);
        assert_eq!(out, "No budgets set yet\n");
    }

    #[test]
    fn test_invalid_input_is_rejected_before_mutation() {
        let mut ledger = Ledger::new();
        let mut out = Vec::new();

        let err = handle_budget_command(
            &mut ledger,
            &Settings::default(),
            BudgetCommands::Set {
                category: "A|B".into(),
                amount: "1".into(),
            },
            &mut out,
        )
        .unwrap_err();
        assert!(err.is_validation());

        let err = handle_budget_command(
            &mut ledger,
            &Settings::default(),
            BudgetCommands::Set {
                category: "Food".into(),
                amount: "ten".into(),
            },
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, crate::error::TrackerError::Parse(_)));

        assert!(ledger.is_empty());
    }

    #[test]
    fn test_mutation_is_applied_when_output_fails() {
        let mut ledger = Ledger::new();

        let err = handle_budget_command(
            &mut ledger,
            &Settings::default(),
            BudgetCommands::Set {
                category: "Food".into(),
                amount: "100".into(),
            },
            &mut ClosedPipe,
        )
        .unwrap_err();

        assert!(matches!(err, crate::error::TrackerError::Io(_)));
        assert_eq!(ledger.get("Food").unwrap().budget, Money::from_cents(10000));
    }

    #[test]
    fn test_is_mutation() {
        assert!(spend("Food", "1", "").is_mutation());
        assert!(!BudgetCommands::List.is_mutation());
        assert!(!BudgetCommands::Show {
            category: "Food".into()
        }
        .is_mutation());
    }
}
