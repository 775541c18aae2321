//! Interactive numbered menu
//!
//! Reads choices line by line and applies them to the ledger. Categories are
//! picked by their position in a fixed list. The menu returns when the user
//! chooses Exit or input runs out; saving is left to the caller.

use std::io::{BufRead, Write};

use crate::display;
use crate::error::TrackerResult;
use crate::models::{Ledger, Money};
use crate::storage::codec;

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    AddFunds,
    ViewBudget,
    ViewAll,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection (1-5)
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(Self::AddExpense),
            2 => Some(Self::AddFunds),
            3 => Some(Self::ViewBudget),
            4 => Some(Self::ViewAll),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The interactive menu over a ledger
pub struct Menu<'a, R, W> {
    ledger: &'a mut Ledger,
    categories: &'a [String],
    symbol: &'a str,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        ledger: &'a mut Ledger,
        categories: &'a [String],
        symbol: &'a str,
        input: R,
        output: W,
    ) -> Self {
        Self {
            ledger,
            categories,
            symbol,
            input,
            output,
        }
    }

    /// Run until Exit is chosen or input ends
    pub fn run(&mut self) -> TrackerResult<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice (1-5): ")? else {
                writeln!(self.output)?;
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::AddExpense) => self.add_expense()?,
                Some(MenuChoice::AddFunds) => self.add_funds()?,
                Some(MenuChoice::ViewBudget) => self.view_budget()?,
                Some(MenuChoice::ViewAll) => {
                    let overview = self.ledger.view_all_budgets();
                    write!(self.output, "{}", display::format_overview(&overview, self.symbol))?;
                }
                Some(MenuChoice::Exit) => break,
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> TrackerResult<()> {
        writeln!(self.output, "\nBudget Tracker Menu:")?;
        writeln!(self.output, "1. Add Expense")?;
        writeln!(self.output, "2. Add Funds to Budget")?;
        writeln!(self.output, "3. View Specific Budget")?;
        writeln!(self.output, "4. View All Budgets")?;
        writeln!(self.output, "5. Exit")?;
        Ok(())
    }

    /// Write a prompt and read one line without its line ending
    fn prompt(&mut self, text: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// List the categories and ask for one by number
    fn select_category(&mut self) -> TrackerResult<Option<String>> {
        writeln!(self.output, "\nAvailable categories:")?;
        for (i, name) in self.categories.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, name)?;
        }

        let Some(line) = self.prompt("Select category number: ")? else {
            return Ok(None);
        };

        let selected = line
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.categories.get(i))
            .cloned();

        if selected.is_none() {
            writeln!(self.output, "Invalid category number")?;
        }
        Ok(selected)
    }

    fn read_amount(&mut self, text: &str) -> TrackerResult<Option<Money>> {
        let Some(line) = self.prompt(text)? else {
            return Ok(None);
        };

        match Money::parse(&line) {
            Ok(amount) => Ok(Some(amount)),
            Err(e) => {
                tracing::debug!(input = %line, error = %e, "rejected amount");
                writeln!(self.output, "Invalid amount")?;
                Ok(None)
            }
        }
    }

    fn add_expense(&mut self) -> TrackerResult<()> {
        let Some(category) = self.select_category()? else {
            return Ok(());
        };
        let Some(amount) = self.read_amount("Enter expense amount: $")? else {
            return Ok(());
        };
        let description = self
            .prompt("Enter description (optional, press Enter to skip): ")?
            .unwrap_or_default();
        if let Err(e) = codec::check_description(&description) {
            tracing::debug!(error = %e, "rejected description");
            writeln!(self.output, "Invalid description")?;
            return Ok(());
        }

        match self.ledger.add_expense(&category, amount, description) {
            Ok(outcome) => writeln!(
                self.output,
                "{}",
                display::format_expense(&category, amount, outcome, self.symbol)
            )?,
            Err(e) if e.is_no_budget() => {
                writeln!(self.output, "{}", display::format_no_budget(&category))?
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn add_funds(&mut self) -> TrackerResult<()> {
        let Some(category) = self.select_category()? else {
            return Ok(());
        };
        let Some(amount) = self.read_amount("Enter amount to add: $")? else {
            return Ok(());
        };

        match self.ledger.add_funds(&category, amount) {
            Ok(total) => writeln!(
                self.output,
                "{}",
                display::format_funds_added(&category, amount, total, self.symbol)
            )?,
            Err(e) if e.is_no_budget() => {
                writeln!(self.output, "{}", display::format_no_budget(&category))?
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn view_budget(&mut self) -> TrackerResult<()> {
        let Some(category) = self.select_category()? else {
            return Ok(());
        };

        match self.ledger.view_budget(&category) {
            Ok(report) => write!(
                self.output,
                "{}",
                display::format_budget_report(&report, self.symbol)
            )?,
            Err(e) if e.is_no_budget() => {
                write!(self.output, "{}", display::format_missing_report(&category))?
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }
}

/// Run the interactive menu over `ledger`
pub fn run_menu<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    categories: &[String],
    symbol: &str,
    input: R,
    output: W,
) -> TrackerResult<()> {
    Menu::new(ledger, categories, symbol, input, output).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<String> {
        vec!["Food".to_string(), "Gas".to_string(), "Rent".to_string()]
    }

    fn ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.set_budget("Food", Money::from_cents(10000));
        ledger.set_budget("Gas", Money::from_cents(5000));
        ledger
    }

    fn run(ledger: &mut Ledger, input: &str) -> String {
        let mut output = Vec::new();
        run_menu(ledger, &categories(), "$", input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddExpense));
        assert_eq!(MenuChoice::parse(" 5 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("x"), None);
    }

    #[test]
    fn test_add_expenses_with_overspend() {
        let mut ledger = ledger();
        let output = run(&mut ledger, "1\n1\n30\nLunch\n1\n1\n80.00\n\n5\n");

        assert!(output.contains("Expense of $30.00 added to Food\n"));
        assert!(output.contains(
            "Warning: This expense ($80.00) exceeds remaining budget ($70.00) for Food\n"
        ));
        assert!(output.ends_with("Goodbye!\n"));

        let food = ledger.get("Food").unwrap();
        assert_eq!(food.transactions.len(), 2);
        assert_eq!(food.transactions[0].description, "Lunch");
        assert_eq!(food.transactions[1].description, "");
    }

    #[test]
    fn test_add_funds_and_view() {
        let mut ledger = ledger();
        let output = run(&mut ledger, "2\n2\n12.50\n3\n2\n5\n");

        assert!(output.contains("$12.50 added to Gas. New total: $62.50\n"));
        assert!(output.contains("Budget Report for Gas:\nCurrent Budget: $62.50\n"));
    }

    #[test]
    fn test_category_without_budget() {
        let mut ledger = ledger();
        let output = run(&mut ledger, "1\n3\n10\n\n3\n3\n5\n");

        assert!(output.contains("No budget set for Rent. Please set a budget first.\n"));
        assert!(output.contains("No budget set for Rent\n"));
        assert!(!ledger.contains("Rent"));
    }

    #[test]
    fn test_invalid_inputs() {
        let mut ledger = ledger();
        let before = ledger.clone();
        let output = run(&mut ledger, "9\nabc\n1\n0\n1\n4\n2\n1\nlots\n5\n");

        assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
        assert_eq!(output.matches("Invalid category number").count(), 2);
        assert!(output.contains("Invalid amount\n"));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_view_all() {
        let mut ledger = ledger();
        let output = run(&mut ledger, "4\n5\n");

        assert!(output.contains(
            "\nAll Budgets Summary:\n\
             Food: Current: $100.00 | Spent: $0.00 | Remaining: $100.00\n\
             Gas: Current: $50.00 | Spent: $0.00 | Remaining: $50.00\n"
        ));
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut ledger = ledger();
        let output = run(&mut ledger, "4\n");
        assert!(output.ends_with("Goodbye!\n"));

        let output = run(&mut ledger, "");
        assert!(output.starts_with("\nBudget Tracker Menu:\n"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_description_with_line_break_is_rejected() {
        let mut ledger = ledger();
        let before = ledger.clone();
        let output = run(&mut ledger, "1\n1\n5\na\rb\n5\n");

        assert!(output.contains("Invalid description\n"));
        assert!(!output.contains("Expense of"));
        assert_eq!(ledger, before);
        assert!(codec::encode(&ledger).is_ok());
    }

    #[test]
    fn test_end_of_input_during_description_records_expense() {
        let mut ledger = ledger();
        run(&mut ledger, "1\n2\n5");

        let gas = ledger.get("Gas").unwrap();
        assert_eq!(gas.transactions.len(), 1);
        assert_eq!(gas.transactions[0].amount, Money::from_cents(500));
    }
}
