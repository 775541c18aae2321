//! Transaction model
//!
//! A transaction is an expense recorded against a category. Transactions are
//! immutable once recorded.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// An expense recorded against a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Amount spent (negative amounts act as refunds)
    pub amount: Money,

    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    /// Description to show for this transaction at a 1-based position
    ///
    /// Empty descriptions fall back to `Transaction {index}`.
    pub fn display_description(&self, index: usize) -> String {
        if self.description.is_empty() {
            format!("Transaction {}", index)
        } else {
            self.description.clone()
        }
    }
}
