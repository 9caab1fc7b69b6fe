//! Normalized transaction model
//!
//! A `Transaction` is the canonical shape produced by the row normalizer
//! from heterogeneous bank exports. It lives only for the duration of one
//! import batch and is never persisted.
//!
//! The date is kept as the origin-preserved free-form string: source
//! formats vary too much across banks to parse into a structured date
//! safely, and the date is display-only downstream.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A normalized bank transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Origin-preserved date text; may be empty
    pub date: String,

    /// Description as exported by the bank
    pub description: String,

    /// Signed amount: positive = inflow, non-positive = outflow.
    /// The normalizer never retains a zero amount.
    pub amount: Money,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(date: impl Into<String>, description: impl Into<String>, amount: Money) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount,
        }
    }

    /// Whether this transaction is income (strictly positive amount)
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    /// Whether this transaction is an expense (zero or negative amount)
    pub fn is_expense(&self) -> bool {
        !self.amount.is_positive()
    }

    /// Whether every field is empty (such rows carry no information)
    pub fn is_empty(&self) -> bool {
        self.date.is_empty() && self.description.is_empty() && self.amount.is_zero()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.date, self.description, self.amount)
    }
}
