//! Income allocation engine
//!
//! Lets the user distribute one import batch's total income across their
//! envelopes before any balance changes. The remaining figure is purely
//! advisory: over-allocating flags a warning but never blocks the commit.

use std::collections::HashMap;

use crate::error::MoneyfoldResult;
use crate::models::{EnvelopeId, Money, Transaction};
use crate::storage::Storage;

use super::categorize::CategorizationSession;

/// An in-flight allocation of income across envelopes
///
/// Holds the batch's income and expense sets plus one allocation input per
/// envelope (absent means zero). Committing is all-or-nothing and hands the
/// expense set on to categorization.
#[derive(Debug, Clone)]
pub struct AllocationSession {
    income: Vec<Transaction>,
    expenses: Vec<Transaction>,
    inputs: HashMap<EnvelopeId, Money>,
}

impl AllocationSession {
    /// Start an allocation session over a batch's income and expense sets
    pub fn new(income: Vec<Transaction>, expenses: Vec<Transaction>) -> Self {
        Self {
            income,
            expenses,
            inputs: HashMap::new(),
        }
    }

    /// The income transactions still being allocated
    pub fn income(&self) -> &[Transaction] {
        &self.income
    }

    /// Total of the current income set, recomputed whenever it changes
    pub fn income_total(&self) -> Money {
        self.income.iter().map(|tx| tx.amount).sum()
    }

    /// Set the allocation input for an envelope
    pub fn set_allocation(&mut self, envelope_id: EnvelopeId, amount: Money) {
        self.inputs.insert(envelope_id, amount);
    }

    /// The allocation input for an envelope (zero when not entered)
    pub fn allocation(&self, envelope_id: EnvelopeId) -> Money {
        self.inputs.get(&envelope_id).copied().unwrap_or_default()
    }

    /// Sum of all allocation inputs
    pub fn allocated_total(&self) -> Money {
        self.inputs.values().copied().sum()
    }

    /// Income not yet covered by allocation inputs; may go negative
    pub fn remaining(&self) -> Money {
        self.income_total() - self.allocated_total()
    }

    /// Whether allocations exceed income (a warning signal, never an error)
    pub fn is_over_allocated(&self) -> bool {
        self.remaining().is_negative()
    }

    /// Move a misclassified income transaction into the expense set
    ///
    /// Allocation inputs already entered are left untouched, so the
    /// remaining figure may shift. Returns the moved transaction, or None
    /// when the index is out of range.
    pub fn remove_income_item(&mut self, index: usize) -> Option<Transaction> {
        if index >= self.income.len() {
            return None;
        }
        let moved = self.income.remove(index);
        self.expenses.push(moved.clone());
        Some(moved)
    }

    /// Apply every allocation input to its envelope and persist
    ///
    /// Unconditional: nothing validates the inputs against the
    /// income total, and a negative remaining does not block the commit.
    /// Inputs for envelopes that no longer exist are ignored. Hands back a
    /// categorization session over the expense set, cursor at zero.
    pub fn commit(self, storage: &Storage) -> MoneyfoldResult<CategorizationSession> {
        for (envelope_id, amount) in &self.inputs {
            storage.envelopes.credit(*envelope_id, *amount)?;
        }
        storage.envelopes.save()?;

        Ok(CategorizationSession::new(self.expenses))
    }
}
