//! Expense categorization engine
//!
//! Walks the expense set one transaction at a time, consulting merchant
//! memory for a "same as last time?" suggestion, and applies the user's
//! envelope choice by decreasing that envelope's balance and recording the
//! merchant association for next time.
//!
//! The engine is an explicit state machine over a forward-only cursor.
//! Presentation asks for the current [`CategorizationState`], shows the
//! prompt, and feeds the choice back through [`CategorizationSession::apply`]
//! or [`CategorizationSession::skip`].

use crate::error::MoneyfoldResult;
use crate::models::{Envelope, EnvelopeId, Transaction};
use crate::storage::Storage;

use super::normalize::normalize_merchant;

/// What to ask the user for the transaction under the cursor
#[derive(Debug, Clone)]
pub enum CategorizationPrompt {
    /// Merchant memory has a live suggestion: offer to repeat it. The user
    /// may still reject it and pick from the full list.
    Suggestion { envelope: Envelope },

    /// No usable memory: present every envelope as a choice
    ChooseFrom { envelopes: Vec<Envelope> },
}

/// The engine's externally visible state
#[derive(Debug, Clone)]
pub enum CategorizationState {
    /// A transaction awaits an envelope choice (or a skip)
    AwaitingChoice {
        index: usize,
        transaction: Transaction,
        merchant: String,
        prompt: CategorizationPrompt,
    },

    /// Every expense has been visited; no further prompts
    Done,
}

/// A resumable walk over one batch's expense transactions
#[derive(Debug, Clone)]
pub struct CategorizationSession {
    expenses: Vec<Transaction>,
    cursor: usize,
}

impl CategorizationSession {
    /// Start a session over an expense set, cursor at zero
    pub fn new(expenses: Vec<Transaction>) -> Self {
        Self {
            expenses,
            cursor: 0,
        }
    }

    /// Current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of expense transactions in the session
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the session holds no expenses at all
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Whether every expense has been visited
    pub fn is_done(&self) -> bool {
        self.cursor >= self.expenses.len()
    }

    /// Evaluate the current state against the live envelope collection and
    /// merchant memory
    ///
    /// A remembered envelope that has since been deleted counts as "no
    /// memory" and falls back to the full choice list.
    pub fn state(&self, storage: &Storage) -> MoneyfoldResult<CategorizationState> {
        if self.is_done() {
            return Ok(CategorizationState::Done);
        }

        let transaction = self.expenses[self.cursor].clone();
        let merchant = normalize_merchant(&transaction.description);

        let prompt = match self.remembered_envelope(storage, &merchant)? {
            Some(envelope) => CategorizationPrompt::Suggestion { envelope },
            None => CategorizationPrompt::ChooseFrom {
                envelopes: storage.envelopes.get_all()?,
            },
        };

        Ok(CategorizationState::AwaitingChoice {
            index: self.cursor,
            transaction,
            merchant,
            prompt,
        })
    }

    /// Look up a merchant's remembered envelope, ignoring stale entries
    fn remembered_envelope(
        &self,
        storage: &Storage,
        merchant: &str,
    ) -> MoneyfoldResult<Option<Envelope>> {
        let Some(envelope_id) = storage.merchant_memory.get(merchant)? else {
            return Ok(None);
        };
        storage.envelopes.get(envelope_id)
    }

    /// Assign the current transaction to an envelope and advance
    ///
    /// Adds the transaction amount to the envelope's balance (negative for
    /// genuine expenses, so the balance drops) and records the merchant
    /// association. Both mutations persist immediately. A choice naming an
    /// envelope that no longer exists advances the cursor without touching
    /// anything, matching how a stale choice behaves upstream.
    pub fn apply(&mut self, storage: &Storage, envelope_id: EnvelopeId) -> MoneyfoldResult<()> {
        if self.is_done() {
            return Ok(());
        }

        let transaction = &self.expenses[self.cursor];

        if storage.envelopes.credit(envelope_id, transaction.amount)? {
            storage.envelopes.save()?;

            let merchant = normalize_merchant(&transaction.description);
            if !merchant.is_empty() {
                storage.merchant_memory.set(&merchant, envelope_id)?;
                storage.merchant_memory.save()?;
            }
        }

        self.cursor += 1;
        Ok(())
    }

    /// Advance past the current transaction without touching any state
    pub fn skip(&mut self) {
        if !self.is_done() {
            self.cursor += 1;
        }
    }
}
