//! Envelope management service
//!
//! Business logic for creating, editing, and deleting envelopes on top of
//! the per-profile repository. Every mutation persists immediately.

use crate::error::{MoneyfoldError, MoneyfoldResult};
use crate::models::{Envelope, EnvelopeId, Money};
use crate::storage::Storage;

/// Input for creating an envelope
#[derive(Debug, Clone)]
pub struct CreateEnvelopeInput {
    pub title: String,
    pub balance: Money,
    pub target: Money,
}

/// Input for editing an envelope; None leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct EditEnvelopeInput {
    pub title: Option<String>,
    pub balance: Option<Money>,
    pub target: Option<Money>,
}

/// Service for envelope management
pub struct EnvelopeService<'a> {
    storage: &'a Storage,
}

impl<'a> EnvelopeService<'a> {
    /// Create a new envelope service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new envelope
    pub fn create(&self, input: CreateEnvelopeInput) -> MoneyfoldResult<Envelope> {
        let envelope = Envelope::new(input.title.trim(), input.balance, input.target);
        envelope
            .validate()
            .map_err(|e| MoneyfoldError::Validation(e.to_string()))?;

        self.storage.envelopes.upsert(envelope.clone())?;
        self.storage.envelopes.save()?;
        Ok(envelope)
    }

    /// Edit an existing envelope
    pub fn edit(&self, identifier: &str, input: EditEnvelopeInput) -> MoneyfoldResult<Envelope> {
        let mut envelope = self
            .find(identifier)?
            .ok_or_else(|| MoneyfoldError::envelope_not_found(identifier))?;

        if let Some(title) = input.title {
            // A blank new title keeps the old one
            let trimmed = title.trim().to_string();
            if !trimmed.is_empty() {
                envelope.title = trimmed;
            }
        }
        if let Some(balance) = input.balance {
            envelope.balance = balance;
        }
        if let Some(target) = input.target {
            envelope.target = target;
        }

        envelope
            .validate()
            .map_err(|e| MoneyfoldError::Validation(e.to_string()))?;
        envelope.updated_at = chrono::Utc::now();

        self.storage.envelopes.upsert(envelope.clone())?;
        self.storage.envelopes.save()?;
        Ok(envelope)
    }

    /// Delete an envelope by ID or title
    ///
    /// Merchant memory entries pointing at it are left in place; the
    /// categorization engine ignores stale entries.
    pub fn delete(&self, identifier: &str) -> MoneyfoldResult<Envelope> {
        let envelope = self
            .find(identifier)?
            .ok_or_else(|| MoneyfoldError::envelope_not_found(identifier))?;

        self.storage.envelopes.delete(envelope.id)?;
        self.storage.envelopes.save()?;
        Ok(envelope)
    }

    /// Find an envelope by ID or title
    pub fn find(&self, identifier: &str) -> MoneyfoldResult<Option<Envelope>> {
        if let Ok(id) = identifier.parse::<EnvelopeId>() {
            if let Some(envelope) = self.storage.envelopes.get(id)? {
                return Ok(Some(envelope));
            }
        }
        self.storage.envelopes.get_by_title(identifier)
    }

    /// List all envelopes in stable order
    pub fn list(&self) -> MoneyfoldResult<Vec<Envelope>> {
        self.storage.envelopes.get_all()
    }

    /// Total balance across all envelopes
    pub fn total_balance(&self) -> MoneyfoldResult<Money> {
        self.storage.envelopes.total_balance()
    }
}
