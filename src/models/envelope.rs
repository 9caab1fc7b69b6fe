//! Envelope model
//!
//! An envelope is a named budget bucket holding a balance and an optional
//! savings target. Balances are signed and may go negative; the target is
//! advisory and zero means "no target".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EnvelopeId;
use super::money::Money;

/// A budget envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Unique identifier, stable for the envelope's lifetime
    pub id: EnvelopeId,

    /// Display title
    pub title: String,

    /// Current balance; no floor is enforced
    pub balance: Money,

    /// Savings target; zero means no target
    #[serde(default)]
    pub target: Money,

    /// When the envelope was created
    pub created_at: DateTime<Utc>,

    /// When the envelope was last modified
    pub updated_at: DateTime<Utc>,
}

impl Envelope {
    /// Create a new envelope
    pub fn new(title: impl Into<String>, balance: Money, target: Money) -> Self {
        let now = Utc::now();
        Self {
            id: EnvelopeId::new(),
            title: title.into(),
            balance,
            target,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this envelope has a savings target
    pub fn has_target(&self) -> bool {
        self.target.is_positive()
    }

    /// Progress toward the target as a percentage, clamped to 0-100
    ///
    /// Returns 0 when no target is set.
    pub fn target_progress(&self) -> u8 {
        if !self.has_target() || !self.balance.is_positive() {
            return 0;
        }
        let pct = self.balance.cents() as f64 / self.target.cents() as f64 * 100.0;
        pct.min(100.0) as u8
    }

    /// Add an amount to the balance (negative amounts decrease it)
    pub fn credit(&mut self, amount: Money) {
        self.balance += amount;
        self.updated_at = Utc::now();
    }

    /// Validate the envelope
    pub fn validate(&self) -> Result<(), EnvelopeValidationError> {
        if self.title.trim().is_empty() {
            return Err(EnvelopeValidationError::EmptyTitle);
        }

        if self.target.is_negative() {
            return Err(EnvelopeValidationError::NegativeTarget);
        }

        Ok(())
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Validation errors for envelopes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeValidationError {
    EmptyTitle,
    NegativeTarget,
}

impl fmt::Display for EnvelopeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Envelope title cannot be empty"),
            Self::NegativeTarget => write!(f, "Envelope target cannot be negative"),
        }
    }
}

impl std::error::Error for EnvelopeValidationError {}
