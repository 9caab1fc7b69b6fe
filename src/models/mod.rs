//! Core data models for Moneyfold
//!
//! This module contains the data structures that represent the budgeting
//! domain: envelopes, normalized transactions, and money amounts.

pub mod envelope;
pub mod ids;
pub mod money;
pub mod transaction;

pub use envelope::Envelope;
pub use ids::EnvelopeId;
pub use money::Money;
pub use transaction::Transaction;
