//! Display formatting for terminal output
//!
//! Provides utilities for formatting envelopes and transactions for
//! terminal display: tables, register views, and progress indicators.

pub mod envelope;
pub mod transaction;

pub use envelope::{format_envelope_list, format_envelope_row};
pub use transaction::{format_transaction_register, format_transaction_row};
