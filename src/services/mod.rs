//! Service layer for Moneyfold
//!
//! The service layer provides business logic on top of the storage layer:
//! row normalization, batch import, the allocation and categorization
//! engines, and envelope/session management.

pub mod allocation;
pub mod categorize;
pub mod envelope;
pub mod import;
pub mod normalize;
pub mod session;

pub use allocation::AllocationSession;
pub use categorize::{CategorizationPrompt, CategorizationSession, CategorizationState};
pub use envelope::{CreateEnvelopeInput, EditEnvelopeInput, EnvelopeService};
pub use import::{read_rows, ImportBatch};
pub use normalize::{normalize_merchant, normalize_row, RawRow};
pub use session::SessionService;
