//! Storage layer for Moneyfold
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Envelopes are stored per profile; merchant memory and the
//! session are installation-wide.

pub mod envelopes;
pub mod file_io;
pub mod merchant_memory;
pub mod session;

pub use envelopes::EnvelopeRepository;
pub use file_io::{read_json, write_json_atomic};
pub use merchant_memory::MerchantMemoryRepository;
pub use session::SessionRepository;

use crate::config::paths::MoneyfoldPaths;
use crate::error::MoneyfoldError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub envelopes: EnvelopeRepository,
    pub merchant_memory: MerchantMemoryRepository,
    pub session: SessionRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: MoneyfoldPaths) -> Result<Self, MoneyfoldError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            envelopes: EnvelopeRepository::new(paths.data_dir()),
            merchant_memory: MerchantMemoryRepository::new(paths.merchant_memory_file()),
            session: SessionRepository::new(paths.session_file()),
        })
    }

    /// Load installation-wide state, then the current profile's envelopes
    /// if a session is active
    pub fn load_all(&mut self) -> Result<(), MoneyfoldError> {
        self.merchant_memory.load()?;
        self.session.load()?;

        if let Some(profile) = self.session.current_profile()? {
            self.envelopes.load_profile(&profile)?;
        }
        Ok(())
    }
}
