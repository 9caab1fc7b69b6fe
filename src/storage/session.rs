//! Session repository
//!
//! Persists which profile is currently logged in, so a later invocation
//! picks up where the user left off.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::MoneyfoldError;

use super::file_io::{read_json, write_json_atomic};

/// Serializable session state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionData {
    current_profile: Option<String>,
}

/// Repository for the current session
pub struct SessionRepository {
    path: PathBuf,
    data: RwLock<SessionData>,
}

impl SessionRepository {
    /// Create a new session repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(SessionData::default()),
        }
    }

    /// Load the session from disk (missing file means no one is logged in)
    pub fn load(&self) -> Result<(), MoneyfoldError> {
        let file_data: SessionData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data;
        Ok(())
    }

    /// Save the session to disk
    pub fn save(&self) -> Result<(), MoneyfoldError> {
        let data = self.data.read().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        write_json_atomic(&self.path, &*data)
    }

    /// Get the current profile, if any
    pub fn current_profile(&self) -> Result<Option<String>, MoneyfoldError> {
        let data = self.data.read().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.current_profile.clone())
    }

    /// Set the current profile
    pub fn set_current_profile(&self, profile: &str) -> Result<(), MoneyfoldError> {
        let mut data = self.data.write().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.current_profile = Some(profile.to_string());
        Ok(())
    }

    /// Clear the current profile
    pub fn clear(&self) -> Result<(), MoneyfoldError> {
        let mut data = self.data.write().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.current_profile = None;
        Ok(())
    }
}
