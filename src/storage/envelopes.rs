//! Envelope repository for JSON storage
//!
//! Envelopes are scoped per profile: each profile's collection lives in its
//! own `envelopes_<profile>.json` file, and exactly one profile's envelopes
//! are loaded at a time. Collection order is preserved as creation order,
//! since the allocation and categorization workflows present envelopes in a
//! stable order.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::MoneyfoldError;
use crate::models::{Envelope, EnvelopeId, Money};

use super::file_io::{read_json, write_json_atomic};

/// Serializable envelope data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct EnvelopeData {
    envelopes: Vec<Envelope>,
}

/// Repository for envelope persistence
pub struct EnvelopeRepository {
    data_dir: PathBuf,
    profile: RwLock<Option<String>>,
    data: RwLock<Vec<Envelope>>,
}

impl EnvelopeRepository {
    /// Create a new envelope repository rooted at the given data directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            profile: RwLock::new(None),
            data: RwLock::new(Vec::new()),
        }
    }

    fn file_for(&self, profile: &str) -> PathBuf {
        self.data_dir.join(format!("envelopes_{}.json", profile))
    }

    /// Load the envelope collection for a profile, replacing any loaded one
    ///
    /// A missing file yields an empty collection.
    pub fn load_profile(&self, profile: &str) -> Result<(), MoneyfoldError> {
        let file_data: EnvelopeData = read_json(self.file_for(profile))?;

        let mut current = self.profile.write().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut data = self.data.write().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *current = Some(profile.to_string());
        *data = file_data.envelopes;

        Ok(())
    }

    /// Drop the loaded collection without saving
    pub fn unload(&self) -> Result<(), MoneyfoldError> {
        let mut current = self.profile.write().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut data = self.data.write().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *current = None;
        data.clear();

        Ok(())
    }

    /// Save the loaded collection back to its profile's file
    pub fn save(&self) -> Result<(), MoneyfoldError> {
        let current = self.profile.read().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let data = self.data.read().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let profile = current
            .as_ref()
            .ok_or_else(|| MoneyfoldError::Session("No profile loaded".into()))?;

        let file_data = EnvelopeData {
            envelopes: data.clone(),
        };
        write_json_atomic(self.file_for(profile), &file_data)
    }

    /// Get the profile whose envelopes are loaded, if any
    pub fn loaded_profile(&self) -> Result<Option<String>, MoneyfoldError> {
        let current = self.profile.read().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(current.clone())
    }

    /// Get all envelopes in stable creation order
    pub fn get_all(&self) -> Result<Vec<Envelope>, MoneyfoldError> {
        let data = self.data.read().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.clone())
    }

    /// Get an envelope by ID
    pub fn get(&self, id: EnvelopeId) -> Result<Option<Envelope>, MoneyfoldError> {
        let data = self.data.read().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Get an envelope by title (case-insensitive)
    pub fn get_by_title(&self, title: &str) -> Result<Option<Envelope>, MoneyfoldError> {
        let data = self.data.read().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let needle = title.trim().to_lowercase();
        Ok(data
            .iter()
            .find(|e| e.title.to_lowercase() == needle)
            .cloned())
    }

    /// Insert or update an envelope, preserving collection order
    pub fn upsert(&self, envelope: Envelope) -> Result<(), MoneyfoldError> {
        let mut data = self.data.write().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(existing) = data.iter_mut().find(|e| e.id == envelope.id) {
            *existing = envelope;
        } else {
            data.push(envelope);
        }
        Ok(())
    }

    /// Add an amount to an envelope's balance in place
    ///
    /// Returns false when no envelope with that ID exists.
    pub fn credit(&self, id: EnvelopeId, amount: Money) -> Result<bool, MoneyfoldError> {
        let mut data = self.data.write().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data.iter_mut().find(|e| e.id == id) {
            Some(envelope) => {
                envelope.credit(amount);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete an envelope
    pub fn delete(&self, id: EnvelopeId) -> Result<bool, MoneyfoldError> {
        let mut data = self.data.write().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let before = data.len();
        data.retain(|e| e.id != id);
        Ok(data.len() < before)
    }

    /// Sum of all envelope balances
    pub fn total_balance(&self) -> Result<Money, MoneyfoldError> {
        let data = self.data.read().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.iter().map(|e| e.balance).sum())
    }

    /// Count envelopes
    pub fn count(&self) -> Result<usize, MoneyfoldError> {
        let data = self.data.read().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }

    /// Remove a profile's envelope file from disk
    ///
    /// Used when a profile is deleted. Missing files are fine.
    pub fn remove_profile_file(&self, profile: &str) -> Result<(), MoneyfoldError> {
        let path = self.file_for(profile);
        if Path::new(&path).exists() {
            std::fs::remove_file(&path).map_err(|e| {
                MoneyfoldError::Storage(format!(
                    "Failed to remove {}: {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}
