//! Merchant memory repository
//!
//! Persists the learned mapping from normalized merchant name to the
//! envelope the user last chose for that merchant. The map is global across
//! profiles and grows monotonically except for same-key overwrites; entries
//! never expire. Stale entries (pointing at deleted envelopes) are kept on
//! disk and simply ignored by the categorization engine.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::MoneyfoldError;
use crate::models::EnvelopeId;

use super::file_io::{read_json, write_json_atomic};

/// Repository for merchant → envelope associations
pub struct MerchantMemoryRepository {
    path: PathBuf,
    data: RwLock<HashMap<String, EnvelopeId>>,
}

impl MerchantMemoryRepository {
    /// Create a new merchant memory repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load merchant memory from disk
    pub fn load(&self) -> Result<(), MoneyfoldError> {
        let file_data: HashMap<String, EnvelopeId> = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data;
        Ok(())
    }

    /// Save merchant memory to disk
    pub fn save(&self) -> Result<(), MoneyfoldError> {
        let data = self.data.read().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        write_json_atomic(&self.path, &*data)
    }

    /// Look up the remembered envelope for a merchant key
    ///
    /// An empty merchant key never matches anything.
    pub fn get(&self, merchant: &str) -> Result<Option<EnvelopeId>, MoneyfoldError> {
        if merchant.is_empty() {
            return Ok(None);
        }

        let data = self.data.read().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(merchant).copied())
    }

    /// Remember the envelope chosen for a merchant key
    ///
    /// Empty merchant keys are never recorded.
    pub fn set(&self, merchant: &str, envelope_id: EnvelopeId) -> Result<(), MoneyfoldError> {
        if merchant.is_empty() {
            return Ok(());
        }

        let mut data = self.data.write().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.insert(merchant.to_string(), envelope_id);
        Ok(())
    }

    /// Count remembered merchants
    pub fn count(&self) -> Result<usize, MoneyfoldError> {
        let data = self.data.read().map_err(|e| {
            MoneyfoldError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, MerchantMemoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("merchant_memory.json");
        let repo = MerchantMemoryRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let id = EnvelopeId::new();
        repo.set("amazon", id).unwrap();

        assert_eq!(repo.get("amazon").unwrap(), Some(id));
        assert_eq!(repo.get("walmart").unwrap(), None);
    }

    #[test]
    fn test_overwrite_same_key() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let first = EnvelopeId::new();
        let second = EnvelopeId::new();

        repo.set("amazon", first).unwrap();
        repo.set("amazon", second).unwrap();

        assert_eq!(repo.get("amazon").unwrap(), Some(second));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_empty_merchant_never_matches() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        // Even a recorded empty key must stay invisible
        repo.set("", EnvelopeId::new()).unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert_eq!(repo.get("").unwrap(), None);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let id = EnvelopeId::new();
        repo.set("trader joes", id).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("merchant_memory.json");
        let repo2 = MerchantMemoryRepository::new(path);
        repo2.load().unwrap();

        assert_eq!(repo2.get("trader joes").unwrap(), Some(id));
    }
}
