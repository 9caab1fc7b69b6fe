//! Path management for Moneyfold
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `MONEYFOLD_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/moneyfold` or `~/.config/moneyfold`
//! 3. Windows: `%APPDATA%\moneyfold`

use std::path::PathBuf;

use crate::error::MoneyfoldError;

/// Manages all paths used by Moneyfold
#[derive(Debug, Clone)]
pub struct MoneyfoldPaths {
    /// Base directory for all Moneyfold data
    base_dir: PathBuf,
}

impl MoneyfoldPaths {
    /// Create a new MoneyfoldPaths instance
    ///
    /// Path resolution:
    /// 1. `MONEYFOLD_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/moneyfold` or `~/.config/moneyfold`
    /// 3. Windows: `%APPDATA%\moneyfold`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, MoneyfoldError> {
        let base_dir = if let Ok(custom) = std::env::var("MONEYFOLD_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create MoneyfoldPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/moneyfold/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/moneyfold/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the session file (current profile)
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Get the path to merchant_memory.json
    ///
    /// Merchant memory is shared across all profiles, mirroring how the
    /// mapping accumulates independently of who is logged in.
    pub fn merchant_memory_file(&self) -> PathBuf {
        self.data_dir().join("merchant_memory.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/moneyfold/)
    /// - Data directory (~/.config/moneyfold/data/)
    pub fn ensure_directories(&self) -> Result<(), MoneyfoldError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MoneyfoldError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MoneyfoldError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, MoneyfoldError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("moneyfold"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, MoneyfoldError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| MoneyfoldError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("moneyfold"))
}
