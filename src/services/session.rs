//! Session management service
//!
//! Profiles are identified by name alone; logging in loads that profile's
//! envelope collection and remembers the profile for later invocations.
//! There is no authentication; the name alone is the session key.

use crate::error::{MoneyfoldError, MoneyfoldResult};
use crate::storage::Storage;

/// Service for profile sessions
pub struct SessionService<'a> {
    storage: &'a Storage,
}

impl<'a> SessionService<'a> {
    /// Create a new session service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Log in as a profile, creating it implicitly on first use
    pub fn login(&self, profile: &str) -> MoneyfoldResult<()> {
        let profile = profile.trim();
        validate_profile_name(profile)?;

        self.storage.envelopes.load_profile(profile)?;
        self.storage.session.set_current_profile(profile)?;
        self.storage.session.save()?;
        Ok(())
    }

    /// The currently logged-in profile, if any
    pub fn current(&self) -> MoneyfoldResult<Option<String>> {
        self.storage.session.current_profile()
    }

    /// The currently logged-in profile, or a session error
    pub fn require_current(&self) -> MoneyfoldResult<String> {
        self.current()?.ok_or_else(|| {
            MoneyfoldError::Session("No profile is logged in; run 'moneyfold login <name>'".into())
        })
    }

    /// Log out, leaving the profile's data on disk
    pub fn logout(&self) -> MoneyfoldResult<()> {
        self.storage.session.clear()?;
        self.storage.session.save()?;
        self.storage.envelopes.unload()?;
        Ok(())
    }

    /// Permanently delete the current profile and its envelopes
    ///
    /// Merchant memory is shared across profiles and survives.
    pub fn delete_current_profile(&self) -> MoneyfoldResult<String> {
        let profile = self.require_current()?;

        self.storage.envelopes.remove_profile_file(&profile)?;
        self.storage.envelopes.unload()?;
        self.storage.session.clear()?;
        self.storage.session.save()?;
        Ok(profile)
    }
}

/// Profile names become file names, so keep them to a safe character set
fn validate_profile_name(profile: &str) -> MoneyfoldResult<()> {
    if profile.is_empty() {
        return Err(MoneyfoldError::Validation(
            "Profile name cannot be empty".into(),
        ));
    }

    let ok = profile
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if !ok {
        return Err(MoneyfoldError::Validation(format!(
            "Invalid profile name '{}': use letters, digits, '-', '_' or '.'",
            profile
        )));
    }

    Ok(())
}
