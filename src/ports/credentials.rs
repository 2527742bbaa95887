//! Credential store port for remembered logins.

use serde::{Deserialize, Serialize};

/// A remembered login profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Persists the login profile between invocations.
///
/// The backend has no session concept; the client re-sends Basic Auth on
/// every mutating request, so "staying logged in" is purely client-side
/// storage of the profile.
pub trait CredentialStore: Send + Sync {
    /// Loads the stored profile, if any. A missing or unreadable profile
    /// is `None`, not an error.
    fn load(&self) -> Option<StoredCredentials>;

    /// Saves the profile, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns an error when the profile cannot be written.
    fn save(
        &self,
        credentials: &StoredCredentials,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Removes the stored profile. Removing a nonexistent profile is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error when an existing profile cannot be removed.
    fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
