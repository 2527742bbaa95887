//! Service context bundling configuration and port trait objects.

use crate::adapters::live::{FileCredentialStore, HttpUserDirectory, StdinPrompter};
use crate::api::{ApiClient, BasicAuth};
use crate::config::Config;
use crate::ports::credentials::{CredentialStore, StoredCredentials};
use crate::ports::directory::UserDirectory;
use crate::ports::prompt::Prompter;

/// Bundles the resolved configuration with the port trait objects.
///
/// Each field provides access to one external boundary. Commands build
/// their own `ApiClient`s through the helpers here so that credentials
/// are always passed explicitly; there is no ambient auth state.
pub struct ServiceContext {
    /// Resolved client configuration.
    pub config: Config,
    /// Backend user directory (substring search by display name).
    pub directory: Box<dyn UserDirectory>,
    /// Stored login profile.
    pub credentials: Box<dyn CredentialStore>,
    /// Human operator input.
    pub prompter: Box<dyn Prompter>,
}

impl ServiceContext {
    /// Creates a live context: HTTP directory, YAML credential file,
    /// stdin prompter.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration is incomplete or the HTTP
    /// client cannot be built.
    pub fn live() -> Result<Self, String> {
        let config = Config::from_env()?;
        let directory = HttpUserDirectory::new(ApiClient::new(&config, None)?);
        let credentials = FileCredentialStore::new(config.credentials_path());
        Ok(Self {
            config,
            directory: Box::new(directory),
            credentials: Box::new(credentials),
            prompter: Box::new(StdinPrompter),
        })
    }

    /// Builds an unauthenticated client for read-only calls.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn read_client(&self) -> Result<ApiClient, String> {
        ApiClient::new(&self.config, None)
    }

    /// Builds a client carrying specific credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn client_as(&self, credentials: &StoredCredentials) -> Result<ApiClient, String> {
        ApiClient::new(
            &self.config,
            Some(BasicAuth {
                email: credentials.email.clone(),
                password: credentials.password.clone(),
            }),
        )
    }

    /// Loads the stored profile and builds an authenticated client.
    ///
    /// # Errors
    ///
    /// Returns an error when no profile is stored or the HTTP client
    /// cannot be built.
    pub fn auth_client(&self) -> Result<(ApiClient, StoredCredentials), String> {
        let stored = self
            .credentials
            .load()
            .ok_or_else(|| "not logged in; run `hopshare login` first".to_string())?;
        let client = self.client_as(&stored)?;
        Ok((client, stored))
    }
}
