//! Client configuration read from the environment.
//!
//! The `.env` file (if any) is loaded once in [`crate::run`]; everything
//! here reads plain environment variables afterwards.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the backend API base URL.
pub const API_BASE_VAR: &str = "HOPSHARE_API_BASE";

/// Environment variable toggling Basic Auth on mutating requests.
pub const BASIC_AUTH_VAR: &str = "HOPSHARE_BASIC_AUTH";

/// Environment variable overriding the client's home directory.
pub const HOME_VAR: &str = "HOPSHARE_HOME";

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend API, without a trailing slash.
    pub api_base: String,
    /// Whether mutating requests carry a Basic Auth header.
    pub basic_auth_enabled: bool,
    /// Directory holding client state (stored credentials).
    pub home: PathBuf,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when `HOPSHARE_API_BASE` is not set.
    pub fn from_env() -> Result<Self, String> {
        let api_base = env::var(API_BASE_VAR)
            .map_err(|_| format!("{API_BASE_VAR} environment variable not set"))?;
        let api_base = api_base.trim_end_matches('/').to_string();

        let basic_auth_enabled =
            env::var(BASIC_AUTH_VAR).map_or(true, |v| parse_flag(&v));

        let home = env::var(HOME_VAR).map_or_else(|_| default_home(), PathBuf::from);

        Ok(Self { api_base, basic_auth_enabled, home })
    }

    /// Path of the stored credential profile.
    #[must_use]
    pub fn credentials_path(&self) -> PathBuf {
        self.home.join("credentials.yaml")
    }
}

/// Parses a boolean-ish environment flag; anything but an explicit
/// negative counts as enabled.
fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off")
}

fn default_home() -> PathBuf {
    env::var("HOME").map_or_else(|_| PathBuf::from(".hopshare"), |h| PathBuf::from(h).join(".hopshare"))
}
