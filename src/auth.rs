//! Login verification against a backend with no login endpoint.
//!
//! The backend only checks Basic Auth on mutating requests, so the
//! client verifies credentials by probing a protected endpoint with an
//! intentionally invalid body: accepted credentials produce a
//! validation failure (the body was examined), rejected credentials
//! produce an auth failure (the body never was).

use crate::api::{ApiClient, ProbeResponse};
use crate::model::User;

/// Message shown for rejected credentials.
pub const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Classifies a probe response: did the backend accept the credentials?
///
/// Accepted: any 2xx (unexpected but taken at face value), a 400, a
/// `VALIDATION_ERROR` code, or a message mentioning validation. All of
/// these mean the request got past the auth check. Everything else
/// (401/403 and the rest) means the credentials were rejected.
#[must_use]
pub fn probe_accepted(probe: &ProbeResponse) -> bool {
    if (200..300).contains(&probe.status) || probe.status == 400 {
        return true;
    }
    if probe.error_code.as_deref() == Some("VALIDATION_ERROR") {
        return true;
    }
    probe
        .message
        .as_deref()
        .is_some_and(|m| m.to_lowercase().contains("validation"))
}

/// Verifies the credentials carried by `client`.
///
/// # Errors
///
/// Returns an error when the probe cannot be sent or the backend
/// rejects the credentials.
pub async fn verify_login(client: &ApiClient) -> Result<(), String> {
    let probe = client.probe_auth().await?;
    if probe_accepted(&probe) {
        Ok(())
    } else {
        Err(INVALID_CREDENTIALS.to_string())
    }
}

/// Finds the account belonging to `email`.
///
/// The backend has no "who am I" endpoint; the client lists accounts
/// and matches the email case-insensitively.
///
/// # Errors
///
/// Returns an error when the listing fails or no account matches.
pub async fn current_user(client: &ApiClient, email: &str) -> Result<User, String> {
    let users = client.list_users(None).await?;
    let needle = email.to_lowercase();
    users
        .into_iter()
        .find(|u| u.email.to_lowercase() == needle)
        .ok_or_else(|| format!("no account found for {email}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(status: u16, error_code: Option<&str>, message: Option<&str>) -> ProbeResponse {
        ProbeResponse {
            status,
            error_code: error_code.map(String::from),
            message: message.map(String::from),
        }
    }

    #[test]
    fn accepted_on_validation_rejection() {
        assert!(probe_accepted(&probe(400, None, None)));
        assert!(probe_accepted(&probe(422, Some("VALIDATION_ERROR"), None)));
        assert!(probe_accepted(&probe(422, None, Some("Validation failed: Description"))));
    }

    #[test]
    fn accepted_on_unexpected_success() {
        assert!(probe_accepted(&probe(200, None, None)));
        assert!(probe_accepted(&probe(201, None, None)));
    }

    #[test]
    fn rejected_on_auth_failures() {
        assert!(!probe_accepted(&probe(401, None, None)));
        assert!(!probe_accepted(&probe(403, Some("FORBIDDEN"), None)));
        assert!(!probe_accepted(&probe(500, None, Some("internal error"))));
    }
}
