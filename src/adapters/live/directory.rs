//! Live adapter for the `UserDirectory` port using the backend API.

use crate::api::ApiClient;
use crate::ports::directory::{DirectoryFuture, UserDirectory};

/// User directory served by `GET /users?Name=<term>`.
///
/// Directory lookups are reads, so the wrapped client needs no
/// credentials; callers that also mutate construct their own
/// authenticated client.
pub struct HttpUserDirectory {
    client: ApiClient,
}

impl HttpUserDirectory {
    /// Wraps an API client as a user directory.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl UserDirectory for HttpUserDirectory {
    fn search(&self, term: &str) -> DirectoryFuture<'_> {
        let term = term.trim().to_string();
        Box::pin(async move {
            let name = if term.is_empty() { None } else { Some(term.as_str()) };
            self.client.list_users(name).await.map_err(Into::into)
        })
    }
}
