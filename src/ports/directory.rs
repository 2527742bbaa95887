//! User directory port: name-filtered lookups against the backend.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use crate::model::User;

/// Boxed future type alias used by [`UserDirectory`] to keep the trait
/// dyn-compatible.
pub type DirectoryFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<User>, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// Looks up user accounts on the backend.
///
/// The backend performs a case-insensitive substring filter on display
/// names server-side; an empty term returns every account. No pagination
/// is assumed; the full result set comes back in one call.
pub trait UserDirectory: Send + Sync {
    /// Searches for users whose display name contains `term`.
    ///
    /// # Errors
    ///
    /// The future resolves to an error when the backend is unreachable
    /// or returns a failure envelope.
    fn search(&self, term: &str) -> DirectoryFuture<'_>;
}
