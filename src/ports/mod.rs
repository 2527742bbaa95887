//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (the backend user directory, stored credentials on
//! disk, the human operator at the terminal). Implementations live in
//! `src/adapters/`.

pub mod credentials;
pub mod directory;
pub mod prompt;

pub use credentials::{CredentialStore, StoredCredentials};
pub use directory::{DirectoryFuture, UserDirectory};
pub use prompt::Prompter;
