//! Live adapters backed by the real backend, filesystem, and terminal.

pub mod credentials;
pub mod directory;
pub mod prompt;

pub use credentials::FileCredentialStore;
pub use directory::HttpUserDirectory;
pub use prompt::StdinPrompter;
