//! Live adapter for the `CredentialStore` port: a YAML profile on disk.

use std::fs;
use std::path::PathBuf;

use crate::ports::credentials::{CredentialStore, StoredCredentials};

/// Stores the login profile as YAML at a fixed path
/// (`<home>/credentials.yaml`).
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Creates a store writing to `path`.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Option<StoredCredentials> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_yaml::from_str(&content).ok()
    }

    fn save(
        &self,
        credentials: &StoredCredentials,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("failed to create {}: {e}", parent.display()))?;
        }
        let yaml = serde_yaml::to_string(credentials)
            .map_err(|e| format!("failed to serialize credentials: {e}"))?;
        fs::write(&self.path, yaml)
            .map_err(|e| format!("failed to write {}: {e}", self.path.display()))?;
        Ok(())
    }

    fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(format!("failed to remove {}: {e}", self.path.display()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> (PathBuf, FileCredentialStore) {
        let dir = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("credentials.yaml");
        (dir, FileCredentialStore::new(path))
    }

    #[test]
    fn save_then_load_round_trips() {
        let (dir, store) = temp_store("hopshare_cred_roundtrip");
        let creds = StoredCredentials {
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
        };
        store.save(&creds).unwrap();
        assert_eq!(store.load(), Some(creds));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_missing_profile_is_none() {
        let (dir, store) = temp_store("hopshare_cred_missing");
        assert!(store.load().is_none());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_corrupt_profile_is_none() {
        let (dir, store) = temp_store("hopshare_cred_corrupt");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("credentials.yaml"), ": not yaml [").unwrap();
        assert!(store.load().is_none());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn clear_removes_profile_and_tolerates_absence() {
        let (dir, store) = temp_store("hopshare_cred_clear");
        store.clear().unwrap();
        store
            .save(&StoredCredentials { email: "a@b.c".to_string(), password: "x".to_string() })
            .unwrap();
        store.clear().unwrap();
        assert!(store.load().is_none());
        let _ = fs::remove_dir_all(&dir);
    }
}
