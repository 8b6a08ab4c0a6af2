use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::error::{ClientError, Result};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthConfig {
    pub server: String,
    pub token: String,
}

/// Persisted credential file. Written by the authentication flow and read
/// back before each dispatched request; parse failures are treated the same
/// as an absent file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location: ~/.jobboard/auth.yaml
    pub fn default_location() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| ClientError::Config("Could not find home directory".to_string()))?;
        Ok(Self::new(home.join(".jobboard").join("auth.yaml")))
    }

    pub fn store(&self, server_url: &str, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config = AuthConfig {
            server: server_url.to_string(),
            token: token.to_string(),
        };

        let yaml_content = serde_yaml::to_string(&config)
            .map_err(|e| ClientError::Credentials(e.to_string()))?;
        fs::write(&self.path, yaml_content)?;

        Ok(())
    }

    pub fn load(&self) -> Result<Option<AuthConfig>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_yaml::from_str::<AuthConfig>(&content) {
                Ok(config) => Ok(Some(config)),
                Err(_) => Ok(None),
            },
            Err(_) => Ok(None),
        }
    }

    #[allow(dead_code)]
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Capability handed to the HTTP client for reading the current bearer
/// token. Implementations must not cache across calls: the token is read
/// fresh before every dispatched request.
pub trait CredentialProvider: Send + Sync {
    fn token(&self) -> Result<Option<String>>;
}

/// Provider backed by the persisted credential store.
pub struct StoredCredentials {
    store: CredentialStore,
}

impl StoredCredentials {
    pub fn new(store: CredentialStore) -> Self {
        Self { store }
    }
}

impl CredentialProvider for StoredCredentials {
    fn token(&self) -> Result<Option<String>> {
        Ok(self.store.load()?.map(|config| config.token))
    }
}

/// Fixed token (or no token at all) for clients whose credential is known up
/// front.
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticToken {
    fn token(&self) -> Result<Option<String>> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> CredentialStore {
        CredentialStore::new(dir.path().join("auth.yaml"))
    }

    #[test]
    fn store_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.store("http://localhost:8001", "abc123").unwrap();
        let config = store.load().unwrap().unwrap();
        assert_eq!(config.server, "http://localhost:8001");
        assert_eq!(config.token, "abc123");
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn corrupt_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(dir.path().join("auth.yaml"), ": not yaml [").unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn stored_credentials_read_fresh_per_call() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let provider = StoredCredentials::new(store.clone());

        store.store("http://localhost:8001", "t1").unwrap();
        assert_eq!(provider.token().unwrap().as_deref(), Some("t1"));

        store.store("http://localhost:8001", "t2").unwrap();
        assert_eq!(provider.token().unwrap().as_deref(), Some("t2"));

        store.clear().unwrap();
        assert!(provider.token().unwrap().is_none());
    }
}
