//! Application configuration management.
//!
//! This module handles loading and saving the application configuration:
//! API host and base URL, request timeout, the cache database location and
//! its migration policy.
//!
//! Configuration is stored at `~/.config/healthmate/config.json`. The API key
//! itself is never written there; it comes from the environment or the OS
//! keychain.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::client::{DEFAULT_API_HOST, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::api::ClientSettings;
use crate::auth::{CredentialStore, Credentials};
use crate::store::MigrationPolicy;

/// Application name used for config/cache directory paths
const APP_NAME: &str = "healthmate";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Database file name inside the cache directory
const DATABASE_FILE: &str = "healthmate.db";

pub const ENV_API_KEY: &str = "EXERCISEDB_API_KEY";
pub const ENV_API_HOST: &str = "EXERCISEDB_HOST";
pub const ENV_BASE_URL: &str = "EXERCISEDB_BASE_URL";
pub const ENV_DATABASE: &str = "HEALTHMATE_DB";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_host: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub database_path: Option<PathBuf>,
    pub migration_policy: MigrationPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            database_path: None,
            migration_policy: MigrationPolicy::default(),
        }
    }
}

impl Config {
    /// Load the config file (defaults if absent), then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = non_empty(ENV_API_HOST) {
            self.api_host = host;
        }
        if let Some(base_url) = non_empty(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(path) = non_empty(ENV_DATABASE) {
            self.database_path = Some(PathBuf::from(path));
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn database_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.database_path {
            return Ok(path.clone());
        }
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME).join(DATABASE_FILE))
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    /// Credentials for the remote API, or `None` to run from the local cache only.
    /// The key is taken from `EXERCISEDB_API_KEY`, then from the OS keychain.
    pub fn credentials(&self) -> Option<Credentials> {
        let api_key = std::env::var(ENV_API_KEY)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| match CredentialStore::get_api_key() {
                Ok(key) => Some(key),
                Err(e) => {
                    debug!(error = %e, "No API key in keychain");
                    None
                }
            })?;
        Some(Credentials::new(api_key, self.api_host.clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.api_host, DEFAULT_API_HOST);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.migration_policy, MigrationPolicy::Incremental);
        assert!(config.database_path.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("healthmate").join("config.json");

        let config = Config {
            request_timeout_secs: 5,
            database_path: Some(PathBuf::from("/tmp/exercises.db")),
            migration_policy: MigrationPolicy::Recreate,
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.request_timeout_secs, 5);
        assert_eq!(loaded.database_path, Some(PathBuf::from("/tmp/exercises.db")));
        assert_eq!(loaded.migration_policy, MigrationPolicy::Recreate);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"migration_policy": "recreate"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.migration_policy, MigrationPolicy::Recreate);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_API_HOST, "localhost:8080"),
            (ENV_BASE_URL, "http://localhost:8080"),
            (ENV_DATABASE, "/data/exercises.db"),
        ]);
        let mut config = Config::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_host, "localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.database_path().unwrap(), PathBuf::from("/data/exercises.db"));
    }

    #[test]
    fn test_blank_env_values_ignored() {
        let mut config = Config::default();
        config.apply_env(|_| Some("  ".to_string()));
        assert_eq!(config.api_host, DEFAULT_API_HOST);
        assert!(config.database_path.is_none());
    }

    #[test]
    fn test_client_settings() {
        let config = Config {
            request_timeout_secs: 7,
            ..Config::default()
        };
        let settings = config.client_settings();
        assert_eq!(settings.request_timeout, Duration::from_secs(7));
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }
}
