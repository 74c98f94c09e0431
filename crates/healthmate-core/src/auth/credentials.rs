use anyhow::{Context, Result};
use keyring::Entry;

const SERVICE_NAME: &str = "healthmate";

/// Keychain account under which the ExerciseDB API key is stored
const API_KEY_ACCOUNT: &str = "exercisedb-api-key";

/// API key plus host header sent with every ExerciseDB request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub host: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: host.into(),
        }
    }

    /// A blank key counts as no credentials at all.
    pub fn is_usable(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

pub struct CredentialStore;

impl CredentialStore {
    /// Store the API key in the OS keychain
    pub fn store_api_key(api_key: &str) -> Result<()> {
        let entry = Entry::new(SERVICE_NAME, API_KEY_ACCOUNT)
            .context("Failed to create keyring entry")?;
        entry
            .set_password(api_key)
            .context("Failed to store API key in keychain")?;
        Ok(())
    }

    /// Retrieve the API key from the OS keychain
    pub fn get_api_key() -> Result<String> {
        let entry = Entry::new(SERVICE_NAME, API_KEY_ACCOUNT)
            .context("Failed to create keyring entry")?;
        entry
            .get_password()
            .context("Failed to retrieve API key from keychain")
    }

    /// Delete the stored API key
    pub fn delete_api_key() -> Result<()> {
        let entry = Entry::new(SERVICE_NAME, API_KEY_ACCOUNT)
            .context("Failed to create keyring entry")?;
        entry
            .delete_credential()
            .context("Failed to delete API key from keychain")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_is_not_usable() {
        assert!(!Credentials::new("", "exercisedb.p.rapidapi.com").is_usable());
        assert!(!Credentials::new("   ", "exercisedb.p.rapidapi.com").is_usable());
        assert!(Credentials::new("abc123", "exercisedb.p.rapidapi.com").is_usable());
    }
}
