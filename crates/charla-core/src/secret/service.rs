//! Secret resolution service.
//!
//! `SecretService` walks a chain of providers in priority order. The chain
//! for charla puts the deployment secrets file first and environment
//! variables second, so a value in `secrets.toml` shadows the same key in
//! the process environment.

use charla_types::error::SecretError;

use super::provider::DynSecretProvider;

/// Resolves secrets through an ordered provider chain (first match wins).
pub struct SecretService {
    providers: Vec<DynSecretProvider>,
}

impl SecretService {
    /// Create a service over providers ordered by precedence.
    pub fn new(providers: Vec<DynSecretProvider>) -> Self {
        Self { providers }
    }

    /// Resolve a secret value, trying each provider in order.
    pub async fn get_secret(&self, key: &str) -> Result<Option<String>, SecretError> {
        for provider in &self.providers {
            if let Some(value) = provider.get_boxed(key).await? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Store a secret in the first writable provider.
    ///
    /// Read-only providers are skipped.
    pub async fn set_secret(&self, key: &str, value: &str) -> Result<(), SecretError> {
        for provider in &self.providers {
            match provider.set_boxed(key, value).await {
                Ok(()) => return Ok(()),
                Err(SecretError::ReadOnly) => continue,
                Err(err) => return Err(err),
            }
        }
        Err(SecretError::Storage(
            "no writable secret provider available".to_string(),
        ))
    }

    /// Delete a secret from every provider that holds it.
    pub async fn delete_secret(&self, key: &str) -> Result<(), SecretError> {
        let mut deleted = false;
        for provider in &self.providers {
            match provider.delete_boxed(key).await {
                Ok(()) => deleted = true,
                Err(SecretError::NotFound) | Err(SecretError::ReadOnly) => continue,
                Err(err) => return Err(err),
            }
        }
        if deleted { Ok(()) } else { Err(SecretError::NotFound) }
    }

    /// List known keys with the backend that holds each, keeping chain
    /// order and dropping duplicates (first provider wins).
    pub async fn list_secrets(&self) -> Result<Vec<(String, String)>, SecretError> {
        let mut entries: Vec<(String, String)> = Vec::new();
        for provider in &self.providers {
            for key in provider.list_boxed().await? {
                if !entries.iter().any(|(k, _)| k == &key) {
                    entries.push((key, provider.name().to_string()));
                }
            }
        }
        Ok(entries)
    }
}
