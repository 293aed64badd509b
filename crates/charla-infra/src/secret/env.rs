//! Environment variable secret provider.
//!
//! Read-only fallback in the resolution chain: the secrets file takes
//! precedence, the process environment catches deployments that export
//! `GROQ_API_KEY` directly.

use charla_core::secret::SecretProvider;
use charla_types::error::SecretError;

/// Read-only secret provider over the process environment.
///
/// `set()` and `delete()` return `ReadOnly`: environment variables are
/// managed by the shell, not through charla.
#[derive(Default)]
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }
}

impl SecretProvider for EnvSecretProvider {
    fn name(&self) -> &str {
        "environment"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, SecretError> {
        match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            // Present but not valid Unicode: treat as absent, secrets must
            // be valid strings.
            Err(std::env::VarError::NotUnicode(_)) => Ok(None),
        }
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), SecretError> {
        Err(SecretError::ReadOnly)
    }

    async fn delete(&self, _key: &str) -> Result<(), SecretError> {
        Err(SecretError::ReadOnly)
    }

    async fn list(&self) -> Result<Vec<String>, SecretError> {
        // The environment cannot be enumerated meaningfully; the secrets
        // file maintains the key index.
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_existing_var() {
        // SAFETY: test-local variable, removed before the test ends.
        unsafe { std::env::set_var("CHARLA_TEST_SECRET_1", "valor-123") };

        let provider = EnvSecretProvider::new();
        let value = provider.get("CHARLA_TEST_SECRET_1").await.unwrap();
        assert_eq!(value.as_deref(), Some("valor-123"));

        // SAFETY: set just above in this test.
        unsafe { std::env::remove_var("CHARLA_TEST_SECRET_1") };
    }

    #[tokio::test]
    async fn test_get_missing_var() {
        let provider = EnvSecretProvider::new();
        let value = provider.get("CHARLA_NONEXISTENT_XYZ").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_set_and_delete_are_read_only() {
        let provider = EnvSecretProvider::new();
        assert!(matches!(
            provider.set("K", "v").await,
            Err(SecretError::ReadOnly)
        ));
        assert!(matches!(
            provider.delete("K").await,
            Err(SecretError::ReadOnly)
        ));
    }

    #[tokio::test]
    async fn test_list_is_empty() {
        let provider = EnvSecretProvider::new();
        assert!(provider.list().await.unwrap().is_empty());
    }
}
