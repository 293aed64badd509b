//! Secret provider trait definition.
//!
//! Same RPITIT-plus-boxed-wrapper shape as the LLM provider: the trait uses
//! native async fn, and `DynSecretProvider` gives the `SecretService` a
//! uniform handle over heterogeneous backends.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use charla_types::error::SecretError;

/// Trait for secret storage backends (secrets file, environment).
pub trait SecretProvider: Send + Sync {
    /// Backend name for listings and logs (e.g., "file", "environment").
    fn name(&self) -> &str;

    /// Retrieve a secret value by key. Returns None if this provider does
    /// not hold the key.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, SecretError>> + Send;

    /// Store a secret value. Read-only providers return `ReadOnly`.
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), SecretError>> + Send;

    /// Delete a secret. Read-only providers return `ReadOnly`.
    fn delete(&self, key: &str) -> impl Future<Output = Result<(), SecretError>> + Send;

    /// List the key names this provider holds (never the values).
    fn list(&self) -> impl Future<Output = Result<Vec<String>, SecretError>> + Send;
}

/// Object-safe version of [`SecretProvider`] with boxed futures.
pub trait SecretProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn get_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, SecretError>> + Send + 'a>>;

    fn set_boxed<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), SecretError>> + Send + 'a>>;

    fn delete_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), SecretError>> + Send + 'a>>;

    fn list_boxed<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, SecretError>> + Send + 'a>>;
}

impl<T: SecretProvider> SecretProviderDyn for T {
    fn name(&self) -> &str {
        SecretProvider::name(self)
    }

    fn get_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, SecretError>> + Send + 'a>> {
        Box::pin(self.get(key))
    }

    fn set_boxed<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), SecretError>> + Send + 'a>> {
        Box::pin(self.set(key, value))
    }

    fn delete_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), SecretError>> + Send + 'a>> {
        Box::pin(self.delete(key))
    }

    fn list_boxed<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, SecretError>> + Send + 'a>> {
        Box::pin(self.list())
    }
}

/// A shared, type-erased secret provider for chain assembly.
pub type DynSecretProvider = Arc<dyn SecretProviderDyn>;
