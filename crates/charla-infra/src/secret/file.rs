//! TOML-file secret store.
//!
//! The per-deployment secret store: a flat `secrets.toml` table under the
//! data directory, e.g.
//!
//! ```toml
//! GROQ_API_KEY = "gsk_..."
//! ```
//!
//! Writable: this is where `charla secret set` lands. First in the
//! resolution chain, so a file entry shadows the same environment variable.

use std::collections::BTreeMap;
use std::path::PathBuf;

use charla_core::secret::SecretProvider;
use charla_types::error::SecretError;

/// Secret store backed by a flat TOML table on disk.
pub struct FileSecretStore {
    path: PathBuf,
}

impl FileSecretStore {
    /// Create a store over the given secrets file. The file may not exist
    /// yet; it is created on first write.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read and parse the secrets table. A missing file is an empty table.
    async fn load(&self) -> Result<BTreeMap<String, String>, SecretError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(err) => return Err(SecretError::Storage(err.to_string())),
        };

        toml::from_str(&content)
            .map_err(|err| SecretError::Storage(format!("malformed secrets file: {err}")))
    }

    /// Serialize and write the table, creating the data directory if needed.
    async fn store(&self, table: &BTreeMap<String, String>) -> Result<(), SecretError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| SecretError::Storage(err.to_string()))?;
        }

        let content = toml::to_string_pretty(table)
            .map_err(|err| SecretError::Storage(err.to_string()))?;
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|err| SecretError::Storage(err.to_string()))
    }
}

impl SecretProvider for FileSecretStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, SecretError> {
        Ok(self.load().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SecretError> {
        let mut table = self.load().await?;
        table.insert(key.to_string(), value.to_string());
        self.store(&table).await
    }

    async fn delete(&self, key: &str) -> Result<(), SecretError> {
        let mut table = self.load().await?;
        if table.remove(key).is_none() {
            return Err(SecretError::NotFound);
        }
        self.store(&table).await
    }

    async fn list(&self) -> Result<Vec<String>, SecretError> {
        Ok(self.load().await?.into_keys().collect())
    }
}
