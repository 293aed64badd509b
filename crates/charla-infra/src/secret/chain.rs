//! Secret chain builder -- wires concrete providers in priority order.
//!
//! Chain order: `[FileSecretStore, EnvSecretProvider]`. The deployment
//! secrets file is consulted first, the process environment is the
//! fallback.

use std::path::Path;
use std::sync::Arc;

use charla_core::secret::DynSecretProvider;

use crate::paths;
use crate::secret::env::EnvSecretProvider;
use crate::secret::file::FileSecretStore;

/// Build the default secret resolution chain for a data directory.
pub fn build_secret_chain(data_dir: &Path) -> Vec<DynSecretProvider> {
    vec![
        Arc::new(FileSecretStore::new(paths::secrets_file(data_dir))),
        Arc::new(EnvSecretProvider::new()),
    ]
}
