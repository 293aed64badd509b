//! Application state shared by CLI command handlers.

use std::path::PathBuf;

use charla_core::secret::SecretService;
use charla_infra::paths;
use charla_infra::secret::build_secret_chain;

/// Explicit session-state handle passed into every command handler.
pub struct AppState {
    pub data_dir: PathBuf,
    pub secret_service: SecretService,
}

impl AppState {
    /// Resolve the data directory and assemble the secret chain.
    pub fn init() -> Self {
        let data_dir = paths::data_dir();
        tracing::debug!(data_dir = %data_dir.display(), "initializing app state");
        let secret_service = SecretService::new(build_secret_chain(&data_dir));
        Self {
            data_dir,
            secret_service,
        }
    }
}
