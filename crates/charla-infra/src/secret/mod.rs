//! Secret provider implementations.
//!
//! - `file`: TOML secrets file (writable, highest priority)
//! - `env`: environment variables (read-only fallback)
//! - `chain`: default resolution chain wiring both together

pub mod chain;
pub mod env;
pub mod file;

pub use chain::build_secret_chain;
pub use env::EnvSecretProvider;
pub use file::FileSecretStore;
