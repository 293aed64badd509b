//! Data directory resolution.
//!
//! charla keeps its per-deployment files (the secrets file) under
//! `~/.charla/`, overridable with `CHARLA_DATA_DIR`.

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CHARLA_DATA_DIR";

/// Resolve the data directory.
///
/// `CHARLA_DATA_DIR` wins when set; otherwise `~/.charla`. Falls back to
/// `.charla` in the working directory when no home directory is known.
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    match dirs::home_dir() {
        Some(home) => home.join(".charla"),
        None => PathBuf::from(".charla"),
    }
}

/// Path of the secrets file inside a data directory.
pub fn secrets_file(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join("secrets.toml")
}
