use thiserror::Error;

/// Errors from secret storage backends.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("secret not found")]
    NotFound,

    #[error("secret provider is read-only")]
    ReadOnly,

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from exporting a conversation transcript.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write transcript to '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
