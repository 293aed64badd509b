//! Secret resolution: the provider trait, its object-safe wrapper, and the
//! chain-of-providers service.

pub mod provider;
pub mod service;

pub use provider::{DynSecretProvider, SecretProvider};
pub use service::SecretService;

/// The credential charla needs to reach the completion provider.
pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
