//! Infrastructure adapters for charla.
//!
//! Concrete implementations of the traits defined in `charla-core`: the
//! Groq completion provider (OpenAI-compatible protocol), the TOML-file
//! secret store, the environment-variable secret provider, and data
//! directory resolution.

pub mod llm;
pub mod paths;
pub mod secret;
