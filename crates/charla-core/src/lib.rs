//! Business logic for charla.
//!
//! This crate holds the conversational core: session-scoped memory with
//! trailing-window derivation, transcript export, the `LlmProvider` trait
//! and its type-erased wrapper, the fail-soft completion invoker, and the
//! secret resolution chain. Concrete adapters (Groq client, secret file,
//! environment variables) live in `charla-infra`.

pub mod chat;
pub mod llm;
pub mod secret;
