//! LlmProvider trait definition.
//!
//! The one abstraction every completion backend implements. Uses native
//! async fn in traits (RPITIT, Rust 2024 edition); the concrete Groq
//! implementation lives in `charla-infra`.

use charla_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion provider backends.
///
/// One request, one reply: charla sends a single blocking request per user
/// turn and asks for a single completion choice. No streaming.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "groq").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
