//! Fail-soft completion invocation.
//!
//! `CompletionInvoker` derives the trailing window from the session memory,
//! assembles the outbound request, and performs one blocking call to the
//! provider. A failed call never reaches the chat loop as an error: it is
//! converted into a synthetic assistant turn carrying a human-readable
//! message, rendered exactly like a real reply.
//!
//! The system instruction travels in the request's dedicated `system` field,
//! populated from the memory's seed turn. This keeps the instruction in
//! every request even after the conversation scrolls past the window size;
//! the count-based window only governs which conversation turns are sent.

use tracing::{debug, warn};

use charla_types::config::ChatConfig;
use charla_types::llm::{ChatTurn, CompletionRequest, TurnRole, Usage};

use crate::chat::memory::ConversationMemory;

use super::box_provider::BoxLlmProvider;

/// Result of one completion invocation.
///
/// Always carries a displayable turn; `usage` is zero when the call failed.
pub struct InvocationOutcome {
    pub turn: ChatTurn,
    pub usage: Usage,
}

/// Stateless invoker bridging the memory store and a provider.
pub struct CompletionInvoker;

impl CompletionInvoker {
    /// Assemble the outbound request from the memory's trailing window.
    ///
    /// System turns inside the window are lifted out of `messages` (the
    /// instruction already travels in the `system` field; sending it twice
    /// would double-prompt the model).
    pub fn build_request(memory: &ConversationMemory, config: &ChatConfig) -> CompletionRequest {
        let messages: Vec<ChatTurn> = memory
            .window(config.window)
            .iter()
            .filter(|turn| turn.role != TurnRole::System)
            .cloned()
            .collect();

        CompletionRequest {
            model: config.model.clone(),
            messages,
            system: memory.system_instruction().map(str::to_owned),
            temperature: Some(config.temperature),
        }
    }

    /// Perform one completion call and fold any failure into a synthetic
    /// assistant turn.
    pub async fn invoke(
        provider: &BoxLlmProvider,
        memory: &ConversationMemory,
        config: &ChatConfig,
    ) -> InvocationOutcome {
        let request = Self::build_request(memory, config);
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "sending completion request"
        );

        match provider.complete(&request).await {
            Ok(response) => {
                debug!(
                    id = %response.id,
                    prompt_tokens = response.usage.prompt_tokens,
                    completion_tokens = response.usage.completion_tokens,
                    "completion received"
                );
                InvocationOutcome {
                    turn: ChatTurn::assistant(response.content),
                    usage: response.usage,
                }
            }
            Err(err) => {
                warn!(provider = provider.name(), error = %err, "completion call failed");
                InvocationOutcome {
                    turn: ChatTurn::error(format!(
                        "Lo siento, ocurrió un error al llamar a Groq: `{err}`"
                    )),
                    usage: Usage::default(),
                }
            }
        }
    }
}
