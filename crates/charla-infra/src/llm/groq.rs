//! Groq completion provider.
//!
//! Groq exposes an OpenAI-compatible chat completions endpoint, so the
//! provider is built on [`async_openai`] pointed at
//! `https://api.groq.com/openai/v1`. One request per user turn, a single
//! completion choice, no streaming.
//!
//! Clients are cached for the process lifetime keyed by credential value:
//! repeated sessions with the same key reuse the same HTTP client.

use std::sync::LazyLock;

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
};
use dashmap::DashMap;
use secrecy::{ExposeSecret, SecretString};

use charla_core::llm::provider::LlmProvider;
use charla_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, TurnRole, Usage,
};

/// Base URL of Groq's OpenAI-compatible API.
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Process-lifetime client cache keyed by credential value.
static CLIENTS: LazyLock<DashMap<String, Client<OpenAIConfig>>> = LazyLock::new(DashMap::new);

/// Fetch (or build and cache) the client for an API key.
fn cached_client(api_key: &str) -> Client<OpenAIConfig> {
    CLIENTS
        .entry(api_key.to_owned())
        .or_insert_with(|| {
            let config = OpenAIConfig::new()
                .with_api_key(api_key)
                .with_api_base(GROQ_API_BASE);
            Client::with_config(config)
        })
        .clone()
}

/// Completion provider for Groq's chat API.
///
/// # API Key Security
///
/// Does NOT derive Debug to prevent accidental exposure of the API key
/// stored inside the `async_openai::Client`.
pub struct GroqProvider {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GroqProvider {
    /// Create a provider for the given credential and default model.
    pub fn new(api_key: &SecretString, model: &str) -> Self {
        Self {
            client: cached_client(api_key.expose_secret()),
            model: model.to_string(),
        }
    }

    /// Build a [`CreateChatCompletionRequest`] from a generic
    /// [`CompletionRequest`].
    ///
    /// The system instruction becomes the first wire message; window turns
    /// follow in order. Exactly one choice is requested.
    fn build_request(&self, request: &CompletionRequest) -> CreateChatCompletionRequest {
        let mut messages: Vec<ChatCompletionRequestMessage> = Vec::new();

        if let Some(ref system) = request.system {
            messages.push(ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessage {
                    content: ChatCompletionRequestSystemMessageContent::Text(system.clone()),
                    name: None,
                },
            ));
        }

        for turn in &request.messages {
            let wire_msg = match turn.role {
                TurnRole::System => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage {
                        content: ChatCompletionRequestSystemMessageContent::Text(
                            turn.content.clone(),
                        ),
                        name: None,
                    },
                ),
                TurnRole::User => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage {
                        content: ChatCompletionRequestUserMessageContent::Text(
                            turn.content.clone(),
                        ),
                        name: None,
                    },
                ),
                TurnRole::Assistant => {
                    #[allow(deprecated)]
                    ChatCompletionRequestMessage::Assistant(
                        ChatCompletionRequestAssistantMessage {
                            content: Some(ChatCompletionRequestAssistantMessageContent::Text(
                                turn.content.clone(),
                            )),
                            refusal: None,
                            name: None,
                            audio: None,
                            tool_calls: None,
                            function_call: None,
                        },
                    )
                }
            };
            messages.push(wire_msg);
        }

        // Fall back to the configured default when the request omits a model
        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };

        CreateChatCompletionRequest {
            model,
            messages,
            temperature: request.temperature.map(|t| t as f32),
            n: Some(1),
            ..Default::default()
        }
    }
}

impl LlmProvider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let wire_request = self.build_request(request);
        tracing::debug!(
            model = %wire_request.model,
            messages = wire_request.messages.len(),
            "sending chat completion request"
        );

        let response = self
            .client
            .chat()
            .create(wire_request)
            .await
            .map_err(map_openai_error)?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        let usage = response
            .usage
            .map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: response.id,
            content,
            model: response.model,
            usage,
        })
    }
}

/// Map an `async_openai::error::OpenAIError` to an [`LlmError`].
fn map_openai_error(err: async_openai::error::OpenAIError) -> LlmError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "authentication_error"
                || error_type == "authentication_error"
                || api_err.message.contains("Invalid API Key")
            {
                LlmError::AuthenticationFailed
            } else if code == "rate_limit_exceeded" || error_type == "rate_limit_error" {
                LlmError::RateLimited
            } else {
                LlmError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::Reqwest(reqwest_err) => match reqwest_err.status().map(|s| s.as_u16()) {
            Some(401) => LlmError::AuthenticationFailed,
            Some(429) => LlmError::RateLimited,
            _ => LlmError::Provider {
                message: err.to_string(),
            },
        },
        OpenAIError::JSONDeserialize(_, content) => {
            LlmError::Deserialization(format!("failed to parse response: {content}"))
        }
        OpenAIError::InvalidArgument(msg) => LlmError::InvalidRequest(msg.clone()),
        _ => LlmError::Provider {
            message: err.to_string(),
        },
    }
}
