//! Chat turn and completion request/response types for charla.
//!
//! These types model the data shapes exchanged with the completion
//! provider: conversation turns, the outbound request, and the reply.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a turn in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::System => write!(f, "system"),
            TurnRole::User => write!(f, "user"),
            TurnRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(TurnRole::System),
            "user" => Ok(TurnRole::User),
            "assistant" => Ok(TurnRole::Assistant),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

/// Where an assistant turn came from.
///
/// A failed provider call is rendered like a real reply, but the turn is
/// tagged `Error` internally so logs and tests can tell the two apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnOrigin {
    /// A real user input or provider reply.
    #[default]
    Genuine,
    /// A synthetic turn fabricated from a provider failure.
    Error,
}

impl TurnOrigin {
    fn is_genuine(&self) -> bool {
        matches!(self, TurnOrigin::Genuine)
    }
}

/// A single turn in a conversation. Immutable once appended to memory;
/// ordering is chronological and significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "TurnOrigin::is_genuine")]
    pub origin: TurnOrigin,
}

impl ChatTurn {
    /// A system instruction turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::System,
            content: content.into(),
            origin: TurnOrigin::Genuine,
        }
    }

    /// A user input turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
            origin: TurnOrigin::Genuine,
        }
    }

    /// A genuine assistant reply.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
            origin: TurnOrigin::Genuine,
        }
    }

    /// A synthetic assistant turn carrying a provider failure, displayed
    /// identically to a real reply.
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
            origin: TurnOrigin::Error,
        }
    }

    /// Whether this turn was fabricated from a provider failure.
    pub fn is_synthetic(&self) -> bool {
        self.origin == TurnOrigin::Error
    }
}

/// Request to the completion provider for a single reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatTurn>,
    /// Active system instruction; sent separately from `messages` so it is
    /// never lost to window arithmetic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Response from the completion provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub content: String,
    pub model: String,
    pub usage: Usage,
}

/// Token usage reported by the provider for one exchange.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// Errors from completion provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited")]
    RateLimited,

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_role_roundtrip() {
        for role in [TurnRole::System, TurnRole::User, TurnRole::Assistant] {
            let s = role.to_string();
            let parsed: TurnRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_turn_role_serde() {
        let role = TurnRole::Assistant;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: TurnRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TurnRole::Assistant);
    }

    #[test]
    fn test_turn_role_invalid() {
        let parsed: Result<TurnRole, _> = "narrator".parse();
        assert!(parsed.is_err());
    }

    #[test]
    fn test_constructors_set_origin() {
        assert_eq!(ChatTurn::user("hola").origin, TurnOrigin::Genuine);
        assert_eq!(ChatTurn::assistant("hola").origin, TurnOrigin::Genuine);
        assert_eq!(ChatTurn::error("fallo").origin, TurnOrigin::Error);
        assert!(ChatTurn::error("fallo").is_synthetic());
        assert!(!ChatTurn::assistant("hola").is_synthetic());
    }

    #[test]
    fn test_error_turn_is_assistant_role() {
        // Synthetic turns must be display-identical to real replies.
        let turn = ChatTurn::error("Lo siento");
        assert_eq!(turn.role, TurnRole::Assistant);
    }

    #[test]
    fn test_genuine_origin_skipped_in_serde() {
        let json = serde_json::to_string(&ChatTurn::user("hola")).unwrap();
        assert!(!json.contains("origin"));

        let json = serde_json::to_string(&ChatTurn::error("fallo")).unwrap();
        assert!(json.contains("\"origin\":\"error\""));
    }

    #[test]
    fn test_turn_deserialize_without_origin() {
        let turn: ChatTurn =
            serde_json::from_str(r#"{"role":"assistant","content":"hola"}"#).unwrap();
        assert_eq!(turn.origin, TurnOrigin::Genuine);
    }

    #[test]
    fn test_completion_request_skips_empty_fields() {
        let request = CompletionRequest {
            model: "llama3-8b-8192".to_string(),
            messages: vec![ChatTurn::user("hola")],
            system: None,
            temperature: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("system"));
        assert!(!json.contains("temperature"));
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Provider {
            message: "timeout".to_string(),
        };
        assert!(err.to_string().contains("timeout"));
    }
}
