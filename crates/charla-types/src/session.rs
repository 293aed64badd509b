//! Chat session bookkeeping types for charla.
//!
//! A session is one interactive run of the chat loop. Sessions are not
//! persisted; they exist for banner display, logging, and usage totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a chat session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Active,
    Completed,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Active => write!(f, "active"),
            SessionStatus::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(SessionStatus::Active),
            "completed" => Ok(SessionStatus::Completed),
            other => Err(format!("invalid session status: '{other}'")),
        }
    }
}

/// One interactive chat session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub model: String,
    pub total_prompt_tokens: u32,
    pub total_completion_tokens: u32,
    pub status: SessionStatus,
}

impl ChatSession {
    /// Start a fresh session for the given model.
    pub fn start(model: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            started_at: Utc::now(),
            ended_at: None,
            model: model.into(),
            total_prompt_tokens: 0,
            total_completion_tokens: 0,
            status: SessionStatus::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_session() {
        let session = ChatSession::start("llama3-8b-8192");
        assert_eq!(session.status, SessionStatus::Active);
        assert!(session.ended_at.is_none());
        assert_eq!(session.total_prompt_tokens, 0);
    }

    #[test]
    fn test_session_status_roundtrip() {
        for status in [SessionStatus::Active, SessionStatus::Completed] {
            let s = status.to_string();
            let parsed: SessionStatus = s.parse().unwrap();
            assert_eq!(status, parsed);
        }
    }
}
