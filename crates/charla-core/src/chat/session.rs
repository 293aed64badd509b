//! Session lifecycle tracking.
//!
//! Wraps a `ChatSession` with turn counting and usage totals. Sessions are
//! process-local: they end when the chat loop exits.

use charla_types::session::{ChatSession, SessionStatus};
use chrono::Utc;

/// Manages the lifecycle and running totals of a single chat session.
pub struct SessionManager {
    session: ChatSession,
    /// Completed exchanges (one user message + one reply).
    turn_count: u32,
}

impl SessionManager {
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            turn_count: 0,
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Record one completed user/assistant exchange.
    pub fn increment_turn(&mut self) {
        self.turn_count += 1;
    }

    /// Accumulate token usage from a provider reply.
    pub fn add_token_usage(&mut self, prompt_tokens: u32, completion_tokens: u32) {
        self.session.total_prompt_tokens += prompt_tokens;
        self.session.total_completion_tokens += completion_tokens;
    }

    /// Mark the session as completed and stamp the end time.
    pub fn mark_completed(&mut self) {
        self.session.status = SessionStatus::Completed;
        self.session.ended_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> ChatSession {
        ChatSession::start("llama3-8b-8192")
    }

    #[test]
    fn test_new_session_manager() {
        let mgr = SessionManager::new(test_session());
        assert_eq!(mgr.turn_count(), 0);
        assert_eq!(mgr.session().status, SessionStatus::Active);
    }

    #[test]
    fn test_increment_turn() {
        let mut mgr = SessionManager::new(test_session());
        mgr.increment_turn();
        mgr.increment_turn();
        assert_eq!(mgr.turn_count(), 2);
    }

    #[test]
    fn test_add_token_usage() {
        let mut mgr = SessionManager::new(test_session());
        mgr.add_token_usage(100, 200);
        mgr.add_token_usage(50, 75);
        assert_eq!(mgr.session().total_prompt_tokens, 150);
        assert_eq!(mgr.session().total_completion_tokens, 275);
    }

    #[test]
    fn test_mark_completed() {
        let mut mgr = SessionManager::new(test_session());
        assert!(mgr.session().ended_at.is_none());

        mgr.mark_completed();
        assert_eq!(mgr.session().status, SessionStatus::Completed);
        assert!(mgr.session().ended_at.is_some());
    }
}
