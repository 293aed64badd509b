//! Session-scoped conversation memory.
//!
//! `ConversationMemory` is an ordered, mutable sequence of chat turns owned
//! by the session context. It is seeded with a system instruction, appended
//! to on every user submission and every reply, and reset to a single fresh
//! system turn on explicit clear. Total stored history is unbounded for the
//! session's lifetime; only the trailing window is sent to the provider.

use charla_types::llm::{ChatTurn, TurnRole};

/// Ordered conversation history for one session.
///
/// This is plain in-memory state: the operations are structural and have
/// no failure modes. The owning session context is the only mutator.
#[derive(Debug, Clone, Default)]
pub struct ConversationMemory {
    turns: Vec<ChatTurn>,
}

impl ConversationMemory {
    /// Create an empty, unseeded memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the memory with a single system turn if it is empty.
    ///
    /// Idempotent: an already-seeded memory is left untouched, even when
    /// `system_prompt` differs from the stored instruction.
    pub fn ensure(&mut self, system_prompt: &str) {
        if self.turns.is_empty() {
            self.turns.push(ChatTurn::system(system_prompt));
        }
    }

    /// Unconditionally replace the history with a single fresh system turn.
    pub fn reset(&mut self, system_prompt: &str) {
        self.turns.clear();
        self.turns.push(ChatTurn::system(system_prompt));
    }

    /// Append a turn to the end of the history. No dedup, no size cap.
    pub fn append(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    /// The trailing `n` turns in original order.
    ///
    /// When `n` exceeds the stored length the whole history is returned.
    pub fn window(&self, n: usize) -> &[ChatTurn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    /// Content of the leading system turn, if the memory has been seeded.
    pub fn system_instruction(&self) -> Option<&str> {
        self.turns
            .first()
            .filter(|t| t.role == TurnRole::System)
            .map(|t| t.content.as_str())
    }

    /// Full stored history in chronological order.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charla_types::llm::TurnOrigin;

    #[test]
    fn test_ensure_seeds_empty_memory() {
        let mut memory = ConversationMemory::new();
        memory.ensure("Sé útil.");

        assert_eq!(memory.len(), 1);
        assert_eq!(memory.turns()[0].role, TurnRole::System);
        assert_eq!(memory.turns()[0].content, "Sé útil.");
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let mut memory = ConversationMemory::new();
        memory.ensure("primero");
        memory.append(ChatTurn::user("hola"));
        memory.ensure("segundo");

        assert_eq!(memory.len(), 2);
        assert_eq!(memory.system_instruction(), Some("primero"));
    }

    #[test]
    fn test_append_grows_without_bound() {
        let mut memory = ConversationMemory::new();
        memory.ensure("p");
        for i in 0..100 {
            memory.append(ChatTurn::user(format!("mensaje {i}")));
        }

        // N appends onto a seeded memory: length N + 1, system turn intact.
        assert_eq!(memory.len(), 101);
        assert_eq!(memory.turns()[0].role, TurnRole::System);
    }

    #[test]
    fn test_reset_replaces_everything() {
        let mut memory = ConversationMemory::new();
        memory.ensure("viejo");
        memory.append(ChatTurn::user("hola"));
        memory.append(ChatTurn::assistant("buenas"));

        memory.reset("nuevo");

        assert_eq!(memory.len(), 1);
        assert_eq!(memory.turns()[0], ChatTurn::system("nuevo"));
    }

    #[test]
    fn test_reset_on_empty_memory() {
        let mut memory = ConversationMemory::new();
        memory.reset("p");
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn test_window_returns_trailing_slice() {
        let mut memory = ConversationMemory::new();
        memory.ensure("p");
        for i in 1..30 {
            memory.append(ChatTurn::user(format!("{i}")));
        }
        assert_eq!(memory.len(), 30);

        // 30 stored turns, window 24: elements 7..30 one-indexed.
        let window = memory.window(24);
        assert_eq!(window.len(), 24);
        assert_eq!(window[0].content, "6");
        assert_eq!(window[23].content, "29");
    }

    #[test]
    fn test_window_larger_than_history() {
        let mut memory = ConversationMemory::new();
        memory.ensure("p");
        memory.append(ChatTurn::user("hola"));

        let window = memory.window(24);
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].role, TurnRole::System);
    }

    #[test]
    fn test_window_preserves_order() {
        let mut memory = ConversationMemory::new();
        memory.ensure("p");
        memory.append(ChatTurn::user("uno"));
        memory.append(ChatTurn::assistant("dos"));
        memory.append(ChatTurn::user("tres"));

        let window = memory.window(3);
        let contents: Vec<&str> = window.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["uno", "dos", "tres"]);
    }

    #[test]
    fn test_system_instruction_absent_on_empty() {
        let memory = ConversationMemory::new();
        assert_eq!(memory.system_instruction(), None);
    }

    #[test]
    fn test_synthetic_turns_are_stored_like_real_ones() {
        let mut memory = ConversationMemory::new();
        memory.ensure("p");
        memory.append(ChatTurn::error("Lo siento, ocurrió un error"));

        assert_eq!(memory.len(), 2);
        assert_eq!(memory.turns()[1].origin, TurnOrigin::Error);
        assert_eq!(memory.turns()[1].role, TurnRole::Assistant);
    }
}
