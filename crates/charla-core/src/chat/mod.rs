//! Conversation state for one interactive session: the memory store,
//! transcript export, and session lifecycle tracking.

pub mod export;
pub mod memory;
pub mod session;

pub use memory::ConversationMemory;
