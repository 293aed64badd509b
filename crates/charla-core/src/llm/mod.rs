//! Completion provider abstraction and the fail-soft invoker.

pub mod box_provider;
pub mod invoker;
pub mod provider;

pub use box_provider::BoxLlmProvider;
pub use invoker::CompletionInvoker;
pub use provider::LlmProvider;
