//! Shared domain types for charla.
//!
//! This crate contains the core domain types used across the charla
//! workspace: chat turns, completion request/response shapes, chat
//! configuration, session bookkeeping, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod error;
pub mod llm;
pub mod session;
