//! Interactive chat experience for charla.
//!
//! The chat loop keeps a per-session conversation memory, sends the
//! trailing window to Groq on each submission, and renders replies as
//! markdown with highlighted code blocks. Entry point:
//! `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;

pub use loop_runner::run_chat_loop;
