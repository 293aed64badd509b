//! CLI command definitions and dispatch for the `charla` binary.
//!
//! Uses clap derive macros. `charla` without a subcommand starts a chat
//! session; the top-level chat flags apply in that case.

pub mod chat;
pub mod secret;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use charla_types::config::{ChatConfig, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_WINDOW};

/// Chat with a Groq-hosted model from your terminal, with session memory.
#[derive(Parser)]
#[command(name = "charla", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Chat settings used when no subcommand is given.
    #[command(flatten)]
    pub chat: ChatArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session (the default).
    Chat(ChatArgs),

    /// Manage stored secrets (the Groq API key).
    Secret {
        #[command(subcommand)]
        command: SecretCommand,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum SecretCommand {
    /// Store a secret value (prompts when VALUE is omitted).
    Set {
        /// Secret key name (e.g., GROQ_API_KEY).
        key: String,
        /// Secret value; omit to be prompted without echo.
        value: Option<String>,
    },

    /// List stored secret keys (values are never shown).
    List,

    /// Delete a stored secret.
    Delete {
        /// Secret key name to delete.
        key: String,
    },
}

/// Session settings for the chat loop.
///
/// Out-of-range temperature and window values are clamped to their bounds
/// rather than rejected.
#[derive(Args, Clone)]
pub struct ChatArgs {
    /// Model to chat with.
    #[arg(long, default_value = DEFAULT_MODEL, value_parser = [DEFAULT_MODEL])]
    pub model: String,

    /// Sampling temperature, 0.0 to 1.5.
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f64,

    /// Trailing turns sent to the provider per request, 4 to 64.
    #[arg(long, default_value_t = DEFAULT_WINDOW)]
    pub window: usize,

    /// System instruction text.
    #[arg(long, conflicts_with = "system_file")]
    pub system: Option<String>,

    /// Read the system instruction from a file.
    #[arg(long, value_name = "PATH")]
    pub system_file: Option<PathBuf>,
}

impl ChatArgs {
    /// Assemble the session config, reading the system file if given.
    pub async fn into_config(self) -> anyhow::Result<ChatConfig> {
        let system_prompt = match (self.system, self.system_file) {
            (Some(text), _) => text,
            (None, Some(path)) => tokio::fs::read_to_string(&path)
                .await
                .map_err(|err| {
                    anyhow::anyhow!("failed to read system file '{}': {err}", path.display())
                })?
                .trim_end()
                .to_string(),
            (None, None) => charla_types::config::DEFAULT_SYSTEM_PROMPT.to_string(),
        };

        Ok(ChatConfig::new(
            self.model,
            self.temperature,
            self.window,
            system_prompt,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_args() -> ChatArgs {
        ChatArgs {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            window: DEFAULT_WINDOW,
            system: None,
            system_file: None,
        }
    }

    #[tokio::test]
    async fn test_into_config_defaults() {
        let config = default_args().into_config().await.unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.window, 24);
        assert!(config.system_prompt.contains("español"));
    }

    #[tokio::test]
    async fn test_into_config_inline_system() {
        let mut args = default_args();
        args.system = Some("Sé breve.".to_string());
        let config = args.into_config().await.unwrap();
        assert_eq!(config.system_prompt, "Sé breve.");
    }

    #[tokio::test]
    async fn test_into_config_system_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("system.txt");
        tokio::fs::write(&path, "Desde archivo.\n").await.unwrap();

        let mut args = default_args();
        args.system_file = Some(path);
        let config = args.into_config().await.unwrap();
        assert_eq!(config.system_prompt, "Desde archivo.");
    }

    #[tokio::test]
    async fn test_into_config_missing_system_file() {
        let mut args = default_args();
        args.system_file = Some(PathBuf::from("/no/such/file.txt"));
        assert!(args.into_config().await.is_err());
    }

    #[tokio::test]
    async fn test_into_config_clamps_out_of_range() {
        let mut args = default_args();
        args.temperature = 9.0;
        args.window = 1;
        let config = args.into_config().await.unwrap();
        assert!((config.temperature - 1.5).abs() < f64::EPSILON);
        assert_eq!(config.window, 4);
    }
}
