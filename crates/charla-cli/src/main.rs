//! charla CLI entry point.
//!
//! Binary name: `charla`
//!
//! Parses CLI arguments, initializes the secret chain, then dispatches to
//! the chat loop or a secret management command. Running `charla` with no
//! subcommand starts a chat session.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, SecretCommand};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,charla=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "charla", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init();

    match cli.command {
        None => {
            let config = cli.chat.into_config().await?;
            cli::chat::run_chat_loop(&state, config).await?;
        }

        Some(Commands::Chat(args)) => {
            let config = args.into_config().await?;
            cli::chat::run_chat_loop(&state, config).await?;
        }

        Some(Commands::Secret { command }) => match command {
            SecretCommand::Set { key, value } => {
                cli::secret::set_secret(&state, &key, value.as_deref(), cli.json).await?;
            }
            SecretCommand::List => {
                cli::secret::list_secrets(&state, cli.json).await?;
            }
            SecretCommand::Delete { key } => {
                cli::secret::delete_secret(&state, &key, cli.json).await?;
            }
        },

        Some(Commands::Completions { .. }) => unreachable!("handled above"),
    }

    Ok(())
}
