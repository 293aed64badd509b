//! Main chat loop orchestration.
//!
//! Coordinates one interactive session: credential resolution, memory
//! seeding, the input loop with slash commands, completion invocation, and
//! rendering. One submission at a time; the completion call blocks the
//! handling of that submission until the provider responds or errors.

use std::time::Instant;

use console::style;
use secrecy::SecretString;
use tracing::{debug, info};

use charla_core::chat::export::{EXPORT_FILE_NAME, write_transcript};
use charla_core::chat::memory::ConversationMemory;
use charla_core::chat::session::SessionManager;
use charla_core::llm::box_provider::BoxLlmProvider;
use charla_core::llm::invoker::{CompletionInvoker, InvocationOutcome};
use charla_core::secret::GROQ_API_KEY;
use charla_infra::llm::groq::GroqProvider;
use charla_infra::paths;
use charla_types::config::ChatConfig;
use charla_types::llm::ChatTurn;
use charla_types::session::ChatSession;

use crate::state::AppState;

use super::banner::{print_missing_key_notice, print_welcome_banner};
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Resolve the API key and build the provider, if a key is available.
///
/// A missing key is not an error: the chat loop runs without a provider
/// and simply never attempts a call.
async fn create_provider(state: &AppState, model: &str) -> anyhow::Result<Option<BoxLlmProvider>> {
    let api_key = state.secret_service.get_secret(GROQ_API_KEY).await?;
    Ok(api_key.map(|key| {
        let key = SecretString::from(key);
        BoxLlmProvider::new(GroqProvider::new(&key, model))
    }))
}

/// Handle one user submission.
///
/// The user's turn is always remembered, whether or not a call can be
/// attempted. Without a provider no call happens and `None` is returned;
/// memory then changes by exactly the appended user turn.
async fn submit_message(
    provider: Option<&BoxLlmProvider>,
    memory: &mut ConversationMemory,
    config: &ChatConfig,
    text: String,
) -> Option<InvocationOutcome> {
    memory.append(ChatTurn::user(text));
    let provider = provider?;
    Some(CompletionInvoker::invoke(provider, memory, config).await)
}

/// Run the interactive chat loop.
pub async fn run_chat_loop(state: &AppState, config: ChatConfig) -> anyhow::Result<()> {
    let mut config = config;
    let provider = create_provider(state, &config.model).await?;

    let session = ChatSession::start(config.model.clone());
    let mut session_manager = SessionManager::new(session);
    let session_id = session_manager.session().id.to_string();
    info!(session = %session_id, model = %config.model, "chat session started");

    print_welcome_banner(&config, &session_id);
    if provider.is_none() {
        print_missing_key_notice(&paths::secrets_file(&state.data_dir));
    }

    let mut memory = ConversationMemory::new();
    memory.ensure(&config.system_prompt);

    let renderer = ChatRenderer::new();
    let prompt = format!("  {} ", style("Tú >").green().bold());
    let (mut chat_input, _writer) =
        ChatInput::new(prompt).map_err(|e| anyhow::anyhow!("failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Sesión terminada.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Ctrl+D para salir, o sigue escribiendo.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                            continue;
                        }
                        ChatCommand::Clear => {
                            memory.reset(&config.system_prompt);
                            println!("\n  {} Memoria borrada.\n", style("✓").green().bold());
                            continue;
                        }
                        ChatCommand::Export(path) => {
                            let path =
                                path.unwrap_or_else(|| std::path::PathBuf::from(EXPORT_FILE_NAME));
                            match write_transcript(&memory, &path).await {
                                Ok(()) => println!(
                                    "\n  {} Conversación guardada en {}\n",
                                    style("✓").green().bold(),
                                    style(path.display()).cyan()
                                ),
                                Err(e) => println!(
                                    "\n  {} No se pudo exportar: {e}\n",
                                    style("!").red().bold()
                                ),
                            }
                            continue;
                        }
                        ChatCommand::System(text) => {
                            config.set_system_prompt(text);
                            println!(
                                "\n  {} Instrucción actualizada; se aplica al próximo /clear.\n",
                                style("✓").green().bold()
                            );
                            continue;
                        }
                        ChatCommand::Config => {
                            print_config(&config);
                            continue;
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Sesión terminada.").dim());
                            break;
                        }
                        ChatCommand::Usage(usage) => {
                            println!("\n  {} {usage}\n", style("?").yellow().bold());
                            continue;
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Comando desconocido: {}. Escribe /help para la lista.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                            continue;
                        }
                    }
                }

                let spinner = provider.is_some().then(thinking_spinner);

                let start_time = Instant::now();
                let outcome =
                    submit_message(provider.as_ref(), &mut memory, &config, text).await;
                if let Some(spinner) = spinner {
                    spinner.finish_and_clear();
                }

                let Some(outcome) = outcome else {
                    print_missing_key_notice(&paths::secrets_file(&state.data_dir));
                    continue;
                };

                let response_ms = start_time.elapsed().as_millis() as u64;
                debug!(
                    synthetic = outcome.turn.is_synthetic(),
                    response_ms, "turn completed"
                );

                println!();
                println!("  {}", style("charla >").cyan().bold());
                let rendered = renderer.render_reply(&outcome.turn.content);
                println!("{}", rendered.trim_end());
                println!(
                    "\n  {}",
                    style(format!(
                        "· {} tokens · {:.1}s · {}",
                        outcome.usage.completion_tokens,
                        response_ms as f64 / 1000.0,
                        config.model
                    ))
                    .dim()
                );
                println!();

                session_manager
                    .add_token_usage(outcome.usage.prompt_tokens, outcome.usage.completion_tokens);
                session_manager.increment_turn();
                memory.append(outcome.turn);
            }
        }
    }

    session_manager.mark_completed();
    info!(
        session = %session_id,
        turns = session_manager.turn_count(),
        prompt_tokens = session_manager.session().total_prompt_tokens,
        completion_tokens = session_manager.session().total_completion_tokens,
        "chat session ended"
    );
    Ok(())
}

/// Spinner shown while the completion call is in flight.
fn thinking_spinner() -> indicatif::ProgressBar {
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner()),
    );
    spinner.set_message("pensando...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Show the active session settings.
fn print_config(config: &ChatConfig) {
    let mut preview: String = config.system_prompt.chars().take(60).collect();
    if config.system_prompt.chars().count() > 60 {
        preview.push('…');
    }
    println!();
    println!("  {}", style("Configuración:").bold());
    println!("  modelo       {}", style(&config.model).dim());
    println!("  temperatura  {}", style(config.temperature).dim());
    println!(
        "  ventana      {}",
        style(format!("{} turnos", config.window)).dim()
    );
    println!("  instrucción  {}", style(preview).dim());
    println!();
}
