//! Welcome banner and persistent notices for chat sessions.

use console::style;

use charla_types::config::ChatConfig;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(config: &ChatConfig, session_id: &str) {
    println!();
    println!(
        "  {} {}",
        style("charla").cyan().bold(),
        style("· chatbot con memoria de sesión").dim()
    );
    println!();
    println!(
        "  {}        {}",
        style("Modelo:").bold(),
        style(&config.model).dim()
    );
    println!(
        "  {}   {}",
        style("Temperatura:").bold(),
        style(config.temperature).dim()
    );
    println!(
        "  {}       {}",
        style("Ventana:").bold(),
        style(format!("{} turnos", config.window)).dim()
    );
    println!(
        "  {}        {}",
        style("Sesión:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Escribe /help para ver los comandos, Ctrl+D para salir").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}

/// Print the persistent notice shown when no API key could be resolved.
///
/// The session still runs: submissions are accepted and remembered, but no
/// provider call is attempted without a key.
pub fn print_missing_key_notice(secrets_path: &std::path::Path) {
    println!(
        "  {} No encuentro la clave. Añádela en `{}` como `GROQ_API_KEY` \
         o exporta la variable de entorno `GROQ_API_KEY`.",
        style("!").red().bold(),
        secrets_path.display()
    );
    println!(
        "  {}",
        style("Sin clave no se envía nada a Groq; los mensajes solo quedan en la memoria local.")
            .dim()
    );
    println!();
}
