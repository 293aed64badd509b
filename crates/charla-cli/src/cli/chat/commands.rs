//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for memory,
//! export, and configuration.

use std::path::PathBuf;

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Reset the conversation memory to a fresh system turn.
    Clear,
    /// Write the transcript to a file (default: chat_groq.txt).
    Export(Option<PathBuf>),
    /// Replace the configured system instruction (applies on next /clear).
    System(String),
    /// Show the active session settings.
    Config,
    /// End the chat session.
    Exit,
    /// Recognized command missing its required argument.
    Usage(&'static str),
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim().to_string());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/borrar" => Some(ChatCommand::Clear),
        "/export" | "/exportar" => Some(ChatCommand::Export(
            arg.filter(|a| !a.is_empty()).map(PathBuf::from),
        )),
        "/system" => match arg.filter(|a| !a.is_empty()) {
            Some(text) => Some(ChatCommand::System(text)),
            None => Some(ChatCommand::Usage("Uso: /system <texto de la instrucción>")),
        },
        "/config" => Some(ChatCommand::Config),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Comandos disponibles:").bold());
    println!();
    println!(
        "  {}            {}",
        style("/help").cyan(),
        "Muestra esta ayuda"
    );
    println!(
        "  {}           {}",
        style("/clear").cyan(),
        "Borra la memoria de la conversación"
    );
    println!(
        "  {}   {}",
        style("/export [ruta]").cyan(),
        "Guarda la conversación (por defecto chat_groq.txt)"
    );
    println!(
        "  {}  {}",
        style("/system <texto>").cyan(),
        "Cambia la instrucción (se aplica al próximo /clear)"
    );
    println!(
        "  {}          {}",
        style("/config").cyan(),
        "Muestra la configuración activa"
    );
    println!(
        "  {}            {}",
        style("/exit").cyan(),
        "Termina la sesión"
    );
    println!();
    println!("  {}", style("Ctrl+D para salir").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_clear() {
        assert_eq!(parse("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse("/borrar"), Some(ChatCommand::Clear));
    }

    #[test]
    fn test_parse_export_default() {
        assert_eq!(parse("/export"), Some(ChatCommand::Export(None)));
    }

    #[test]
    fn test_parse_export_with_path() {
        assert_eq!(
            parse("/export notas.txt"),
            Some(ChatCommand::Export(Some(PathBuf::from("notas.txt"))))
        );
    }

    #[test]
    fn test_parse_system() {
        assert_eq!(
            parse("/system Responde en inglés."),
            Some(ChatCommand::System("Responde en inglés.".to_string()))
        );
    }

    #[test]
    fn test_parse_system_without_text() {
        assert_eq!(
            parse("/system"),
            Some(ChatCommand::Usage("Uso: /system <texto de la instrucción>"))
        );
        assert_eq!(
            parse("/system   "),
            Some(ChatCommand::Usage("Uso: /system <texto de la instrucción>"))
        );
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("hola, ¿qué tal?"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse("/foo"),
            Some(ChatCommand::Unknown("/foo".to_string()))
        );
    }
}
