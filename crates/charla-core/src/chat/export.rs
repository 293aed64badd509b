//! Plain-text transcript export.
//!
//! The export artifact is a single text blob: every non-system turn as
//! `"ROLE: content"`, blank-line separated, offered as `chat_groq.txt`.

use std::path::Path;

use charla_types::error::ExportError;
use charla_types::llm::TurnRole;

use super::memory::ConversationMemory;

/// Default filename for an exported conversation.
pub const EXPORT_FILE_NAME: &str = "chat_groq.txt";

/// Render the full memory as a downloadable transcript.
///
/// The system turn is excluded; every other turn becomes
/// `"{ROLE}: {content}"` with the role upper-cased, joined by blank lines.
pub fn transcript(memory: &ConversationMemory) -> String {
    let lines: Vec<String> = memory
        .turns()
        .iter()
        .filter(|turn| turn.role != TurnRole::System)
        .map(|turn| format!("{}: {}", turn.role.to_string().to_uppercase(), turn.content))
        .collect();
    lines.join("\n\n")
}

/// Write the transcript to `path`.
///
/// An empty transcript still produces a file, matching the download
/// behavior of the original artifact.
pub async fn write_transcript(
    memory: &ConversationMemory,
    path: &Path,
) -> Result<(), ExportError> {
    let blob = transcript(memory);
    tokio::fs::write(path, blob)
        .await
        .map_err(|source| ExportError::Write {
            path: path.display().to_string(),
            source,
        })
}
