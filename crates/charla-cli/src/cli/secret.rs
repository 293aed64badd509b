//! Secret management commands: set, list, delete.

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use console::style;
use dialoguer::Password;

use crate::state::AppState;

/// Store a secret, prompting without echo when no value was given.
pub async fn set_secret(
    state: &AppState,
    key: &str,
    value: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let value = match value {
        Some(v) => v.to_string(),
        None => Password::new()
            .with_prompt(format!("Value for {key}"))
            .interact()?,
    };

    state.secret_service.set_secret(key, &value).await?;

    if json {
        println!("{}", serde_json::json!({ "key": key, "stored": true }));
    } else {
        println!(
            "  {} Secret '{}' stored in {}",
            style("✓").green().bold(),
            style(key).cyan(),
            state.data_dir.join("secrets.toml").display()
        );
    }
    Ok(())
}

/// List known secret keys and the backend holding each. Values never leave
/// the store.
pub async fn list_secrets(state: &AppState, json: bool) -> anyhow::Result<()> {
    let entries = state.secret_service.list_secrets().await?;

    if json {
        let items: Vec<serde_json::Value> = entries
            .iter()
            .map(|(key, backend)| serde_json::json!({ "key": key, "backend": backend }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!(
            "  {} No secrets stored. Set one with: charla secret set GROQ_API_KEY",
            style("i").blue().bold()
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Key", "Backend"]);
    for (key, backend) in &entries {
        table.add_row(vec![key.as_str(), backend.as_str()]);
    }
    println!("{table}");
    Ok(())
}

/// Delete a stored secret.
pub async fn delete_secret(state: &AppState, key: &str, json: bool) -> anyhow::Result<()> {
    state.secret_service.delete_secret(key).await?;

    if json {
        println!("{}", serde_json::json!({ "key": key, "deleted": true }));
    } else {
        println!(
            "  {} Secret '{}' deleted",
            style("✓").green().bold(),
            style(key).cyan()
        );
    }
    Ok(())
}
