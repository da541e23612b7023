//! Canned message file loader.
//!
//! The file is a JSON array of `{"tag": "...", "messages": ["..."]}` rows.
//! Its rows replace the built-in phrasings tag by tag; tags it does not
//! mention keep the compiled-in defaults.

use std::path::Path;

use confab_core::messages::{MessageEntry, MessageTable};

/// Build the message table, layering `path` over the built-ins when given.
///
/// A file that cannot be read or parsed is logged and ignored.
pub async fn load_message_table(path: Option<&Path>) -> MessageTable {
    let mut table = MessageTable::builtin();
    let Some(path) = path else {
        return table;
    };

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using built-in messages", path.display());
            return table;
        }
    };

    match serde_json::from_str::<Vec<MessageEntry>>(&content) {
        Ok(entries) => {
            tracing::debug!(
                path = %path.display(),
                entries = entries.len(),
                "Loaded canned messages"
            );
            table.extend(entries);
        }
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using built-in messages", path.display());
        }
    }

    table
}
