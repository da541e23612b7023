//! Static table of canned replies keyed by tag.
//!
//! Used for replies the gateway produces without consulting the classifier,
//! such as the "too long" length-guard answer. Each tag may carry several
//! phrasings; one is picked at random per reply.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use confab_types::protocol::{DONT_UNDERSTAND_TAG, TOO_LONG_TAG};

/// One row of the message file: a tag and its phrasings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntry {
    pub tag: String,
    pub messages: Vec<String>,
}

/// Tag → phrasings lookup.
#[derive(Debug, Clone, Default)]
pub struct MessageTable {
    messages: HashMap<String, Vec<String>>,
}

impl MessageTable {
    /// Table with the compiled-in phrasings for every tag the gateway emits itself.
    pub fn builtin() -> Self {
        let mut table = Self::default();
        table.extend(vec![
            MessageEntry {
                tag: TOO_LONG_TAG.to_string(),
                messages: vec![
                    "Your message is too long, could you make it shorter?".to_string(),
                    "That's a lot to read! Please keep it under 500 characters.".to_string(),
                ],
            },
            MessageEntry {
                tag: DONT_UNDERSTAND_TAG.to_string(),
                messages: vec![
                    "Sorry, I don't understand what you mean.".to_string(),
                    "I'm not sure I follow, could you rephrase that?".to_string(),
                ],
            },
        ]);
        table
    }

    /// Add or replace the phrasings for each entry's tag.
    ///
    /// Entries with no phrasings are ignored so a tag can never end up empty.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = MessageEntry>) {
        for entry in entries {
            if entry.messages.is_empty() {
                tracing::warn!(tag = %entry.tag, "Ignoring message entry without phrasings");
                continue;
            }
            self.messages.insert(entry.tag, entry.messages);
        }
    }

    /// All phrasings registered for `tag`.
    pub fn messages(&self, tag: &str) -> &[String] {
        self.messages.get(tag).map(Vec::as_slice).unwrap_or_default()
    }

    /// A random phrasing for `tag`, or an empty string for an unknown tag.
    pub fn pick(&self, tag: &str) -> String {
        self.messages(tag)
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
