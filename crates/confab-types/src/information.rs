//! Client-supplied user profile information.
//!
//! The gateway never interprets these fields: they are stored per session
//! token and echoed back on every reply so the client can render them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque user profile record (name, preferences, ...).
///
/// Serialized as a plain JSON object. The empty record doubles as the
/// "nothing stored" sentinel in the session store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Information(Map<String, Value>);

impl Information {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and fixtures.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Whether the record carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a single field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Borrow the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Information {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
