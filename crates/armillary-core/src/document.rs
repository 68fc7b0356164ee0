//! Flat key/value documents and the deltas between them.
//!
//! A [`FlatDocument`] is a JSON object treated as a single level of keys.
//! Values are compared as a whole, never diffed recursively. A [`Delta`]
//! records what turns one flat document into another and has the wire shape
//!
//! ```json
//! {
//!     "additions": [{ "key": "c", "value": 4 }],
//!     "deletions": ["a"],
//!     "updates": [{ "key": "b", "from": 2, "to": 3 }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised when turning JSON into a [`FlatDocument`].
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

/// A flat JSON object whose key order follows its source text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatDocument {
    entries: Map<String, Value>,
}

impl FlatDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] for malformed JSON and
    /// [`DocumentError::NotAnObject`] if the top-level value is not an object.
    pub fn from_json_str(source: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(source)?;
        Self::try_from(value)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Sets `key` to `value`.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Removes `key`, keeping the relative order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Iterates over entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Iterates over keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the document has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Value> for FlatDocument {
    type Error = DocumentError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(DocumentError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }
}

impl From<FlatDocument> for Value {
    fn from(document: FlatDocument) -> Self {
        Value::Object(document.entries)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for FlatDocument {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A key present only in the target document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addition {
    pub key: String,
    pub value: Value,
}

/// A key present in both documents with different values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub key: String,
    pub from: Value,
    pub to: Value,
}

/// Additions, deletions and updates turning a base document into a target.
///
/// A delta produced by a diff lists every key in at most one sequence. Deltas
/// read back from disk are not checked for that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    #[serde(default)]
    pub additions: Vec<Addition>,
    #[serde(default)]
    pub deletions: Vec<String>,
    #[serde(default)]
    pub updates: Vec<Update>,
}

impl Delta {
    /// Returns `true` if applying this delta changes nothing.
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.deletions.is_empty() && self.updates.is_empty()
    }
}
