//! Record and field-value types
//!
//! A record is the engine's view of one JSON object from the REST backend:
//! a mapping from field name to a tagged value. Only the text variant is
//! probed during matching; numbers, booleans, and nulls are skipped
//! rather than coerced.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A single field value in a record.
///
/// Deserializes untagged, so the JSON `{"title": "NCF", "file_size": 12,
/// "is_indexed": true, "indexed_at": null}` maps each value to the right
/// variant without any wrapper syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl FieldValue {
    /// The text content, if this value is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// A record in a filterable list
///
/// Represents a single entity (a manual, a module, a cluster, a teacher
/// contact) as named fields. Records deserialize directly from the JSON
/// objects the dashboards receive.
///
/// # Example
///
/// ```
/// use setu_filter::engine::record::Record;
///
/// let manual = Record::new()
///     .with("title", "NCF 2023 Hindi Manual")
///     .with("file_size", 120_000_i64);
/// assert_eq!(manual.text("title"), Some("NCF 2023 Hindi Manual"));
/// assert_eq!(manual.text("file_size"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    /// Field name -> value mapping
    #[serde(flatten)]
    fields: AHashMap<String, FieldValue>,
}

impl Record {
    /// Create a new empty record
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: AHashMap::new(),
        }
    }

    /// Builder: set a field and return the record
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Get a field value
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Get a field's text content; `None` for absent or non-text fields
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(FieldValue::as_text)
    }

    /// Check if a field exists (even as null)
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// All field names
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// Anything the engine can probe for text by field name.
///
/// Implemented by [`Record`]; domain types with typed fields can
/// implement it directly and skip the map representation.
pub trait Searchable {
    /// Text content of the named field, or `None` if the field is
    /// absent or not text.
    fn field_text(&self, field: &str) -> Option<&str>;
}

impl Searchable for Record {
    fn field_text(&self, field: &str) -> Option<&str> {
        self.text(field)
    }
}
