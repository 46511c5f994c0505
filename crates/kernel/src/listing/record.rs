//! Business-listing record type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One business-listing entry.
///
/// Known keys include `name`, `address`, `website`, `phone_number`,
/// `reviews_count`, `reviews_average`, `category`, `city`, and `state`;
/// other keys may appear and are carried through untouched. Fields may be
/// absent or non-string, and every consumer compares and renders them as
/// text. Records are read-only input: the query pipeline never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create a record from a field map.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw field value, if present.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Text form of a field for rendering and comparison.
    ///
    /// Returns `None` for missing and null fields so callers can pick their
    /// own placeholder.
    pub fn field_text(&self, key: &str) -> Option<String> {
        self.field(key).and_then(value_to_text)
    }
}

/// Convert a JSON value to its string representation for comparison.
/// Returns `None` for null values to prevent false matches.
pub fn value_to_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
