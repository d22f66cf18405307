//! Record model for the admin table.
//!
//! A [`Record`] is one row of the dataset: an ordered list of field name and
//! scalar value pairs. Field order is the order the data source delivered the
//! keys in, which is also the column order of the rendered table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single scalar cell value.
///
/// Values keep their source type so that numbers render exactly as the data
/// source wrote them. Edited values are always stored as [`FieldValue::Text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    Null,
}

impl FieldValue {
    /// Converts a JSON value into a cell value.
    ///
    /// Nested arrays and objects are not expected in a flat dataset. They are
    /// kept as their compact JSON text rather than rejected.
    #[must_use]
    pub fn from_json(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(s) => Self::Text(s),
            Value::Number(n) => Self::Number(n),
            Value::Bool(b) => Self::Bool(b),
            Value::Null => Self::Null,
            nested @ (Value::Array(_) | Value::Object(_)) => Self::Text(nested.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// One row of the dataset.
///
/// # Examples
///
/// ```
/// use admintable::domain::Record;
///
/// let record = Record::from_pairs([("id", "1"), ("name", "Aaron Miles")]);
/// assert_eq!(record.field_names(), vec!["id", "name"]);
/// assert_eq!(record.get("name").map(ToString::to_string).as_deref(), Some("Aaron Miles"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Builds a record from name/value pairs, keeping their order.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Builds a record from a JSON object, preserving key order.
    #[must_use]
    pub fn from_json_object(object: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            fields: object
                .into_iter()
                .map(|(k, v)| (k, FieldValue::from_json(v)))
                .collect(),
        }
    }

    /// Field names in column order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Replaces the value of `field`, appending the field if the record lacks it.
    pub fn set(&mut self, field: &str, value: FieldValue) {
        if let Some(slot) = self.fields.iter_mut().find(|(name, _)| name == field) {
            slot.1 = value;
        } else {
            self.fields.push((field.to_string(), value));
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.iter().map(|(_, value)| value)
    }

    /// String representation of every value, in column order.
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        self.values().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_object_keeps_source_key_order() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"name":"Aishwarya","id":"2","role":"member"}"#).unwrap();
        let serde_json::Value::Object(object) = value else {
            panic!("expected object");
        };

        let record = Record::from_json_object(object);

        assert_eq!(record.field_names(), vec!["name", "id", "role"]);
    }

    #[test]
    fn numbers_render_as_written() {
        let value: serde_json::Value = serde_json::from_str(r#"{"age": 42, "score": 1.5}"#).unwrap();
        let serde_json::Value::Object(object) = value else {
            panic!("expected object");
        };

        let record = Record::from_json_object(object);

        assert_eq!(record.cells(), vec!["42", "1.5"]);
    }

    #[test]
    fn nested_values_become_text() {
        let value = FieldValue::from_json(serde_json::json!({"a": [1, 2]}));
        assert_eq!(value, FieldValue::Text(r#"{"a":[1,2]}"#.to_string()));
    }

    #[test]
    fn null_renders_empty() {
        assert_eq!(FieldValue::Null.to_string(), "");
    }

    #[test]
    fn set_replaces_existing_field_in_place() {
        let mut record = Record::from_pairs([("id", "1"), ("name", "old")]);

        record.set("name", FieldValue::from("new"));

        assert_eq!(record.field_names(), vec!["id", "name"]);
        assert_eq!(record.get("name"), Some(&FieldValue::from("new")));
    }

    #[test]
    fn set_appends_missing_field() {
        let mut record = Record::from_pairs([("id", "1")]);

        record.set("email", FieldValue::from("a@b.c"));

        assert_eq!(record.field_names(), vec!["id", "email"]);
    }
}
