//! Decoding of the data-source response.

use crate::domain::{AdminTableError, Record, Result};
use serde_json::Value;

/// Turns an HTTP response from the data source into records.
///
/// The body must be a JSON array of flat objects. Field order within each
/// object is kept as delivered.
///
/// # Errors
///
/// - [`AdminTableError::Fetch`] for a non-2xx `status`
/// - [`AdminTableError::Parse`] when the body is not JSON
/// - [`AdminTableError::Dataset`] when the JSON is not an array of objects
///
/// # Examples
///
/// ```
/// use admintable::source::parse_dataset;
///
/// let body = br#"[{"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"}]"#;
/// let records = parse_dataset(200, body)?;
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].field_names(), vec!["id", "name", "email", "role"]);
/// # Ok::<(), admintable::domain::AdminTableError>(())
/// ```
pub fn parse_dataset(status: u16, body: &[u8]) -> Result<Vec<Record>> {
    if !(200..300).contains(&status) {
        return Err(AdminTableError::Fetch { status });
    }

    let value: Value = serde_json::from_slice(body)?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(AdminTableError::Dataset(format!(
                "expected a JSON array, found {}",
                kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| match item {
            Value::Object(object) => Ok(Record::from_json_object(object)),
            other => Err(AdminTableError::Dataset(format!(
                "element {position} is {}, expected an object",
                kind(&other)
            ))),
        })
        .collect()
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_success_status_is_fetch_error() {
        let err = parse_dataset(404, b"[]").unwrap_err();
        assert!(matches!(err, AdminTableError::Fetch { status: 404 }));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = parse_dataset(200, b"<html>").unwrap_err();
        assert!(matches!(err, AdminTableError::Parse(_)));
    }

    #[test]
    fn top_level_object_is_rejected() {
        let err = parse_dataset(200, br#"{"id":"1"}"#).unwrap_err();
        assert!(matches!(err, AdminTableError::Dataset(_)));
    }

    #[test]
    fn scalar_element_is_rejected() {
        let err = parse_dataset(200, br#"[{"id":"1"}, 7]"#).unwrap_err();
        let AdminTableError::Dataset(message) = err else {
            panic!("expected dataset error");
        };
        assert!(message.contains("element 1"));
    }

    #[test]
    fn empty_array_is_an_empty_dataset() {
        assert!(parse_dataset(200, b"[]").unwrap().is_empty());
    }

    #[test]
    fn heterogeneous_records_are_accepted() {
        let records = parse_dataset(200, br#"[{"id":"1"},{"name":"x","age":3}]"#).unwrap();
        assert_eq!(records[1].cells(), vec!["x", "3"]);
    }
}
