//! The remote data source.
//!
//! The dataset is fetched once at startup with a single GET. The request is
//! tagged with a context entry so the plugin can tell its own response apart
//! from any other web result the host delivers.

pub mod dataset;

pub use dataset::parse_dataset;

use std::collections::BTreeMap;

/// Endpoint used when the plugin configuration names none.
pub const DEFAULT_ENDPOINT: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Context key attached to the dataset request.
pub const CONTEXT_KEY: &str = "source";
/// Context value identifying the dataset request.
pub const CONTEXT_VALUE: &str = "admintable-dataset";

/// Context map to send along with the dataset request.
#[must_use]
pub fn request_context() -> BTreeMap<String, String> {
    BTreeMap::from([(CONTEXT_KEY.to_string(), CONTEXT_VALUE.to_string())])
}

/// Whether a web result carrying `context` answers the dataset request.
#[must_use]
pub fn is_dataset_response(context: &BTreeMap<String, String>) -> bool {
    context.get(CONTEXT_KEY).map(String::as_str) == Some(CONTEXT_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_context_is_recognised() {
        assert!(is_dataset_response(&request_context()));
    }

    #[test]
    fn foreign_context_is_ignored() {
        let mut context = BTreeMap::new();
        assert!(!is_dataset_response(&context));

        context.insert(CONTEXT_KEY.to_string(), "something-else".to_string());
        assert!(!is_dataset_response(&context));
    }
}
