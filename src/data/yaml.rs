//! YAML loading and emitting.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_yaml::value::Tag;
use serde_yaml::Value;
use thiserror::Error;

/// Raised when text cannot be deserialized as YAML.
#[derive(Error, Debug)]
#[error("Unable to parse YAML: {source}. Content: {}", json_quote(.content))]
pub struct YamlError {
    /// The text that failed to parse, verbatim.
    pub content: String,
    /// The deserializer's diagnostic.
    pub source: serde_yaml::Error,
}

/// Parses YAML text into an untyped value.
///
/// Failures carry the offending text so malformed bot output can be
/// inspected from the error message alone.
///
/// Custom tags such as `!foo` are rejected; only the core schema is accepted.
pub fn parse_yaml(text: &str) -> Result<Value, YamlError> {
    let fail = |source| YamlError {
        content: text.to_string(),
        source,
    };

    let value: Value = serde_yaml::from_str(text).map_err(fail)?;
    match find_tag(&value) {
        Some(tag) => Err(fail(serde::de::Error::custom(format!("unknown tag {tag}")))),
        None => Ok(value),
    }
}

/// Returns the first custom tag found, depth first.
fn find_tag(value: &Value) -> Option<&Tag> {
    match value {
        Value::Tagged(tagged) => Some(&tagged.tag),
        Value::Sequence(items) => items.iter().find_map(find_tag),
        Value::Mapping(mapping) => mapping
            .iter()
            .find_map(|(key, value)| find_tag(key).or_else(|| find_tag(value))),
        _ => None,
    }
}

/// Serializes a data structure to a YAML string.
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String> {
    serde_yaml::to_string(data).context("Failed to serialize to YAML")
}

/// Quotes a string the way a JSON encoder would.
pub(crate) fn json_quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("{s:?}"))
}
