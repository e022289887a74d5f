//! Lenient field decoding for hand-edited datasets.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes any JSON value into a string field: strings are kept,
/// everything else (`null`, numbers, objects) becomes empty.
///
/// Use with `#[serde(default, deserialize_with = "string_or_empty")]`.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}
