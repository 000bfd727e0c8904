//! Flattening nested JSON into dot-joined keys.

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

use crate::base::constants::KEY_SEPARATOR;

/// Flattened key → value mapping, in first-insertion order.
pub type Dictionary = IndexMap<String, String>;

/// Flatten a parsed dictionary file into `dictionary`.
///
/// Objects are descended into; every other value is a leaf stored under its
/// dot-joined path. Existing keys are overwritten in place. A top-level value
/// that is not an object contributes nothing.
pub fn flatten_into(value: &Value, dictionary: &mut Dictionary) {
    match value {
        Value::Object(map) => flatten_object(map, None, dictionary),
        other => tracing::debug!("Ignoring non-object dictionary root: {}", kind_of(other)),
    }
}

/// Flatten a single value into a fresh dictionary.
pub fn flatten(value: &Value) -> Dictionary {
    let mut dictionary = Dictionary::new();
    flatten_into(value, &mut dictionary);
    dictionary
}

fn flatten_object(map: &Map<String, Value>, prefix: Option<&str>, dictionary: &mut Dictionary) {
    for (key, value) in map {
        let path = match prefix {
            Some(prefix) => format!("{prefix}{KEY_SEPARATOR}{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(child) => flatten_object(child, Some(&path), dictionary),
            leaf => {
                if let Some(text) = stringify(leaf) {
                    dictionary.insert(path, text);
                }
            }
        }
    }
}

/// Render a leaf value as hint text.
///
/// Returns `None` for `null`, which is never stored. Arrays are joined with
/// `,` element by element; `null` elements render empty and objects inside
/// arrays render as `[object Object]`.
pub fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_to_string(n)),
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(join_array(items)),
        Value::Object(_) => Some("[object Object]".to_string()),
    }
}

fn join_array(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| stringify(item).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
}

fn number_to_string(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
