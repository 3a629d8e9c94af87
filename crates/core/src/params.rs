//! Tolerant helpers for reading settings out of a `serde_json::Value` object.
//!
//! A missing key or a value of the wrong type yields the default, so a partial
//! configuration object is always usable.

use serde_json::Value;

/// Extracts a `String` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}
