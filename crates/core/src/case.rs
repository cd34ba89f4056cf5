//! snake_case → camelCase key conversion for JSON values.
//!
//! Database rows serialize with their column names (`display_name`); the
//! public API speaks camelCase (`displayName`). [`to_camel_case`] rewrites
//! every object key in a JSON tree and leaves values untouched.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::{Map, Value};

/// An underscore followed by a lowercase ASCII letter.
const SNAKE_SEGMENT_PATTERN: &str = r"_([a-z])";

static SNAKE_SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SNAKE_SEGMENT_PATTERN).expect("valid regex"));

/// Convert a single snake_case key to camelCase.
///
/// Only `_` followed by a lowercase letter is folded, so `user_id` becomes
/// `userId` while `level_1` and `_private` keep their underscore.
pub fn snake_to_camel(key: &str) -> String {
    SNAKE_SEGMENT_RE
        .replace_all(key, |caps: &Captures| caps[1].to_ascii_uppercase())
        .into_owned()
}

/// Recursively convert all object keys in `value` to camelCase.
///
/// Objects and arrays are descended into; strings, numbers, booleans and
/// `null` are returned unchanged. The input is not modified.
pub fn to_camel_case(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (snake_to_camel(k), to_camel_case(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(to_camel_case).collect()),
        other => other.clone(),
    }
}
