//! Classification of dynamic JSON values.
//!
//! The one place this crate genuinely needs to ask "what is this value" is
//! at the JSON boundary; `ValueKind` is the closed answer to that question.

use serde_json::Map;
use serde_json::Value;

/// The kind of a JSON value, with numbers split by integerness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `null`
    Null,
    /// `true` / `false`
    Bool,
    /// A number without a fractional part.
    Integer,
    /// A number with a fractional part.
    Float,
    /// A string.
    String,
    /// An array.
    Array,
    /// An object.
    Object,
}

/// Classifies a JSON value.
pub fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(n) if n.is_i64() || n.is_u64() => ValueKind::Integer,
        Value::Number(_) => ValueKind::Float,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

/// Returns a copy of `map` with every top-level key lowercased.
///
/// Nested objects are left untouched. When lowercasing collides, the later
/// entry in iteration order wins.
pub fn lowercase_keys(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (key.to_lowercase(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn kinds_cover_every_variant() {
        assert_eq!(kind_of(&json!(null)), ValueKind::Null);
        assert_eq!(kind_of(&json!(true)), ValueKind::Bool);
        assert_eq!(kind_of(&json!(1)), ValueKind::Integer);
        assert_eq!(kind_of(&json!(1.1234)), ValueKind::Float);
        assert_eq!(kind_of(&json!("abcd")), ValueKind::String);
        assert_eq!(kind_of(&json!([1, 2, 3])), ValueKind::Array);
        assert_eq!(kind_of(&json!({"str": "abcd"})), ValueKind::Object);
    }

    #[test]
    fn keys_lowercase_at_the_top_level_only() {
        let value = json!({"Content-Type": "text/html", "X-Id": {"Inner": 1}});
        let map = value.as_object().unwrap();
        let lowered = lowercase_keys(map);

        assert!(lowered.contains_key("content-type"));
        assert!(lowered.contains_key("x-id"));
        assert!(lowered["x-id"].as_object().unwrap().contains_key("Inner"));
    }
}
