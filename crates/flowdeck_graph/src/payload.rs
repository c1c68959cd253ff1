// SPDX-License-Identifier: MIT OR Apache-2.0
//! Parsing of operator-supplied configuration text.

use serde_json::{Map, Value};

/// Parse free-text configuration into a JSON value.
///
/// Blank text yields an empty object. Malformed text is reported and falls
/// back to an empty object; it never blocks node creation.
pub fn parse_payload(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Object(Map::new());
    }
    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("configuration is not JSON ({err}): {text}");
            Value::Object(Map::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_object() {
        assert_eq!(parse_payload(r#"{"op":"add"}"#), serde_json::json!({"op": "add"}));
    }

    #[test]
    fn test_any_json_value_is_accepted() {
        assert_eq!(parse_payload("[1, 2]"), serde_json::json!([1, 2]));
        assert_eq!(parse_payload("3"), serde_json::json!(3));
    }

    #[test]
    fn test_malformed_text_falls_back_to_empty_object() {
        assert_eq!(parse_payload("not json"), serde_json::json!({}));
        assert_eq!(parse_payload("{broken"), serde_json::json!({}));
    }

    #[test]
    fn test_blank_text_is_empty_object() {
        assert_eq!(parse_payload(""), serde_json::json!({}));
        assert_eq!(parse_payload("   "), serde_json::json!({}));
    }
}
