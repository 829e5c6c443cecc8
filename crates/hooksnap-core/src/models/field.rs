//! Form field values with best-effort JSON decoding.

use serde::{Deserialize, Serialize};

/// A captured form field value.
///
/// Senders frequently stuff JSON documents into individual form fields. Values
/// that look like a JSON object or array are decoded so the snapshot shows
/// structure; everything else is kept as the literal text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Value kept exactly as received
    Text(String),
    /// Value that decoded as a JSON object or array
    Structured(serde_json::Value),
}

impl FieldValue {
    /// Attempt a structured parse, falling back to the raw string.
    ///
    /// Only values whose trimmed form starts and ends with a matching
    /// `{`/`}` or `[`/`]` pair are tried.
    pub fn decode(raw: &str) -> Self {
        let trimmed = raw.trim();
        if !looks_like_json_container(trimmed) {
            return FieldValue::Text(raw.to_string());
        }

        match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(value) => FieldValue::Structured(value),
            Err(_) => FieldValue::Text(raw.to_string()),
        }
    }

    /// Keep the value as text without attempting a decode.
    pub fn text(raw: impl Into<String>) -> Self {
        FieldValue::Text(raw.into())
    }
}

fn looks_like_json_container(value: &str) -> bool {
    (value.starts_with('{') && value.ends_with('}'))
        || (value.starts_with('[') && value.ends_with(']'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_value_is_decoded() {
        assert_eq!(
            FieldValue::decode(r#"{"a":1}"#),
            FieldValue::Structured(json!({"a": 1}))
        );
    }

    #[test]
    fn array_value_with_whitespace_is_decoded() {
        assert_eq!(
            FieldValue::decode("  [1, 2, 3]\n"),
            FieldValue::Structured(json!([1, 2, 3]))
        );
    }

    #[test]
    fn plain_text_is_kept() {
        assert_eq!(FieldValue::decode("not json"), FieldValue::text("not json"));
    }

    #[test]
    fn bare_scalars_are_not_decoded() {
        // Only containers are decoded; "42" and "true" stay text
        assert_eq!(FieldValue::decode("42"), FieldValue::text("42"));
        assert_eq!(FieldValue::decode("true"), FieldValue::text("true"));
        assert_eq!(FieldValue::decode(r#""quoted""#), FieldValue::text(r#""quoted""#));
    }

    #[test]
    fn broken_json_keeps_original_string() {
        let raw = " {not: valid} ";
        assert_eq!(FieldValue::decode(raw), FieldValue::text(raw));
    }

    #[test]
    fn mismatched_brackets_are_not_decoded() {
        assert_eq!(FieldValue::decode("{1, 2]"), FieldValue::text("{1, 2]"));
    }

    #[test]
    fn serializes_without_a_tag() {
        let text = serde_json::to_value(FieldValue::text("42")).unwrap();
        assert_eq!(text, json!("42"));

        let structured = serde_json::to_value(FieldValue::decode(r#"{"a":[1]}"#)).unwrap();
        assert_eq!(structured, json!({"a": [1]}));
    }

    #[test]
    fn deserializes_strings_as_text() {
        let value: FieldValue = serde_json::from_value(json!("{}")).unwrap();
        assert_eq!(value, FieldValue::text("{}"));

        let value: FieldValue = serde_json::from_value(json!({"k": "v"})).unwrap();
        assert_eq!(value, FieldValue::Structured(json!({"k": "v"})));
    }
}
