//! Safe accessors over the loosely-typed model response.
//!
//! The model's JSON has no fixed schema, so it stays a [`serde_json::Value`]
//! and is read through these helpers rather than deserialised into a struct.

use serde_json::Value;

/// Untyped tree returned by the external model.
pub type RawExtractionResult = Value;

/// Textual content of a scalar value.
///
/// Strings are trimmed and numbers rendered as JSON text. Empty strings and
/// non-scalar values yield `None`.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Text of `key` in an object, if present and non-empty.
pub fn text_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(scalar_text)
}

/// Text of the first key in `keys` that holds a non-empty value.
pub fn first_text_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| text_field(value, key))
}

/// Lower-cased string at `key`, for substring matching.
pub fn lowercase_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_lowercase)
}

/// Array at `key`, or an empty slice.
pub fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_trimmed() {
        assert_eq!(scalar_text(&json!("  Asha  ")), Some("Asha".into()));
    }

    #[test]
    fn blank_strings_absent() {
        assert_eq!(scalar_text(&json!("")), None);
        assert_eq!(scalar_text(&json!("   \n")), None);
    }

    #[test]
    fn numbers_rendered() {
        assert_eq!(scalar_text(&json!(123456789012u64)), Some("123456789012".into()));
    }

    #[test]
    fn non_scalars_absent() {
        assert_eq!(scalar_text(&json!(null)), None);
        assert_eq!(scalar_text(&json!(true)), None);
        assert_eq!(scalar_text(&json!(["a"])), None);
        assert_eq!(scalar_text(&json!({"a": "b"})), None);
    }

    #[test]
    fn first_text_field_skips_empty() {
        let v = json!({"a": "", "b": null, "c": " x ", "d": "y"});
        assert_eq!(first_text_field(&v, &["a", "b", "c", "d"]), Some("x".into()));
        assert_eq!(first_text_field(&v, &["missing"]), None);
    }

    #[test]
    fn array_field_tolerates_wrong_types() {
        let v = json!({"list": [1, 2], "obj": {"k": 1}});
        assert_eq!(array_field(&v, "list").len(), 2);
        assert!(array_field(&v, "obj").is_empty());
        assert!(array_field(&v, "missing").is_empty());
        assert!(array_field(&json!("scalar"), "list").is_empty());
    }
}
