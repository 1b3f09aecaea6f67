#![deny(missing_docs)]

//! # Description Tree Access
//!
//! Typed get-with-default accessors over the parsed API description.
//!
//! The tree is a `serde_json::Value` built with `preserve_order`, so every
//! mapping iterates in document order. Lookups never fail: an absent key, an
//! explicit `null`, or a value of the wrong shape all yield the accessor's default.

use serde_json::{Map, Value};
use std::borrow::Cow;

/// Stand-in returned by [`Lookup::node`] for absent keys.
pub static MISSING: Value = Value::Null;

/// Defaulting accessors over a mapping node.
pub trait Lookup {
    /// Returns the value stored under `key`, treating `null` as absent.
    fn field(&self, key: &str) -> Option<&Value>;

    /// Returns the value under `key`, or a `null` node when absent.
    fn node(&self, key: &str) -> &Value {
        self.field(key).unwrap_or(&MISSING)
    }

    /// Returns the value under `key` as inline text, or `default` when absent.
    fn text_or<'a>(&'a self, key: &str, default: &'a str) -> Cow<'a, str> {
        self.field(key).map_or(Cow::Borrowed(default), cell_text)
    }

    /// Returns the value under `key` as inline text (`""` when absent).
    fn text(&self, key: &str) -> Cow<'_, str> {
        self.text_or(key, "")
    }

    /// Returns the string under `key`; anything else yields `default`.
    fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.field(key).and_then(Value::as_str).unwrap_or(default)
    }

    /// Returns the boolean under `key` (`false` when absent).
    fn flag(&self, key: &str) -> bool {
        self.field(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Returns the mapping under `key`, if it is one.
    fn mapping(&self, key: &str) -> Option<&Map<String, Value>> {
        self.field(key).and_then(Value::as_object)
    }

    /// Returns the sequence under `key` (empty when absent).
    fn sequence(&self, key: &str) -> &[Value] {
        self.field(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Lookup for Value {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| !v.is_null())
    }
}

impl Lookup for Map<String, Value> {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| !v.is_null())
    }
}

/// Formats a value for a table cell or an inline Markdown line.
///
/// Strings are verbatim, numbers and booleans use their JSON form, `null` is
/// empty, and nested structures fall back to compact JSON.
pub fn cell_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_defaults() {
        let node = json!({ "title": "Pets", "version": 2, "summary": null });
        assert_eq!(node.text("title"), "Pets");
        assert_eq!(node.text("version"), "2");
        assert_eq!(node.text("summary"), "");
        assert_eq!(node.text_or("missing", "fallback"), "fallback");
        assert_eq!(node.text_or("summary", "fallback"), "fallback");
    }

    #[test]
    fn test_wrong_shapes_use_defaults() {
        let node = json!({ "required": "yes", "items": "nope", "parameters": {} });
        assert!(!node.flag("required"));
        assert!(node.mapping("items").is_none());
        assert!(node.sequence("parameters").is_empty());
        assert_eq!(node.str_or("items", "x"), "nope");
        assert_eq!(node.str_or("parameters", "x"), "x");
    }

    #[test]
    fn test_lookup_on_non_mapping() {
        let scalar = json!("just text");
        assert!(scalar.field("type").is_none());
        assert_eq!(scalar.text("description"), "");
        assert!(scalar.node("schema").is_null());
    }

    #[test]
    fn test_cell_text_formats() {
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&json!(1.5)), "1.5");
        assert_eq!(cell_text(&json!(null)), "");
        assert_eq!(cell_text(&json!(["a", 1])), r#"["a",1]"#);
        assert_eq!(cell_text(&json!({"k": "v"})), r#"{"k":"v"}"#);
    }
}
