#![deny(missing_docs)]

//! # Schema Nodes
//!
//! Classifies a raw Schema Object into the shapes the property renderer knows
//! how to document. Classification happens once per node so the renderer can
//! match exhaustively instead of probing keys.

use crate::tree::Lookup;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// The renderable shape of one property's schema.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode<'a> {
    /// Any `type` other than `array` or `object`, including an absent one.
    Scalar {
        /// Declared type text (`""` when absent).
        ty: Cow<'a, str>,
        /// Declared example (`""` when absent).
        example: Value,
    },
    /// `type: array`, described by its `items`.
    Array(Items<'a>),
    /// `type: object`, with its `properties` when declared.
    Object(Option<&'a Map<String, Value>>),
}

/// The renderable shape of an array's `items` schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Items<'a> {
    /// No `items` declared.
    Missing,
    /// Object items with declared `properties`.
    Object(&'a Map<String, Value>),
    /// String items restricted to a non-empty `enum`.
    Enum(&'a [Value]),
    /// Free-form string items.
    Strings {
        /// The `items.example` value (`""` when absent).
        example: Value,
    },
    /// Any other item shape (numbers, nested arrays, objects without properties).
    Unsupported,
}

impl<'a> SchemaNode<'a> {
    /// Classifies a property schema.
    pub fn classify(schema: &'a Value) -> Self {
        match schema.str_or("type", "") {
            "array" => Self::Array(Items::classify(schema.field("items"))),
            "object" => Self::Object(schema.mapping("properties")),
            _ => Self::Scalar {
                ty: schema.text("type"),
                example: example_of(schema),
            },
        }
    }
}

impl<'a> Items<'a> {
    /// Classifies an array's `items` schema.
    pub fn classify(items: Option<&'a Value>) -> Self {
        let Some(items) = items else {
            return Self::Missing;
        };

        match items.str_or("type", "") {
            "object" => items.mapping("properties").map_or(Self::Unsupported, Self::Object),
            "string" => match items.field("enum").and_then(Value::as_array) {
                Some(values) if !values.is_empty() => Self::Enum(values),
                _ => Self::Strings {
                    example: example_of(items),
                },
            },
            _ => Self::Unsupported,
        }
    }
}

fn example_of(schema: &Value) -> Value {
    schema
        .field("example")
        .cloned()
        .unwrap_or_else(|| Value::String(String::new()))
}
