#![deny(missing_docs)]

//! # Property Rendering
//!
//! Walks a Schema Object's `properties` and produces, in a single pass, the
//! property table rows and an example payload mirroring the schema's shape.
//!
//! Nested objects (directly or as array items) contribute their rows to the
//! same flat table; only the example keeps the nesting.

use super::table_row;
use crate::schema::{Items, SchemaNode};
use crate::tree::{cell_text, Lookup};
use serde_json::{Map, Value};

/// Renders property rows and the matching synthesized example.
///
/// Row order and example key order both follow the mapping's insertion order.
/// Arrays whose items are neither objects with properties nor strings produce
/// neither a row nor an example entry.
///
/// Self-referential schemas are not detected; `$ref` is never followed here.
pub fn render_properties(properties: &Map<String, Value>) -> (String, Map<String, Value>) {
    let mut rows = String::new();
    let mut example = Map::new();

    for (name, details) in properties {
        let description = details.text("description");

        match SchemaNode::classify(details) {
            SchemaNode::Scalar { ty, example: value } => {
                rows.push_str(&table_row(&[name, &ty, &description, &cell_text(&value)]));
                example.insert(name.clone(), value);
            }
            SchemaNode::Array(Items::Object(inner)) => {
                let (nested_rows, nested_example) = render_properties(inner);
                rows.push_str(&nested_rows);
                example.insert(
                    name.clone(),
                    Value::Array(vec![Value::Object(nested_example)]),
                );
            }
            SchemaNode::Array(Items::Enum(values)) => {
                let joined = values.iter().map(cell_text).collect::<Vec<_>>().join(", ");
                rows.push_str(&table_row(&[name, "array", &description, &joined]));
                example.insert(name.clone(), Value::Array(values.to_vec()));
            }
            SchemaNode::Array(Items::Strings { example: value }) => {
                rows.push_str(&table_row(&[name, "array", &description, &cell_text(&value)]));
                example.insert(name.clone(), Value::Array(vec![value]));
            }
            SchemaNode::Object(Some(inner)) => {
                let (nested_rows, nested_example) = render_properties(inner);
                rows.push_str(&nested_rows);
                example.insert(name.clone(), Value::Object(nested_example));
            }
            SchemaNode::Array(Items::Missing | Items::Unsupported) | SchemaNode::Object(None) => {}
        }
    }

    (rows, example)
}
