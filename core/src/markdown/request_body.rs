#![deny(missing_docs)]

//! # Request Body Rendering
//!
//! Documents a Request Body Object: one property table across all content
//! types followed by an example payload.

use super::properties::render_properties;
use super::{json_block, PROPERTY_TABLE_HEADER};
use crate::tree::Lookup;
use serde_json::{Map, Value};
use tracing::trace;

/// Renders the request body section. An empty body renders nothing.
///
/// Rows from every content type with inline `schema.properties` share one
/// table. The example block shows the payload of the last such content type
/// only; earlier examples are replaced, not merged.
pub fn render_request_body(request_body: &Map<String, Value>) -> String {
    if request_body.is_empty() {
        return String::new();
    }

    let mut out = String::from("### Request Body\n\n");
    out.push_str(PROPERTY_TABLE_HEADER);

    let mut example = Map::new();
    for (content_type, content) in request_body.mapping("content").into_iter().flatten() {
        if let Some(properties) = content.node("schema").mapping("properties") {
            trace!(content_type = %content_type, "rendering request body properties");
            let (rows, content_example) = render_properties(properties);
            out.push_str(&rows);
            example = content_example;
        }
    }

    out.push('\n');
    if !example.is_empty() {
        out.push_str(&json_block(example));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be a mapping"),
        }
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(render_request_body(&Map::new()), "");
    }

    #[test]
    fn test_json_body_with_example() {
        let request_body = body(json!({
            "content": {
                "application/json": {
                    "schema": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string", "description": "Pet name", "example": "Rex" }
                        }
                    }
                }
            }
        }));

        let expected = "### Request Body\n\n\
            | Name | Type | Description | Example |\n\
            |------|------|-------------|---------|\n\
            | name | string | Pet name | Rex |\n\
            \n\
            ```json\n{\n  \"name\": \"Rex\"\n}\n```\n\n";

        assert_eq!(render_request_body(&request_body), expected);
    }

    #[test]
    fn test_last_content_type_wins_example() {
        let request_body = body(json!({
            "content": {
                "application/json": {
                    "schema": { "properties": { "a": { "type": "string", "example": "x" } } }
                },
                "application/xml": {
                    "schema": { "properties": { "b": { "type": "string", "example": "y" } } }
                },
                "text/plain": { "schema": { "type": "string" } }
            }
        }));

        let rendered = render_request_body(&request_body);

        assert!(rendered.contains("| a | string |  | x |\n| b | string |  | y |\n"));
        assert!(rendered.contains("```json\n{\n  \"b\": \"y\"\n}\n```"));
        assert!(!rendered.contains("\"a\": \"x\""));
    }

    #[test]
    fn test_ref_schema_keeps_empty_table() {
        let request_body = body(json!({
            "content": {
                "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } }
            }
        }));

        let expected = "### Request Body\n\n\
            | Name | Type | Description | Example |\n\
            |------|------|-------------|---------|\n\n";

        assert_eq!(render_request_body(&request_body), expected);
    }
}
