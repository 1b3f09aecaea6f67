#![deny(missing_docs)]

//! # Path Rendering
//!
//! Walks `paths` → method → Operation Object and emits one section per path
//! and one sub-section per operation.

use super::parameters::render_parameters;
use super::request_body::render_request_body;
use super::responses::render_responses;
use crate::tree::Lookup;
use serde_json::{Map, Value};
use tracing::debug;

/// Renders every path in document order.
///
/// Specification extensions (`x-*`) are skipped, as are path-item entries
/// that are not mappings (path-level `summary`, `parameters`, ...).
pub fn render_paths(paths: &Map<String, Value>) -> String {
    let mut out = String::new();

    for (path, item) in paths.iter().filter(|(key, _)| !is_extension(key)) {
        debug!(path = %path, "rendering path");
        out.push_str(&format!("## {}\n\n", path));

        let operations = item
            .as_object()
            .into_iter()
            .flatten()
            .filter(|(key, value)| !is_extension(key) && value.is_object());
        for (method, operation) in operations {
            out.push_str(&render_operation(method, operation));
        }
    }
    out
}

/// Renders one operation: heading, summary, description, then parameters,
/// request body and responses in that order.
pub fn render_operation(method: &str, operation: &Value) -> String {
    debug!(method = %method, "rendering operation");

    let mut out = format!("### {}\n\n", method.to_uppercase());
    out.push_str(&format!("**Summary:** {}\n\n", operation.text("summary")));
    out.push_str(&format!(
        "**Description:** {}\n\n",
        operation.text("description")
    ));

    out.push_str(&render_parameters(operation.sequence("parameters")));
    if let Some(request_body) = operation.mapping("requestBody") {
        out.push_str(&render_request_body(request_body));
    }
    if let Some(responses) = operation.mapping("responses") {
        out.push_str(&render_responses(responses));
    }
    out
}

fn is_extension(key: &str) -> bool {
    key.starts_with("x-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be a mapping"),
        }
    }

    #[test]
    fn test_bare_operation() {
        let operation = json!({ "summary": "Ping", "description": "Health check" });
        assert_eq!(
            render_operation("get", &operation),
            "### GET\n\n**Summary:** Ping\n\n**Description:** Health check\n\n"
        );

        assert_eq!(
            render_operation("delete", &json!({})),
            "### DELETE\n\n**Summary:** \n\n**Description:** \n\n"
        );
    }

    #[test]
    fn test_methods_keep_declared_order() {
        let input = paths(json!({
            "/pets": {
                "post": { "summary": "Create" },
                "get": { "summary": "List" }
            }
        }));

        let rendered = render_paths(&input);

        assert_eq!(rendered.matches("## /pets\n").count(), 1);
        let post = rendered.find("### POST").unwrap();
        let get = rendered.find("### GET").unwrap();
        assert!(rendered.find("## /pets").unwrap() < post);
        assert!(post < get);
    }

    #[test]
    fn test_sections_follow_fixed_order() {
        let operation = json!({
            "responses": { "200": { "description": "OK" } },
            "requestBody": { "content": {} },
            "parameters": [{ "name": "q", "in": "query" }]
        });

        let rendered = render_operation("put", &operation);

        let params = rendered.find("### Parameters").unwrap();
        let body = rendered.find("### Request Body").unwrap();
        let responses = rendered.find("### Responses").unwrap();
        assert!(params < body && body < responses);
    }

    #[test]
    fn test_extensions_and_path_level_fields_are_skipped() {
        let input = paths(json!({
            "x-internal": { "get": {} },
            "/users/{id}": {
                "summary": "User resource",
                "parameters": [{ "name": "id", "in": "path" }],
                "x-owner": { "team": "core" },
                "get": {}
            }
        }));

        let expected = "## /users/{id}\n\n\
            ### GET\n\n\
            **Summary:** \n\n\
            **Description:** \n\n";

        assert_eq!(render_paths(&input), expected);
    }
}
