#![deny(missing_docs)]

//! # Response Rendering
//!
//! Documents a Responses Object: a sub-section per status code, and per
//! content type either the referenced schema name or an inline property table
//! with its example payload.

use super::properties::render_properties;
use super::{json_block, PROPERTY_TABLE_HEADER};
use crate::tree::{cell_text, Lookup};
use serde_json::{Map, Value};

/// Renders the responses section. An empty mapping renders nothing.
pub fn render_responses(responses: &Map<String, Value>) -> String {
    if responses.is_empty() {
        return String::new();
    }

    let mut out = String::from("### Responses\n\n");
    for (status, response) in responses {
        out.push_str(&format!("#### {}\n\n", status));
        out.push_str(&format!("{}\n\n", response.text("description")));

        for (content_type, content) in response.mapping("content").into_iter().flatten() {
            out.push_str(&format!("**Content Type:** {}\n\n", content_type));
            out.push_str(&render_content(content));
        }
    }
    out
}

/// Renders one Media Type Object. Each content type gets its own example.
fn render_content(content: &Value) -> String {
    let mut out = String::new();
    let schema = content.node("schema");

    // `$ref` is shown verbatim, never resolved.
    if let Some(reference) = schema.field("$ref") {
        out.push_str(&format!("Schema: {}\n\n", cell_text(reference)));
        return out;
    }

    if let Some(properties) = schema.mapping("properties") {
        out.push_str(PROPERTY_TABLE_HEADER);
        let (rows, example) = render_properties(properties);
        out.push_str(&rows);
        if !example.is_empty() {
            out.push_str(&json_block(example));
        }
    }
    out
}
