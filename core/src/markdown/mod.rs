#![deny(missing_docs)]

//! # Markdown Rendering
//!
//! - **properties**: Schema properties to table rows plus a synthesized example.
//! - **parameters**: Operation parameter tables.
//! - **request_body**: Request body tables and example payloads.
//! - **responses**: Per-status response sections.
//! - **paths**: Path and operation sections.
//! - **sections**: Servers, tags and security schemes.
//! - **document**: Assembles the full document in its fixed section order.

pub mod document;
pub mod parameters;
pub mod paths;
pub mod properties;
pub mod request_body;
pub mod responses;
pub mod sections;

pub use document::render_document;
pub use parameters::render_parameters;
pub use paths::{render_operation, render_paths};
pub use properties::render_properties;
pub use request_body::render_request_body;
pub use responses::render_responses;
pub use sections::{render_security_schemes, render_servers, render_tags};

use serde_json::{Map, Value};

/// Header shared by every property table (request bodies and responses).
pub(crate) const PROPERTY_TABLE_HEADER: &str =
    "| Name | Type | Description | Example |\n|------|------|-------------|---------|\n";

/// Formats one Markdown table row.
pub(crate) fn table_row(cells: &[&str]) -> String {
    format!("| {} |\n", cells.join(" | "))
}

/// Formats a synthesized example as a fenced, pretty-printed JSON block.
///
/// Key order is preserved and non-ASCII text is emitted unescaped.
pub(crate) fn json_block(example: Map<String, Value>) -> String {
    format!("```json\n{:#}\n```\n\n", Value::Object(example))
}
