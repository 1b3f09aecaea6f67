#![deny(missing_docs)]

//! # Parameter Rendering
//!
//! Formats an operation's `parameters` list (path, query, header, cookie) as a table.

use super::table_row;
use crate::tree::Lookup;
use serde_json::Value;

const PARAMETER_TABLE_HEADER: &str =
    "| Name | In | Description | Required | Type |\n|------|----|-------------|----------|------|\n";

/// Renders the parameters section. An empty list renders nothing.
///
/// `Required` defaults to `false`; `Type` is read from `schema.type`.
pub fn render_parameters(parameters: &[Value]) -> String {
    if parameters.is_empty() {
        return String::new();
    }

    let mut out = String::from("### Parameters\n\n");
    out.push_str(PARAMETER_TABLE_HEADER);

    for param in parameters {
        let required = param.flag("required").to_string();
        out.push_str(&table_row(&[
            &param.text("name"),
            &param.text("in"),
            &param.text("description"),
            &required,
            &param.node("schema").text("type"),
        ]));
    }

    out.push('\n');
    out
}
