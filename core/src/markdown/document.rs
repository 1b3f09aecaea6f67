#![deny(missing_docs)]

//! # Document Assembly
//!
//! Produces the final Markdown text from a parsed API description.
//!
//! Section order is fixed: title/version/description, servers, paths, tags,
//! security schemes.

use super::paths::render_paths;
use super::sections::{render_security_schemes, render_servers, render_tags};
use crate::tree::Lookup;
use serde_json::Value;

/// Title used when `info.title` is absent.
pub const DEFAULT_TITLE: &str = "API Documentation";

/// Version used when `info.version` is absent.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Renders the whole document.
pub fn render_document(document: &Value) -> String {
    let info = document.node("info");

    let mut out = format!("# {}\n\n", info.text_or("title", DEFAULT_TITLE));
    out.push_str(&format!(
        "**Version:** {}\n\n",
        info.text_or("version", DEFAULT_VERSION)
    ));
    out.push_str(&format!("**Description:** {}\n\n", info.text("description")));

    out.push_str(&render_servers(document.sequence("servers")));
    if let Some(paths) = document.mapping("paths") {
        out.push_str(&render_paths(paths));
    }
    out.push_str(&render_tags(document.sequence("tags")));
    if let Some(schemes) = document.node("components").mapping("securitySchemes") {
        out.push_str(&render_security_schemes(schemes));
    }
    out
}
