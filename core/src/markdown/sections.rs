#![deny(missing_docs)]

//! # Document Sections
//!
//! Flat list sections of the document: servers, tags and security schemes.

use crate::tree::Lookup;
use serde_json::{Map, Value};

/// Renders the `servers` list. An empty list renders nothing.
pub fn render_servers(servers: &[Value]) -> String {
    if servers.is_empty() {
        return String::new();
    }

    let mut out = String::from("## Servers\n\n");
    for server in servers {
        out.push_str(&format!("- **URL:** {}\n", server.text("url")));
        out.push_str(&format!("  **Description:** {}\n", server.text("description")));
    }
    out.push('\n');
    out
}

/// Renders the top-level `tags` list. An empty list renders nothing.
pub fn render_tags(tags: &[Value]) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let mut out = String::from("## Tags\n\n");
    for tag in tags {
        out.push_str(&format!(
            "- **{}**: {}\n",
            tag.text("name"),
            tag.text("description")
        ));
    }
    out.push('\n');
    out
}

/// Renders `components.securitySchemes`. An empty mapping renders nothing.
pub fn render_security_schemes(schemes: &Map<String, Value>) -> String {
    if schemes.is_empty() {
        return String::new();
    }

    let mut out = String::from("## Security Schemes\n\n");
    for (name, scheme) in schemes {
        out.push_str(&format!(
            "- **{}** ({}): {}\n",
            name,
            scheme.text("type"),
            scheme.text("description")
        ));
    }
    out.push('\n');
    out
}
