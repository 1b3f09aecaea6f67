#![deny(missing_docs)]

//! # API Doc Core
//!
//! Core library for rendering OpenAPI descriptions as Markdown documentation.
//!
//! The pipeline is load → render → write. Rendering is pure: every renderer
//! takes a sub-tree of the parsed description and returns its Markdown
//! fragment, substituting defaults for anything missing.

/// Shared error types.
pub mod error;

/// Loading the description and writing the document.
pub mod loader;

/// Markdown renderers.
pub mod markdown;

/// Schema node classification.
pub mod schema;

/// Defaulting accessors over the description tree.
pub mod tree;

pub use error::{AppError, AppResult};
pub use loader::{
    generate, load_document, parse_document, write_document, DEFAULT_INPUT, DEFAULT_OUTPUT,
};
pub use markdown::{
    render_document, render_operation, render_parameters, render_paths, render_properties,
    render_request_body, render_responses, render_security_schemes, render_servers, render_tags,
};
pub use schema::{Items, SchemaNode};
pub use tree::Lookup;
