#![deny(missing_docs)]

//! # Document Loading & Writing
//!
//! The file-system boundary of the pipeline: reads and parses the API
//! description into an order-preserving tree, and writes the rendered document.
//!
//! YAML is parsed with `serde_yaml` (JSON documents are accepted as YAML) and
//! converted into a `serde_json::Value` whose mappings keep document order.

use crate::error::{AppError, AppResult};
use crate::markdown::render_document;
use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;
use std::fs;
use std::path::Path;
use tracing::info;

/// Conventional input location, relative to the working directory.
pub const DEFAULT_INPUT: &str = "openapi.yml";

/// Conventional output location, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "api_documentation.md";

/// Parses an API description from YAML (or JSON) text.
///
/// An empty document yields an empty mapping. A root that is not a mapping is
/// rejected.
pub fn parse_document(content: &str) -> AppResult<Value> {
    if content.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    let raw: YamlValue = serde_yaml::from_str(content)
        .map_err(|e| AppError::Parse(format!("Failed to parse API description: {}", e)))?;

    match into_tree(raw) {
        Value::Null => Ok(Value::Object(Map::new())),
        doc @ Value::Object(_) => Ok(doc),
        other => Err(AppError::Parse(format!(
            "API description root must be a mapping, found {}",
            kind_of(&other)
        ))),
    }
}

/// Reads and parses the API description at `path`.
pub fn load_document(path: &Path) -> AppResult<Value> {
    if !path.exists() {
        return Err(AppError::Parse(format!(
            "{}: API description not found",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        AppError::Parse(format!(
            "{}: failed to read API description: {}",
            path.display(),
            e
        ))
    })?;
    info!(path = %path.display(), bytes = content.len(), "loaded API description");

    parse_document(&content).map_err(|e| match e {
        AppError::Parse(msg) => AppError::Parse(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Writes the rendered document, creating missing parent directories.
pub fn write_document(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| AppError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = content.len(), "wrote documentation");
    Ok(())
}

/// Runs the whole pipeline: load `input`, render, write `output`.
///
/// Returns the rendered text. Nothing is written when loading fails.
pub fn generate(input: &Path, output: &Path) -> AppResult<String> {
    let document = load_document(input)?;
    let markdown = render_document(&document);
    write_document(output, &markdown)?;
    Ok(markdown)
}

/// Converts a YAML tree into the order-preserving JSON tree.
fn into_tree(value: YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => into_number(&n),
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Array(items.into_iter().map(into_tree).collect()),
        YamlValue::Mapping(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key_text(key), into_tree(value)))
                .collect(),
        ),
        YamlValue::Tagged(tagged) => into_tree(tagged.value),
    }
}

fn into_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::from(i)
    } else if let Some(u) = n.as_u64() {
        Value::from(u)
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

/// Mapping keys such as unquoted status codes (`200:`) become strings.
fn key_text(key: YamlValue) -> String {
    match key {
        YamlValue::String(s) => s,
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Null => "null".to_string(),
        other => into_tree(other).to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
