//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Rendering itself never fails: only reading the API description and
//! writing the generated document surface errors, and each variant names
//! its stage.

use derive_more::Display;
use std::path::PathBuf;

/// The Global Error Enum.
///
/// We use `derive_more` for the `Display` boilerplate.
#[derive(Debug, Display)]
pub enum AppError {
    /// The API description is missing, unreadable, not well-formed YAML/JSON,
    /// or its root is not a mapping. The message is prefixed with the path
    /// when one is known.
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// The generated document could not be written to `path`.
    #[display("Write Error: failed to write {}: {source}", path.display())]
    Write {
        /// Destination that failed (the document or one of its parent directories).
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },
}

/// Manual implementation of the standard Error trait.
///
/// `Write` exposes its IO error as the source; `Parse` carries only a message.
impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Write { source, .. } => Some(source),
            AppError::Parse(_) => None,
        }
    }
}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
