#![deny(missing_docs)]

//! # Render Command
//!
//! Loads the API description, renders it and writes the Markdown document.

use std::path::PathBuf;

use apidoc_core::{generate, AppResult, DEFAULT_INPUT, DEFAULT_OUTPUT};
use tracing::debug;

/// Arguments for rendering.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Path to the OpenAPI description (YAML or JSON).
    #[clap(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output path for the Markdown document.
    #[clap(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

/// Executes the rendering and prints a confirmation line.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &RenderArgs) -> AppResult<()> {
    debug!(input = %args.input.display(), output = %args.output.display(), "rendering");
    generate(&args.input, &args.output)?;

    println!(
        "Markdown documentation has been generated and saved to '{}'.",
        args.output.display()
    );

    Ok(())
}
