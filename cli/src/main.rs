#![deny(missing_docs)]

//! # API Doc CLI
//!
//! Command Line Interface that renders an OpenAPI description as Markdown.
//!
//! Invoked without arguments it reads `openapi.yml` and writes
//! `api_documentation.md` in the working directory.

use std::process::ExitCode;

use clap::Parser;

mod logging;
mod render;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Render an OpenAPI description as Markdown documentation")]
struct Cli {
    #[clap(flatten)]
    render: render::RenderArgs,

    /// Increase log verbosity (-v debug, -vv trace).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match render::execute(&cli.render) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
