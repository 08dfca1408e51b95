//! # CLI Module
//!
//! Argument parsing and the message-writing pipeline: announce, write the
//! message line to the output file, report where it landed.

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::info;

/// Command-line arguments for the message-writer binary.
#[derive(Parser, Debug)]
#[command(
    name = "message-writer",
    version,
    about = "Write a greeting message to a file"
)]
pub struct Args {
    /// Message to record.
    pub message: String,

    /// File the message is written to (created or overwritten).
    pub output: PathBuf,
}

/// Errors surfaced by the message-writing pipeline.
#[derive(Debug, Error)]
pub enum CliError {
    /// The output path cannot be created or written.
    #[error("cannot write output file `{}`: {source}", .path.display())]
    OutputAccess { path: PathBuf, source: io::Error },
}

/// Run the message-writing pipeline.
///
/// The greeting line is emitted before the file is opened; the completion
/// line follows the write.
pub fn run(args: &Args) -> Result<(), CliError> {
    info!("Hello World. We will write this message: {}", args.message);

    let body = format!("Hello, the message was: {}\n", args.message);
    fs::write(&args.output, body).map_err(|source| CliError::OutputAccess {
        path: args.output.clone(),
        source,
    })?;

    info!("Done! try looking into {}", args.output.display());

    Ok(())
}
