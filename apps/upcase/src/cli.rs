//! # CLI Module
//!
//! Argument parsing and the uppercase pipeline: announce, read the whole
//! input, transform, write the whole output.
//!
//! The announcement lines are emitted before any file is touched, so they
//! appear even when the subsequent read fails.

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::info;

/// Command-line arguments for the upcase binary.
///
/// Exactly two positional arguments; clap rejects anything else before any
/// logging or I/O happens.
#[derive(Parser, Debug)]
#[command(name = "upcase", version, about = "Uppercase the contents of a file")]
pub struct Args {
    /// File whose contents are read.
    pub input: PathBuf,

    /// File the uppercased contents are written to (created or overwritten).
    pub output: PathBuf,
}

/// Errors surfaced by the uppercase pipeline.
///
/// Both variants carry the offending path and the underlying I/O error.
/// Nothing is caught or retried; errors propagate to `main`.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input path is missing, unreadable, a directory, or not UTF-8.
    #[error("cannot read input file `{}`: {source}", .path.display())]
    InputAccess { path: PathBuf, source: io::Error },

    /// The output path cannot be created or written.
    #[error("cannot write output file `{}`: {source}", .path.display())]
    OutputAccess { path: PathBuf, source: io::Error },
}

/// Run the uppercase pipeline.
///
/// The input is read fully into memory before the output is opened, so
/// `input == output` degrades to read-then-overwrite. The output is
/// created (or truncated) and written in one operation; the file handles
/// are scoped inside the `fs` helpers and released on every exit path.
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        "Hello There, we will take the contents of {}",
        args.input.display()
    );
    info!("and make them all UPPER CASE!!");
    info!("Find the result in {}", args.output.display());

    let contents = fs::read_to_string(&args.input).map_err(|source| CliError::InputAccess {
        path: args.input.clone(),
        source,
    })?;

    let transformed = upcase_core::uppercase(&contents);

    fs::write(&args.output, transformed).map_err(|source| CliError::OutputAccess {
        path: args.output.clone(),
        source,
    })?;

    Ok(())
}
