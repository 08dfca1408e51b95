//! Upcase CLI entrypoint.
//!
//! Keeps `main` small: parse args, install the stderr subscriber, hand off
//! to [`cli::run`], and map the result to an exit status.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use upcase::cli::{self, Args};

fn main() -> ExitCode {
    // Argument errors exit here, before any logging or filesystem access.
    let args = Args::parse();

    init_tracing();

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Install the process-wide subscriber: informational level to stderr,
/// overridable via `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
