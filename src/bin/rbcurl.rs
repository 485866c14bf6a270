//! # rbcurl - replay RequestBin requests with curl
//!
//! Fetches a request captured by RequestBin and prints a `curl` command
//! that sends the same method, headers, body and query parameters.
//!
//! ## Usage
//!
//! ```bash
//! # Latest request in a bin
//! rbcurl http://requestb.in/1234asdf?inspect
//!
//! # A specific request, one argument per line
//! rbcurl http://requestb.in/1234asdf?inspect#13mgnv -p
//! ```
//!
//! Set `RUST_LOG=debug` to see the API calls on stderr.

use clap::Parser;
use rbcurl::{argument_error, error::RbError, exit_code_for, run, telemetry, Cli};
use std::process::ExitCode;

/// Application entry point
///
/// Usage and API errors are printed and end with exit code 1. Transport and
/// runtime failures are returned from `main` so they surface with their
/// full debug representation.
#[tokio::main]
async fn main() -> Result<ExitCode, RbError> {
    telemetry::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match argument_error(&e) {
            Some(err) => return exit_code_for(Err(err)).map(ExitCode::from),
            None => e.exit(),
        },
    };

    exit_code_for(run(cli).await).map(ExitCode::from)
}
