//! Binary crate for the `weatherfeed` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup (stderr only, stdout carries the report)
//! - Printing the report and mapping failures to exit codes

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();
    logging::init(cmd.verbose);

    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = cli::exit_status(&err);
            tracing::debug!(code, "exiting after failure");
            eprintln!("Error: {err:?}");
            ExitCode::from(code)
        }
    }
}
