//! Binary entrypoint for the `taskdeck` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match taskdeck::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
