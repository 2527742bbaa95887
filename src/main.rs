//! Binary entrypoint for the `hopshare` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match hopshare::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
