//! Binary entrypoint for the `depfix` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match depfix::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
