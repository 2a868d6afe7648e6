//! Core library entry for the `depfix` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod guard;
pub mod lookup;
pub mod ports;
pub mod present;
pub mod progress;
pub mod prompt;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// Loads `.env` (if present) before dispatching so that `OPENAI_API_KEY`
/// set there is visible to the commands that need it.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    dotenvy::dotenv().ok();
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // Help and version requests are not failures.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_when_no_action_given() {
        let result = run(["depfix"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_on_unknown_flag() {
        let result = run(["depfix", "--nonsense"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_executes_read_on_existing_file() {
        let dir = std::env::temp_dir().join("depfix_lib_run_read");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("input.swift");
        std::fs::write(&path, "struct ContentView {}").unwrap();

        let result = run(["depfix", "-r", path.to_str().unwrap()]);

        let _ = std::fs::remove_dir_all(&dir);
        assert!(result.is_ok());
    }
}
