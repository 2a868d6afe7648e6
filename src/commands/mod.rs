//! Command dispatch and handlers.

pub mod analyze;
pub mod read;
pub mod restore;
pub mod summarize;

use crate::cli::Cli;
use crate::lookup::MatchStrategy;

/// Dispatch parsed arguments to the selected action handler.
///
/// Exactly one action is guaranteed present by the clap group.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let strategy =
        if cli.strict { MatchStrategy::ModifierCall } else { MatchStrategy::Substring };

    if let Some(path) = &cli.analyze {
        analyze::run(path, strategy)
    } else if let Some(path) = &cli.summarize {
        summarize::run(path)
    } else if let Some(path) = &cli.read {
        read::run(path)
    } else if let Some(path) = &cli.restore {
        restore::run(path)
    } else {
        Err("No action given. Use --analyze, --summarize, --read, or --restore.".to_string())
    }
}

/// Builds the single-threaded runtime used by the network commands.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, String> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))
}
