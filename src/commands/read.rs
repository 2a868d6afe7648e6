//! `depfix --read` command.

use std::path::Path;

use crate::context::ServiceContext;

/// Execute the `--read` command: print file contents verbatim.
///
/// Needs no credential and never reaches the network.
///
/// # Errors
///
/// Returns an error string if the file cannot be read.
pub fn run(path: &Path) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let contents =
        ctx.fs.read_to_string(path).map_err(|e| format!("Error reading file: {e}"))?;

    println!("Contents of {}:\n", path.display());
    println!("{contents}");
    Ok(())
}
