//! `depfix --restore` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::guard;
use crate::progress;

/// Execute the `--restore` command: rewrite `path` from `path + ".bak"`,
/// then delete the backup.
///
/// Needs no credential and never reaches the network. A missing backup is
/// reported without mutating anything.
///
/// # Errors
///
/// Returns an error string if no backup exists or the restore sequence fails.
pub fn run(path: &Path) -> Result<(), String> {
    let ctx = ServiceContext::live();
    guard::restore(ctx.fs.as_ref(), path)?;

    progress::success(&format!(
        "Restored {} from {} (backup deleted)",
        path.display(),
        guard::backup_path(path).display()
    ));
    Ok(())
}
