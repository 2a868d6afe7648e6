//! Mutation guard — backup-then-overwrite and restore-then-delete.
//!
//! The guard is the only code path that rewrites the target file, and it
//! never does so without first duplicating the pre-fix content to a `.bak`
//! sibling. The two writes are sequential, not transactional: if the
//! second write fails the backup is already on disk and `restore` remains
//! possible. That limitation is reported, never masked.

use std::path::{Path, PathBuf};

use crate::ports::filesystem::FileSystem;

/// A proposed replacement for one file, constructed before any mutation.
///
/// Building a proposal has no side effects; [`commit`] performs the
/// backup-then-overwrite sequence only when the caller has confirmed it.
#[derive(Debug, Clone)]
pub struct FixProposal {
    /// The file to rewrite.
    pub path: PathBuf,
    /// Content of `path` as read before the external round trip.
    pub original: String,
    /// The full corrected file returned by the model.
    pub fixed: String,
}

/// Returns the backup path for `path`: the same path with `.bak` appended.
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".bak");
    PathBuf::from(os)
}

/// Commits a proposal: backs up the original content, then overwrites the
/// target. Returns the backup path on success.
///
/// # Errors
///
/// Returns an error if either write fails. A backup-write failure leaves
/// the filesystem untouched; a target-write failure leaves a valid backup
/// in place with the target unchanged.
pub fn commit(fs: &dyn FileSystem, proposal: &FixProposal) -> Result<PathBuf, String> {
    apply_fix(fs, &proposal.path, &proposal.original, &proposal.fixed)
}

/// Writes `original` to `path + ".bak"` (overwriting any older backup),
/// then writes `new_content` to `path`. Returns the backup path.
///
/// The caller must have read `original` from `path` before any external
/// round trip, so the duplicate reflects the pre-fix state.
///
/// # Errors
///
/// Returns an error if either write fails; see module docs for the
/// intermediate state after a target-write failure.
pub fn apply_fix(
    fs: &dyn FileSystem,
    path: &Path,
    original: &str,
    new_content: &str,
) -> Result<PathBuf, String> {
    let backup = backup_path(path);

    fs.write(&backup, original)
        .map_err(|e| format!("Failed to write backup {}: {e}", backup.display()))?;

    fs.write(path, new_content).map_err(|e| {
        format!(
            "Failed to write {}: {e} (original content is preserved in {})",
            path.display(),
            backup.display()
        )
    })?;

    Ok(backup)
}

/// Restores `path` from its backup, then deletes the backup.
///
/// # Errors
///
/// Returns an error if no backup exists (in which case nothing is
/// mutated), or if the read, write, or delete fails.
pub fn restore(fs: &dyn FileSystem, path: &Path) -> Result<(), String> {
    let backup = backup_path(path);

    if !fs.exists(&backup) {
        return Err(format!("No backup file found at {}", backup.display()));
    }

    let content = fs
        .read_to_string(&backup)
        .map_err(|e| format!("Failed to read backup {}: {e}", backup.display()))?;

    fs.write(path, &content).map_err(|e| format!("Failed to write {}: {e}", path.display()))?;

    fs.remove_file(&backup)
        .map_err(|e| format!("Failed to delete backup {}: {e}", backup.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::filesystem::LiveFileSystem;

    fn temp_target(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        std::fs::create_dir_all(&dir).unwrap();
        dir.join("a.swift")
    }

    fn cleanup(path: &Path) {
        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn backup_path_appends_literal_bak() {
        assert_eq!(backup_path(Path::new("/tmp/a.swift")), PathBuf::from("/tmp/a.swift.bak"));
        assert_eq!(backup_path(Path::new("/tmp/noext")), PathBuf::from("/tmp/noext.bak"));
    }

    #[test]
    fn apply_fix_writes_backup_and_target() {
        let path = temp_target("depfix_guard_apply");
        std::fs::write(&path, "old").unwrap();

        let backup = apply_fix(&LiveFileSystem, &path, "old", "new").unwrap();

        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "old");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        cleanup(&path);
    }

    #[test]
    fn apply_fix_is_idempotent_on_backup_content() {
        let path = temp_target("depfix_guard_idempotent");
        std::fs::write(&path, "old").unwrap();

        let backup = apply_fix(&LiveFileSystem, &path, "old", "new").unwrap();
        let backup2 = apply_fix(&LiveFileSystem, &path, "old", "newer").unwrap();

        assert_eq!(backup, backup2);
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "old");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "newer");
        cleanup(&path);
    }

    #[test]
    fn apply_fix_overwrites_prior_backup() {
        // Last backup wins; an unrestored older backup is discarded.
        let path = temp_target("depfix_guard_overwrite");
        std::fs::write(&path, "v1").unwrap();

        apply_fix(&LiveFileSystem, &path, "v1", "v2").unwrap();
        let backup = apply_fix(&LiveFileSystem, &path, "v2", "v3").unwrap();

        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "v2");
        cleanup(&path);
    }

    #[test]
    fn restore_round_trip() {
        let path = temp_target("depfix_guard_roundtrip");
        std::fs::write(&path, "original").unwrap();

        let backup = apply_fix(&LiveFileSystem, &path, "original", "replaced").unwrap();
        restore(&LiveFileSystem, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "original");
        assert!(!backup.exists());
        cleanup(&path);
    }

    #[test]
    fn restore_without_backup_reports_and_leaves_target_alone() {
        let path = temp_target("depfix_guard_nobak");
        std::fs::write(&path, "untouched").unwrap();

        let err = restore(&LiveFileSystem, &path).unwrap_err();

        assert!(err.contains("No backup file found"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "untouched");
        cleanup(&path);
    }

    #[test]
    fn second_restore_fails_and_writes_nothing() {
        let path = temp_target("depfix_guard_double_restore");
        std::fs::write(&path, "original").unwrap();

        apply_fix(&LiveFileSystem, &path, "original", "replaced").unwrap();
        restore(&LiveFileSystem, &path).unwrap();
        let err = restore(&LiveFileSystem, &path).unwrap_err();

        assert!(err.contains("No backup file found"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "original");
        cleanup(&path);
    }

    #[test]
    fn commit_runs_the_apply_sequence() {
        let path = temp_target("depfix_guard_commit");
        std::fs::write(&path, "old").unwrap();

        let proposal = FixProposal {
            path: path.clone(),
            original: "old".to_string(),
            fixed: "new".to_string(),
        };
        let backup = commit(&LiveFileSystem, &proposal).unwrap();

        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "old");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        cleanup(&path);
    }

    #[test]
    fn backup_write_failure_leaves_target_untouched() {
        // Target directory of the backup does not exist, so the backup
        // write fails before the target is ever rewritten.
        let path = Path::new("/nonexistent/depfix/a.swift");
        let err = apply_fix(&LiveFileSystem, path, "old", "new").unwrap_err();
        assert!(err.contains("Failed to write backup"));
    }
}
