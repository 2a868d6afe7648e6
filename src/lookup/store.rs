//! Lookup store — loads the deprecation table from disk with a built-in
//! fallback.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ports::filesystem::FileSystem;

/// File name of the lookup resource, resolved next to the binary.
pub const RESOURCE_NAME: &str = "deprecations.json";

/// One known-deprecated identifier with its suggested replacement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeprecationRecord {
    /// The deprecated identifier, possibly in `func name(params)` or
    /// `name(params)` form.
    #[serde(default)]
    pub deprecated: String,
    /// The suggested replacement.
    #[serde(default)]
    pub replacement: String,
    /// Human-readable note about the deprecation.
    #[serde(default)]
    pub description: String,
}

/// Ordered sequence of deprecation records, immutable for one run.
pub type LookupTable = Vec<DeprecationRecord>;

/// Loads the lookup table from the resource next to the installed binary.
///
/// All failure is absorbed: a missing or unparsable resource yields the
/// built-in fallback table after a warning on stderr. Never errors.
#[must_use]
pub fn load(fs: &dyn FileSystem) -> LookupTable {
    match default_resource_path() {
        Some(path) => load_from(fs, &path),
        None => {
            eprintln!("Warning: could not locate {RESOURCE_NAME}; using built-in table");
            fallback_table()
        }
    }
}

/// Loads the lookup table from an explicit path, falling back to the
/// built-in table on any read or parse failure.
#[must_use]
pub fn load_from(fs: &dyn FileSystem, path: &Path) -> LookupTable {
    let contents = match fs.read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Warning: could not read {}: {e}; using built-in table", path.display());
            return fallback_table();
        }
    };

    match serde_json::from_str::<LookupTable>(&contents) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Warning: could not parse {}: {e}; using built-in table", path.display());
            fallback_table()
        }
    }
}

/// Resolves `deprecations.json` in the directory holding the binary.
fn default_resource_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(RESOURCE_NAME))
}

/// The two built-in records used when the resource is unavailable.
#[must_use]
pub fn fallback_table() -> LookupTable {
    vec![
        DeprecationRecord {
            deprecated: "foregroundColor(_:)".to_string(),
            replacement: "foregroundStyle(_:)".to_string(),
            description: "Use foregroundStyle(_:) to set the fill style of a view.".to_string(),
        },
        DeprecationRecord {
            deprecated: "edgesIgnoringSafeArea(_:)".to_string(),
            replacement: "ignoresSafeArea(_:edges:)".to_string(),
            description: "Use ignoresSafeArea(_:edges:) to expand past the safe area.".to_string(),
        },
    ]
}
