//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// Top-level CLI parser for `depfix`.
///
/// The four primary actions are mutually exclusive and exactly one is
/// required; clap enforces both via the `action` group.
#[derive(Debug, Parser)]
#[command(name = "depfix", version, about = "Find and fix deprecated API usage")]
#[command(group(ArgGroup::new("action").required(true).multiple(false)))]
pub struct Cli {
    /// Analyze a source file for deprecated API usage and offer to apply a fix.
    #[arg(short = 'a', long, value_name = "PATH", group = "action")]
    pub analyze: Option<PathBuf>,

    /// Summarize the contents of a file.
    #[arg(short = 's', long, value_name = "PATH", group = "action")]
    pub summarize: Option<PathBuf>,

    /// Read and display file contents verbatim.
    #[arg(short = 'r', long, value_name = "PATH", group = "action")]
    pub read: Option<PathBuf>,

    /// Restore a file from its `.bak` sibling and delete the backup.
    #[arg(long, visible_alias = "rst", value_name = "PATH", group = "action")]
    pub restore: Option<PathBuf>,

    /// Only match deprecated identifiers used as modifier calls (`.ident(`).
    // `requires` alone is defeated by clap's group semantics: membership of
    // `analyze` in the satisfied `action` group counts as fulfilling the
    // requirement, so the other actions must be excluded explicitly.
    #[arg(long, requires = "analyze", conflicts_with_all = ["summarize", "read", "restore"])]
    pub strict: bool,
}
