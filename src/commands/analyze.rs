//! `depfix --analyze` command.
//!
//! Two-phase flow: the analysis and the proposed fix are obtained without
//! touching the target file; the mutation guard runs only after the user
//! explicitly accepts, so the interactive step is the sole gate between a
//! proposal and a disk write.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::LlmConfig;
use crate::context::ServiceContext;
use crate::guard::{self, FixProposal};
use crate::lookup::{self, MatchStrategy};
use crate::present::highlight_deprecated;
use crate::progress::Spinner;
use crate::prompt;

/// Execute the `--analyze` command against stdin/stdout.
///
/// # Errors
///
/// Returns an error string if the credential is missing, the file cannot
/// be read, a model request fails, or the accepted fix cannot be written.
pub fn run(path: &Path, strategy: MatchStrategy) -> Result<(), String> {
    let config = LlmConfig::from_env()?;
    let ctx = ServiceContext::live_with_llm(&config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    super::runtime()?.block_on(run_with_context(
        &ctx,
        &config,
        path,
        strategy,
        stdin.lock(),
        stdout.lock(),
    ))
}

/// Analyze with explicit context and I/O, for testing with port doubles
/// and canned user input.
///
/// # Errors
///
/// Returns an error string on file, model, or commit failure.
pub async fn run_with_context<R: BufRead, W: Write>(
    ctx: &ServiceContext,
    config: &LlmConfig,
    path: &Path,
    strategy: MatchStrategy,
    mut reader: R,
    mut writer: W,
) -> Result<(), String> {
    // The original content is read before any external round trip; the
    // backup written on accept duplicates exactly this.
    let original =
        ctx.fs.read_to_string(path).map_err(|e| format!("Error reading file: {e}"))?;

    writeln!(writer, "Analyzing contents of {}...", path.display())
        .map_err(|e| format!("write error: {e}"))?;

    let table = lookup::load(ctx.fs.as_ref());
    let relevant = lookup::filter(&original, &table, strategy);

    let request = prompt::analysis_request(config, &original, &relevant);
    let spinner = Spinner::new("Analyzing...");
    let response = ctx.llm.complete(&request).await;
    spinner.finish_clear();
    let analysis = response.map_err(|e| format!("Error analyzing file: {e}"))?.text;

    writeln!(writer, "\n{}\n", highlight_deprecated(&analysis))
        .map_err(|e| format!("write error: {e}"))?;

    write!(writer, "Do you want to accept the changes? (yes/no): ")
        .map_err(|e| format!("write error: {e}"))?;
    writer.flush().map_err(|e| format!("write error: {e}"))?;

    let mut answer = String::new();
    reader.read_line(&mut answer).map_err(|e| format!("read error: {e}"))?;

    if !answer.trim().eq_ignore_ascii_case("yes") {
        writeln!(writer, "Changes discarded.").map_err(|e| format!("write error: {e}"))?;
        return Ok(());
    }

    writeln!(writer, "\nApplying changes...").map_err(|e| format!("write error: {e}"))?;

    let proposal = propose_fix(ctx, config, path, &original, &analysis).await?;
    let backup = guard::commit(ctx.fs.as_ref(), &proposal)?;

    writeln!(writer, "Original file backed up to {}", backup.display())
        .map_err(|e| format!("write error: {e}"))?;
    writeln!(writer, "Changes applied successfully!")
        .map_err(|e| format!("write error: {e}"))?;
    Ok(())
}

/// Requests the complete corrected file and packages it as a proposal.
/// No mutation happens here; only [`guard::commit`] writes to disk.
///
/// # Errors
///
/// Returns an error string if the fix request fails.
pub async fn propose_fix(
    ctx: &ServiceContext,
    config: &LlmConfig,
    path: &Path,
    original: &str,
    analysis: &str,
) -> Result<FixProposal, String> {
    let request = prompt::fix_request(config, original, analysis);
    let spinner = Spinner::new("Requesting fixed file...");
    let response = ctx.llm.complete(&request).await;
    spinner.finish_clear();
    let fixed = response.map_err(|e| format!("Error fetching fixed code: {e}"))?.text;

    Ok(FixProposal { path: path.to_path_buf(), original: original.to_string(), fixed })
}
