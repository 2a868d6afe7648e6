//! `depfix --summarize` command.

use std::path::Path;

use crate::config::LlmConfig;
use crate::context::ServiceContext;
use crate::progress::Spinner;
use crate::prompt;

/// Execute the `--summarize` command: send file contents to the model and
/// print a short summary.
///
/// # Errors
///
/// Returns an error string if the credential is missing, the file cannot
/// be read, or the model request fails.
pub fn run(path: &Path) -> Result<(), String> {
    let config = LlmConfig::from_env()?;
    let ctx = ServiceContext::live_with_llm(&config);
    super::runtime()?.block_on(run_with_context(&ctx, &config, path))
}

/// Summarize with an explicit context, for testing with port doubles.
///
/// # Errors
///
/// Returns an error string if the file read or the model request fails.
pub async fn run_with_context(
    ctx: &ServiceContext,
    config: &LlmConfig,
    path: &Path,
) -> Result<(), String> {
    let contents =
        ctx.fs.read_to_string(path).map_err(|e| format!("Error reading file: {e}"))?;

    println!("Summarizing contents of {}...", path.display());

    let request = prompt::summary_request(config, &contents);
    let spinner = Spinner::new("Waiting for model...");
    let response = ctx.llm.complete(&request).await;
    spinner.finish_clear();

    let response = response.map_err(|e| format!("Error summarizing file: {e}"))?;
    println!("Summary: {}", response.text);
    Ok(())
}
