// UI layer: resolves the two document paths and drives one upload.
// The functions are small and synchronous to make the flow easy to follow.

use crate::api::ApiClient;
use crate::report;
use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default documents for a manual run: the reference sits next to the tool,
/// target files land in `uploads/` under a UUID file name.
const DEFAULT_REFERENCE: &str = "SOLSTOR IBERIA.docx";
const DEFAULT_TARGET: &str = "uploads/54a9c42b-cc48-4612-8ff6-ee5cadff8563.docx";

/// Run one dual upload and print the style report.
///
/// A spinner is shown while the request is in flight and cleared before
/// anything is printed, so the report lands on a clean line.
pub fn run(api: &ApiClient) -> Result<()> {
    let reference = resolve_document(DEFAULT_REFERENCE, "Reference document path")?;
    let target = resolve_document(DEFAULT_TARGET, "Target document path")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Uploading documents...");

    let result = api.upload_dual(&reference, &target);
    spinner.finish_and_clear();

    let data = result?;
    print!("{}", report::render(&data));
    Ok(())
}

/// Use the default path when it exists, otherwise ask for a replacement.
/// The answer is handed on as-is; a file that still does not exist fails
/// inside the client with the path in the error.
fn resolve_document(default: &str, prompt: &str) -> Result<PathBuf> {
    let candidate = Path::new(default);
    if candidate.exists() {
        return Ok(candidate.to_path_buf());
    }
    println!("{} not found.", default);
    let path: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(default)
        .interact_text()?;
    Ok(PathBuf::from(path))
}
