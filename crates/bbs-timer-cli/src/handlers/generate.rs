//! Generate command handler
//!
//! Validates the range, builds the timer and hands it to the export sink:
//! a `bbs_timer_<start>_to_<end>.json` file in the output directory, or
//! stdout.

use crate::config::{CliConfig, JsonStyle};
use crate::error::{CliError, CliResult};
use crate::output::Reporter;
use crate::GenerateArgs;
use bbs_timer::{build_timer, export_filename, TimeRange, TimerDocument};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Execute the generate command.
///
/// Returns the path written, or `None` when the JSON went to stdout.
pub fn execute_generate(
    config: &CliConfig,
    reporter: &Reporter,
    args: &GenerateArgs,
) -> CliResult<Option<PathBuf>> {
    let range = args.range.range();
    info!(start = %range.start, end = %range.end, "building timer");

    let document = build_timer(&range)?;
    if config.verbosity.is_verbose() {
        reporter.info(&format!("{} keyframes, {}", document.len(), range.direction()));
    }
    let json = render_document(&document, config.json_style)?;

    if args.stdout {
        println!("{json}");
        return Ok(None);
    }

    let path = write_document(&config.output_dir, &range, &json)?;
    reporter.success(&format!(
        "Wrote {} keyframes to {}",
        document.len(),
        path.display()
    ));
    Ok(Some(path))
}

/// Serialize a document in the configured layout
pub fn render_document(document: &TimerDocument, style: JsonStyle) -> CliResult<String> {
    let json = match style {
        JsonStyle::Pretty => document.to_json_pretty()?,
        JsonStyle::Compact => document.to_json()?,
    };
    Ok(json)
}

/// Write rendered JSON under its export name, creating `dir` if needed
///
/// # Errors
///
/// Returns [`CliError::InvalidArgument`] when `dir` exists but is not a
/// directory.
pub fn write_document(dir: &Path, range: &TimeRange, json: &str) -> CliResult<PathBuf> {
    if dir.exists() && !dir.is_dir() {
        return Err(CliError::invalid_argument(format!(
            "output path {} is not a directory",
            dir.display()
        )));
    }
    fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(range));
    fs::write(&path, json)?;
    debug!(path = %path.display(), bytes = json.len(), "timer written");
    Ok(path)
}
