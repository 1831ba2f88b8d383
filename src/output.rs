//! Output formatting for treescribe results.
//!
//! The text report is the tree diagram followed by a `=` rule and then every
//! retained file: its path, its content and a `-` rule. JSON output serializes
//! the [`ScribeResult`] as-is.

use crate::{FileContent, ScribeError, ScribeResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default name of the report file.
pub const DEFAULT_OUTPUT_FILE: &str = "treescribe.output.txt";

const RULE_WIDTH: usize = 50;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// The tree diagram, one line per entry, without a trailing newline.
pub fn format_tree(result: &ScribeResult) -> String {
    result.tree.join("\n")
}

/// The file contents section of the text report.
pub fn format_contents(result: &ScribeResult) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("\n\n");
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");

    for file in &result.files {
        out.push_str(&format!("{}\n", file.path.display()));
        match &file.content {
            FileContent::Text(text) => {
                out.push_str(text);
                if !text.is_empty() && !text.ends_with('\n') { out.push('\n'); }
            }
            FileContent::Unreadable(reason) => {
                out.push_str(&format!("[Error reading file: {}]\n", reason));
            }
        }
        out.push('\n');
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push_str("\n\n");
    }
    out
}

/// Formats the result into a string.
pub fn format_result(result: &ScribeResult, format: OutputFormat) -> Result<String, ScribeError> {
    match format {
        OutputFormat::Text => Ok(format_text(result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

/// Writes the formatted result to a file.
pub fn write_result_to_file(
    result: &ScribeResult,
    format: OutputFormat,
    path: impl AsRef<Path>,
) -> Result<(), ScribeError> {
    let content = format_result(result, format)?;
    fs::write(&path, content).map_err(|e| ScribeError::io(path.as_ref(), e))?;
    Ok(())
}

fn format_text(result: &ScribeResult) -> String {
    let mut out = format_tree(result);
    out.push_str(&format_contents(result));
    out
}
