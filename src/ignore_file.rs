//! Loading of the static `.trscrignore` pattern file.

use crate::error::ScribeError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name looked up beside the executable when no ignore file is given.
pub const IGNORE_FILE_NAME: &str = ".trscrignore";

/// Built-in patterns, used when no ignore file sits beside the executable.
pub const BUILTIN_IGNORE_FILE: &str = include_str!("../.trscrignore");

/// Parses ignore-file text into patterns.
///
/// Blank lines and lines starting with `#` (after leading whitespace) are
/// skipped. Anything after the first `#` on a line is an inline comment.
pub fn parse_ignore_patterns(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let pattern = line.split('#').next().unwrap_or_default().trim();
            (!pattern.is_empty()).then(|| pattern.to_string())
        })
        .collect()
}

/// Reads and parses an ignore file. A file that does not exist yields no
/// patterns; any other read failure is an error.
pub fn read_ignore_file(path: impl AsRef<Path>) -> Result<Vec<String>, ScribeError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => Ok(parse_ignore_patterns(&text)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            #[cfg(feature = "logging")]
            tracing::debug!("No ignore file at {}", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(ScribeError::io(path, e)),
    }
}

/// Location of the ignore file installed next to the running executable.
pub fn default_ignore_file() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(IGNORE_FILE_NAME))
}

/// Patterns used when no ignore file is given explicitly: the file beside the
/// executable if there is one, otherwise [`BUILTIN_IGNORE_FILE`].
pub fn default_ignore_patterns() -> Result<Vec<String>, ScribeError> {
    match default_ignore_file().filter(|path| path.is_file()) {
        Some(path) => read_ignore_file(path),
        None => {
            #[cfg(feature = "logging")]
            tracing::debug!("Using built-in ignore patterns");
            Ok(parse_ignore_patterns(BUILTIN_IGNORE_FILE))
        }
    }
}
