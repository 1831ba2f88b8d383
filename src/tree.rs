//! Internal module for formatting tree diagram lines.

use std::path::{Component, Path, PathBuf};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// Collapses `.` and `..` components without touching the filesystem.
///
/// `..` pops the previous normal component; at the filesystem root it is
/// dropped, and in a relative path with nothing left to pop it is kept.
pub(crate) fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

/// The first line of a tree: the root directory's own name with a trailing `/`.
///
/// `root` must already be normalized; only the filesystem root has no name.
pub(crate) fn root_line(root: &Path) -> String {
    let name = match root.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => root.display().to_string(),
    };
    format!("{}/", name.trim_end_matches(['/', '\\']))
}

/// A single entry line under `prefix`.
pub(crate) fn entry_line(prefix: &str, name: &str, is_last: bool, is_dir: bool) -> String {
    let connector = if is_last { LAST_BRANCH } else { BRANCH };
    let marker = if is_dir { "/" } else { "" };
    format!("{prefix}{connector}{name}{marker}")
}

/// The prefix handed down to the children of an entry.
pub(crate) fn child_prefix(prefix: &str, is_last: bool) -> String {
    let indent = if is_last { SPACE_INDENT } else { PIPE_INDENT };
    format!("{prefix}{indent}")
}
