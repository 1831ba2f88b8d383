use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What the walker found: the rendered tree and the files that survived filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeListing {
    /// Tree diagram lines in pre-order, root line first.
    pub lines: Vec<String>,
    /// Retained file paths, in the same order as their tree lines.
    pub files: Vec<PathBuf>,
}

impl TreeListing {
    pub(crate) fn extend(&mut self, other: TreeListing) {
        self.lines.extend(other.lines);
        self.files.extend(other.files);
    }
}

/// Contents of a retained file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FileContent {
    /// The file decoded as UTF-8 text.
    Text(String),
    /// The file could not be read; holds the failure description.
    Unreadable(String),
}

/// A single retained file with its path and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// The path as produced by the walk (root joined with entry names).
    pub path: PathBuf,
    pub content: FileContent,
}

/// The complete result of a treescribe run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScribeResult {
    /// Tree diagram lines, root line first.
    pub tree: Vec<String>,
    /// Every retained file with its content, in tree order.
    pub files: Vec<FileEntry>,
}
