use crate::error::ScribeError;
use crate::ignore_file::read_ignore_file;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScribeOptions {
    pub root: PathBuf,
    /// Empty means every entry is included.
    pub include_patterns: Vec<String>,
    /// Ignore-file patterns first, then any extra excludes.
    pub ignore_patterns: Vec<String>,
}
impl Default for ScribeOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            include_patterns: Vec::new(),
            ignore_patterns: Vec::new(),
        }
    }
}
#[derive(Debug, Default)]
pub struct ScribeBuilder {
    options: ScribeOptions,
}
impl ScribeBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ScribeOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn include_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.include_patterns = patterns;
        self
    }
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.options.include_patterns.push(pattern.into());
        self
    }
    /// Appends ignore patterns after any already configured.
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns.extend(patterns);
        self
    }
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.options.ignore_patterns.push(pattern.into());
        self
    }
    /// Loads patterns from an ignore file and puts them ahead of the ones
    /// already configured. A missing file contributes nothing.
    pub fn ignore_file(self, path: impl AsRef<Path>) -> Result<Self, ScribeError> {
        Ok(self.base_ignore_patterns(read_ignore_file(path)?))
    }
    /// Puts `patterns` ahead of the ignore patterns already configured.
    pub fn base_ignore_patterns(mut self, mut patterns: Vec<String>) -> Self {
        patterns.append(&mut self.options.ignore_patterns);
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn build(self) -> ScribeOptions {
        self.options
    }
}
