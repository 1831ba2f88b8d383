use crate::error::ScribeError;
use crate::matcher::PatternSet;
use crate::options::ScribeOptions;
use crate::tree::{child_prefix, entry_line, normalize_lexically, root_line};
use crate::types::{FileContent, FileEntry, ScribeResult, TreeListing};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Include filter split by pattern kind.
///
/// Files must match a general pattern. Directories pass unconditionally while
/// any general pattern exists, so traversal can reach matching files at any
/// depth; otherwise they must match a directory pattern.
struct IncludeFilter {
    general: PatternSet,
    directories: PatternSet,
}
impl IncludeFilter {
    fn new(patterns: PatternSet) -> Option<Self> {
        if patterns.is_empty() {
            return None;
        }
        let (general, directories) = patterns.split_directory_patterns();
        Some(Self {
            general,
            directories,
        })
    }
    fn admits(&self, path: &Path, is_dir: bool) -> bool {
        if is_dir {
            !self.general.is_empty() || self.directories.matches(path, true)
        } else {
            self.general.matches(path, false)
        }
    }
}
struct Entry {
    name: OsString,
    path: PathBuf,
    is_dir: bool,
}
struct Walker {
    include: Option<IncludeFilter>,
    ignore: PatternSet,
}
impl Walker {
    fn new(options: &ScribeOptions) -> Result<Self, ScribeError> {
        Ok(Self {
            include: IncludeFilter::new(PatternSet::new(&options.include_patterns)?),
            ignore: PatternSet::new(&options.ignore_patterns)?,
        })
    }
    fn walk(&self, root: &Path) -> TreeListing {
        let mut listing = TreeListing {
            lines: vec![root_line(root)],
            files: Vec::new(),
        };
        listing.extend(self.walk_dir(root, ""));
        listing
    }
    fn walk_dir(&self, dir: &Path, prefix: &str) -> TreeListing {
        let mut listing = TreeListing::default();
        let entries = self.list_entries(dir);
        let count = entries.len();
        for (index, entry) in entries.into_iter().enumerate() {
            let is_last = index + 1 == count;
            let name = entry.name.to_string_lossy();
            listing
                .lines
                .push(entry_line(prefix, &name, is_last, entry.is_dir));
            if entry.is_dir {
                listing.extend(self.walk_dir(&entry.path, &child_prefix(prefix, is_last)));
            } else {
                listing.files.push(entry.path);
            }
        }
        listing
    }
    /// Lists, filters and sorts the immediate entries of `dir`.
    ///
    /// A directory that cannot be read lists as empty.
    fn list_entries(&self, dir: &Path) -> Vec<Entry> {
        let read_dir = match fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Cannot list {}: {}", dir.display(), _e);
                return Vec::new();
            }
        };
        let mut entries: Vec<Entry> = read_dir
            .filter_map(Result::ok)
            .filter_map(|dir_entry| {
                let name = dir_entry.file_name();
                let path = dir.join(&name);
                let is_dir = path.is_dir();
                self.admits(&path, is_dir).then_some(Entry { name, path, is_dir })
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }
    fn admits(&self, path: &Path, is_dir: bool) -> bool {
        if self
            .include
            .as_ref()
            .is_some_and(|include| !include.admits(path, is_dir))
        {
            return false;
        }
        if let Some(_pattern) = self.ignore.find(path, is_dir) {
            #[cfg(feature = "logging")]
            tracing::debug!("Ignoring {} (matched '{}')", path.display(), _pattern.as_str());
            return false;
        }
        true
    }
}
/// Checks that `root` exists and is a directory.
pub fn validate_root(root: &Path) -> Result<(), ScribeError> {
    if !root.exists() {
        return Err(ScribeError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScribeError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}
/// Makes `root` absolute and collapses its `.` and `..` components, so the
/// tree is headed by the directory's real name and file paths stay clean.
pub fn normalize_root(root: &Path) -> Result<PathBuf, ScribeError> {
    let absolute = std::path::absolute(root).map_err(|e| ScribeError::io(root, e))?;
    Ok(normalize_lexically(&absolute))
}
/// Walks the root directory and returns the tree lines and retained files.
///
/// The root is normalized first (see [`normalize_root`]); retained file paths
/// are built on the normalized root.
///
/// # Errors
///
/// Fails if the root is missing or not a directory, or if any pattern is an
/// invalid glob. Unreadable subdirectories are not errors; they list as empty.
pub fn walk(options: &ScribeOptions) -> Result<TreeListing, ScribeError> {
    validate_root(&options.root)?;
    let root = normalize_root(&options.root)?;
    #[cfg(feature = "logging")]
    tracing::debug!("Starting walk with root: {}", root.display());
    let walker = Walker::new(options)?;
    Ok(walker.walk(&root))
}
/// Reads a retained file as UTF-8 text, describing the failure instead on error.
pub fn read_file_content(path: &Path) -> FileContent {
    match fs::read_to_string(path) {
        Ok(text) => FileContent::Text(text),
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Cannot read {}: {}", path.display(), e);
            FileContent::Unreadable(e.to_string())
        }
    }
}
/// Walks the tree and reads every retained file.
pub fn scribe(options: &ScribeOptions) -> Result<ScribeResult, ScribeError> {
    let TreeListing { lines, files } = walk(options)?;
    let files = files
        .into_iter()
        .map(|path| {
            let content = read_file_content(&path);
            FileEntry { path, content }
        })
        .collect();
    Ok(ScribeResult { tree: lines, files })
}
