//! Glob pattern matching for include and ignore filters.
//!
//! A pattern ending in `/` is a directory pattern: it only matches directories,
//! and only against their final path segment. Any other pattern is tried
//! against the full candidate path and then against the final segment alone,
//! so both `src/*.tmp` and `*.tmp` work as expected.
//!
//! Only `*`, `?` and `[...]` (with `!` negation) are special. Braces,
//! backslashes and an unclosed `[` match literally, so no pattern read from
//! an ignore file can be rejected for its syntax.

use crate::error::ScribeError;
use globset::{GlobBuilder, GlobMatcher};
use std::path::Path;

/// A single compiled include or ignore pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    matcher: GlobMatcher,
    directory_only: bool,
}

impl Pattern {
    /// Compiles a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`ScribeError::Pattern`] if the translated glob is still
    /// rejected by the glob engine.
    pub fn new(raw: &str) -> Result<Self, ScribeError> {
        let (glob, directory_only) = match raw.strip_suffix('/') {
            Some(stripped) => (stripped, true),
            None => (raw, false),
        };
        let matcher = GlobBuilder::new(&translate(glob))
            .backslash_escape(false)
            .build()
            .map_err(|source| ScribeError::Pattern {
                pattern: raw.to_string(),
                source,
            })?
            .compile_matcher();
        Ok(Self {
            raw: raw.to_string(),
            matcher,
            directory_only,
        })
    }

    /// The pattern as originally written, trailing `/` included.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_directory_only(&self) -> bool {
        self.directory_only
    }

    /// Returns whether `path` matches this pattern.
    ///
    /// `is_dir` must describe the candidate as it currently exists on disk.
    pub fn matches(&self, path: &Path, is_dir: bool) -> bool {
        let name = path.file_name();
        if self.directory_only {
            return is_dir && name.is_some_and(|n| self.matcher.is_match(n));
        }
        self.matcher.is_match(path) || name.is_some_and(|n| self.matcher.is_match(n))
    }
}

/// An ordered collection of patterns with any-of semantics.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn new<I, S>(patterns: I) -> Result<Self, ScribeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| Pattern::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// Returns the first pattern matching `path`, if any.
    pub fn find(&self, path: &Path, is_dir: bool) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.matches(path, is_dir))
    }

    pub fn matches(&self, path: &Path, is_dir: bool) -> bool {
        self.find(path, is_dir).is_some()
    }

    /// Splits the set into `(general, directory_only)` patterns, keeping order.
    pub fn split_directory_patterns(self) -> (PatternSet, PatternSet) {
        let (dirs, general): (Vec<_>, Vec<_>) = self
            .patterns
            .into_iter()
            .partition(Pattern::is_directory_only);
        (
            PatternSet { patterns: general },
            PatternSet { patterns: dirs },
        )
    }
}

/// Rewrites a shell-style glob so globset reads it with fnmatch rules.
fn translate(glob: &str) -> String {
    let chars: Vec<char> = glob.chars().collect();
    let mut out = String::with_capacity(glob.len() + 8);
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    push_class(&mut out, &chars[i + 1..end]);
                    i = end + 1;
                    continue;
                }
                None => out.push_str("[[]"),
            },
            '{' => out.push_str("[{]"),
            '}' => out.push_str("[}]"),
            c => out.push(c),
        }
        i += 1;
    }
    out
}

/// Index of the `]` closing the class opened at `start`. A `]` right after
/// the opening `[` (or `[!`) belongs to the class.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    chars[j.min(chars.len())..]
        .iter()
        .position(|&c| c == ']')
        .map(|offset| j + offset)
}

/// Emits a class body. A leading `^` is literal in fnmatch but negates in
/// globset, so it is moved to the end of the class.
fn push_class(out: &mut String, body: &[char]) {
    match body {
        ['^'] => out.push('^'),
        ['^', rest @ ..] => {
            out.push('[');
            out.extend(rest);
            out.push_str("^]");
        }
        _ => {
            out.push('[');
            out.extend(body);
            out.push(']');
        }
    }
}
