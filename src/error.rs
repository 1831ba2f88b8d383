use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ScribeError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Root directory not found: {0}")]
    RootNotFound(PathBuf),
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: globset::Error,
    },
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
impl ScribeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScribeError::Io {
            path: path.into(),
            source,
        }
    }
}
