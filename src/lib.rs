//! # Treescribe
//!
//! `treescribe` walks a directory tree, renders it as a box-drawing diagram and
//! concatenates the text of every file that survives filtering into a single
//! report, ready to paste into documentation or a language-model prompt.
//!
//! Filtering uses glob patterns. Include patterns restrict which entries are
//! kept (an empty include set keeps everything); ignore patterns always win.
//! A pattern ending in `/` only applies to directories.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use treescribe::{ScribeBuilder, output, scribe};
//!
//! let options = ScribeBuilder::new(".")
//!     .include("*.rs")
//!     .exclude("target/")
//!     .build();
//!
//! let result = scribe(&options).expect("Failed to scan directory");
//!
//! println!("{}", output::format_tree(&result));
//! for file in &result.files {
//!     println!("File: {}", file.path.display());
//! }
//! ```

mod engine;
mod error;
pub mod ignore_file;
mod matcher;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{normalize_root, read_file_content, scribe, validate_root, walk};
pub use error::ScribeError;
pub use matcher::{Pattern, PatternSet};
pub use options::{ScribeBuilder, ScribeOptions};
pub use types::{FileContent, FileEntry, ScribeResult, TreeListing};
