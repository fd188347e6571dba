//! Core import-detection engine.
//!
//! The pipeline for one file is stateless: text → dialect → (AST, or script
//! region + delegation) → matching lines. The only process-wide state is the
//! per-format decomposer engine cache in [`engine`].
//!
//! ## Module Structure
//!
//! - `package`: import specifier → root package name
//! - `dialect`: extension → dialect registry and extractor dispatch
//! - `extract`: per-dialect import extraction (direct and embedded)
//! - `engine`: lazily-built decomposer engines for component formats
//! - `aggregate`: batch runs with strict/tolerant failure policy
//! - `scanner`: project file discovery (filesystem plumbing)
//! - `error`: typed core errors

pub mod aggregate;
pub mod dialect;
pub mod engine;
pub mod error;
pub mod extract;
pub mod package;
pub mod scanner;

pub use aggregate::{ScanOptions, find_dependants};
pub use dialect::{ComponentFormat, Dialect, SourceMode};
pub use error::{ExtractError, FileError};

use serde::Serialize;

/// A project file to analyze. Owned by the caller; the core never mutates
/// or persists it.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Base file name, used for dialect dispatch and display.
    pub name: String,
    /// Path relative to the project root.
    pub path: String,
    pub content: String,
}

/// One file that imports the target dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub name: String,
    pub path: String,
    /// 1-indexed, ascending. Each entry is the line where a matching
    /// import/require expression begins.
    pub line_numbers: Vec<usize>,
}
