//! Error types for the import-detection core.
//!
//! Extractors are path-agnostic: they report what went wrong, and the
//! aggregator attaches the failing file's path before the error reaches the
//! user. Only the aggregator decides whether a per-file error aborts the run
//! (strict) or is skipped with a diagnostic (tolerant).

use thiserror::Error;

use super::dialect::ComponentFormat;

/// A failure while extracting imports from a single piece of source text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The file extension is not mapped to any registered dialect.
    #[error(".{extension} files are currently not supported")]
    UnsupportedDialect { extension: String },

    /// The source is syntactically invalid for the selected grammar. Raised
    /// at either the outer-component or the inner-script level.
    #[error("syntax error: {message}")]
    Parse { message: String },

    /// The decomposer engine for a component format could not be built.
    #[error("no {format} engine available")]
    EngineUnavailable { format: ComponentFormat },

    /// A component format declared another component format as its script
    /// language, which would recurse forever.
    #[error("circular delegation to the {format} extractor")]
    CircularDelegation { format: ComponentFormat },
}

impl ExtractError {
    pub fn parse(message: impl Into<String>) -> Self {
        ExtractError::Parse {
            message: message.into(),
        }
    }
}

/// An [`ExtractError`] bound to the file it occurred in.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Failed to parse {path}: {source}")]
pub struct FileError {
    pub path: String,
    #[source]
    pub source: ExtractError,
}

impl FileError {
    pub fn new(path: impl Into<String>, source: ExtractError) -> Self {
        FileError {
            path: path.into(),
            source,
        }
    }
}
