//! Import extraction: the shared `(text, dependency) → line numbers`
//! capability and its per-dialect implementations.
//!
//! - `ecma`: direct SWC-based extraction for the ECMAScript family
//! - `embedded`: component formats, which lift their script region out of the
//!   markup and delegate to the ECMAScript extractor

use enum_dispatch::enum_dispatch;

use super::error::ExtractError;

pub mod ecma;
pub mod embedded;

pub use ecma::EcmaExtractor;
pub use embedded::EmbeddedExtractor;

/// Language of a script body handed to the ECMAScript extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptLanguage {
    Js,
    Ts,
}

/// The shared extraction contract: every dialect reduces to "given this text
/// and this dependency, on which 1-indexed lines is it imported?".
///
/// Lines come back deduplicated and sorted ascending. Extraction is pure with
/// respect to its inputs; identical `(text, dependency)` pairs always yield
/// identical output.
#[enum_dispatch]
pub trait ImportExtractor {
    fn extract(&self, text: &str, dependency: &str) -> Result<Vec<usize>, ExtractError>;
}

/// A dispatchable extractor for one dialect, resolved by
/// [`Dialect::extractor`](super::dialect::Dialect::extractor).
#[enum_dispatch(ImportExtractor)]
pub enum ExtractorHandle {
    Ecma(EcmaExtractor),
    Embedded(EmbeddedExtractor),
}
