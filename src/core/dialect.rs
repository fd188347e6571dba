//! Dialect registry: file extension → parsing strategy.
//!
//! Every supported source flavor is enumerated in [`Dialect`], so dispatch is
//! a closed match instead of string comparisons scattered through call sites.
//! Registering a new dialect means adding a variant here, mapping its
//! extension in [`Dialect::from_extension`], and returning an extractor for
//! it in [`Dialect::extractor`].

use super::error::ExtractError;
use super::extract::{EcmaExtractor, EmbeddedExtractor, ExtractorHandle, ScriptLanguage};

/// How ECMAScript-family source text should be parsed.
///
/// `require` detection works under either mode, since a `require` call is an
/// ordinary call expression rather than a grammar construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// ES module grammar: `import`/`export` declarations allowed.
    Module,
    /// Classic script grammar, used for CommonJS sources.
    Script,
}

/// A component format whose script region is embedded inside markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentFormat {
    Vue,
    Svelte,
    Astro,
}

impl std::fmt::Display for ComponentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentFormat::Vue => write!(f, "Vue"),
            ComponentFormat::Svelte => write!(f, "Svelte"),
            ComponentFormat::Astro => write!(f, "Astro"),
        }
    }
}

/// The source-language variant of a file, determining its parsing strategy.
///
/// TypeScript files (`.ts`, `.mts`, `.tsx`) all share the [`Dialect::Tsx`]
/// variant: they are parsed with a single TSX-capable TypeScript grammar,
/// and the extended `.tsx`/`.jsx` suffixes normalize to their base language
/// while retaining JSX-aware parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Classic scripts (`.cjs`).
    Script,
    /// ES modules (`.js`, `.mjs`).
    Module,
    /// JavaScript with JSX (`.jsx`).
    Jsx,
    /// TypeScript, TSX-capable (`.ts`, `.mts`, `.tsx`).
    Tsx,
    /// Vue single-file components (`.vue`).
    Vue,
    /// Svelte components (`.svelte`).
    Svelte,
    /// Astro components (`.astro`).
    Astro,
}

/// Get a file name's extension: the suffix after the final `.`, lowercased.
pub fn file_extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or_default().to_lowercase()
}

impl Dialect {
    /// Resolve the dialect for a file name.
    pub fn from_file_name(name: &str) -> Result<Self, ExtractError> {
        Self::from_extension(&file_extension(name))
    }

    /// Resolve the dialect for a bare extension (no leading dot).
    pub fn from_extension(extension: &str) -> Result<Self, ExtractError> {
        match extension {
            "cjs" => Ok(Dialect::Script),
            "js" | "mjs" => Ok(Dialect::Module),
            "jsx" => Ok(Dialect::Jsx),
            "ts" | "mts" | "tsx" => Ok(Dialect::Tsx),
            "vue" => Ok(Dialect::Vue),
            "svelte" => Ok(Dialect::Svelte),
            "astro" => Ok(Dialect::Astro),
            _ => Err(ExtractError::UnsupportedDialect {
                extension: extension.to_string(),
            }),
        }
    }

    /// Whether a file name maps to any registered dialect.
    pub fn supports(name: &str) -> bool {
        Self::from_file_name(name).is_ok()
    }

    /// Build the extractor for this dialect. `force_mode` overrides the
    /// module/script decision for ECMAScript-family dialects and is ignored
    /// by component formats, whose inner scripts are always modules.
    pub fn extractor(self, force_mode: Option<SourceMode>) -> ExtractorHandle {
        let mode = |default| force_mode.unwrap_or(default);

        match self {
            Dialect::Script => {
                EcmaExtractor::new(ScriptLanguage::Js, mode(SourceMode::Script)).into()
            }
            Dialect::Module | Dialect::Jsx => {
                EcmaExtractor::new(ScriptLanguage::Js, mode(SourceMode::Module)).into()
            }
            Dialect::Tsx => EcmaExtractor::new(ScriptLanguage::Ts, mode(SourceMode::Module)).into(),
            Dialect::Vue => EmbeddedExtractor::new(ComponentFormat::Vue).into(),
            Dialect::Svelte => EmbeddedExtractor::new(ComponentFormat::Svelte).into(),
            Dialect::Astro => EmbeddedExtractor::new(ComponentFormat::Astro).into(),
        }
    }

    /// Human-readable group label, used when the reporter buckets matches by
    /// file type.
    pub fn description(self) -> &'static str {
        match self {
            Dialect::Script => "CommonJS Files",
            Dialect::Module => "JavaScript Files",
            Dialect::Jsx => "JavaScript Extended Files",
            Dialect::Tsx => "TypeScript Files",
            Dialect::Vue => "Vue Single File Components",
            Dialect::Svelte => "Svelte Components",
            Dialect::Astro => "Astro Components",
        }
    }
}
