//! Decomposer engines for component formats.
//!
//! Each component format (Vue, Svelte, Astro) gets one process-wide engine
//! that knows how to locate the script region(s) inside the outer markup.
//! Engines are built on first use behind a [`OnceLock`] per format, so
//! concurrent first use from multiple worker threads performs the build once
//! and every caller observes the same handle. A failed build is cached too
//! and surfaces as [`ExtractError::EngineUnavailable`] on every request.

use std::sync::OnceLock;

use regex::Regex;

use super::dialect::ComponentFormat;
use super::error::ExtractError;
use super::extract::ScriptLanguage;

/// One script region lifted out of a component file.
///
/// `starting_line` is the 1-indexed outer-file line of the region's first
/// content character; a match on inner line `l` maps back to outer line
/// `l + starting_line - 1`.
#[derive(Debug, PartialEq, Eq)]
pub struct EmbeddedScriptBlock<'a> {
    pub starting_line: usize,
    pub language: ScriptLanguage,
    pub content: &'a str,
}

enum Matcher {
    /// `<script>`-delimited regions (Vue, Svelte).
    ScriptTags {
        open: Regex,
        close: Regex,
        lang: Regex,
    },
    /// `---`-fenced frontmatter at the top of the file (Astro).
    Frontmatter,
}

/// A component format's compiled decomposer.
pub struct ScriptEngine {
    matcher: Matcher,
}

/// Get the shared engine for a component format, building it on first use.
pub fn engine(format: ComponentFormat) -> Result<&'static ScriptEngine, ExtractError> {
    static VUE: OnceLock<Result<ScriptEngine, ExtractError>> = OnceLock::new();
    static SVELTE: OnceLock<Result<ScriptEngine, ExtractError>> = OnceLock::new();
    static ASTRO: OnceLock<Result<ScriptEngine, ExtractError>> = OnceLock::new();

    let cell = match format {
        ComponentFormat::Vue => &VUE,
        ComponentFormat::Svelte => &SVELTE,
        ComponentFormat::Astro => &ASTRO,
    };

    cell.get_or_init(|| ScriptEngine::build(format))
        .as_ref()
        .map_err(Clone::clone)
}

impl ScriptEngine {
    fn build(format: ComponentFormat) -> Result<Self, ExtractError> {
        let unavailable = |_| ExtractError::EngineUnavailable { format };

        let matcher = match format {
            ComponentFormat::Vue | ComponentFormat::Svelte => Matcher::ScriptTags {
                open: Regex::new(r"(?i)<script\b[^>]*>").map_err(unavailable)?,
                close: Regex::new(r"(?i)</script\s*>").map_err(unavailable)?,
                lang: Regex::new(r#"(?i)\blang\s*=\s*["']?([A-Za-z0-9]+)"#).map_err(unavailable)?,
            },
            ComponentFormat::Astro => Matcher::Frontmatter,
        };

        Ok(ScriptEngine { matcher })
    }

    /// Split a component file into its embedded script blocks, in source
    /// order. A file without any script region decomposes to an empty list.
    pub fn decompose<'a>(&self, text: &'a str) -> Result<Vec<EmbeddedScriptBlock<'a>>, ExtractError> {
        match &self.matcher {
            Matcher::ScriptTags { open, close, lang } => {
                decompose_script_tags(text, open, close, lang)
            }
            Matcher::Frontmatter => decompose_frontmatter(text),
        }
    }
}

fn decompose_script_tags<'a>(
    text: &'a str,
    open: &Regex,
    close: &Regex,
    lang: &Regex,
) -> Result<Vec<EmbeddedScriptBlock<'a>>, ExtractError> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(tag) = open.find(&text[cursor..]) {
        let tag_text = tag.as_str();
        let content_start = cursor + tag.end();

        if tag_text.ends_with("/>") {
            // Self-closing script tag carries no content.
            cursor = content_start;
            continue;
        }

        let end = close
            .find(&text[content_start..])
            .ok_or_else(|| ExtractError::parse("unclosed <script> tag"))?;

        blocks.push(EmbeddedScriptBlock {
            starting_line: line_of(text, content_start),
            language: script_language(tag_text, lang)?,
            content: &text[content_start..content_start + end.start()],
        });

        cursor = content_start + end.end();
    }

    Ok(blocks)
}

/// Resolve the declared script language of an opening tag.
fn script_language(tag_text: &str, lang: &Regex) -> Result<ScriptLanguage, ExtractError> {
    let Some(captures) = lang.captures(tag_text) else {
        return Ok(ScriptLanguage::Js);
    };

    let declared = captures[1].to_lowercase();
    match declared.as_str() {
        "js" | "javascript" => Ok(ScriptLanguage::Js),
        "ts" | "typescript" => Ok(ScriptLanguage::Ts),
        // Delegating to a component-format extractor would recurse forever,
        // no matter whether the format names itself or a sibling.
        "vue" => Err(ExtractError::CircularDelegation {
            format: ComponentFormat::Vue,
        }),
        "svelte" => Err(ExtractError::CircularDelegation {
            format: ComponentFormat::Svelte,
        }),
        "astro" => Err(ExtractError::CircularDelegation {
            format: ComponentFormat::Astro,
        }),
        _ => Err(ExtractError::UnsupportedDialect {
            extension: declared,
        }),
    }
}

/// Astro components: the frontmatter sits between two `---` fence lines at
/// the top of the file and is always TypeScript.
fn decompose_frontmatter(text: &str) -> Result<Vec<EmbeddedScriptBlock<'_>>, ExtractError> {
    let mut offset = 0;
    let mut line_number = 0;
    let mut opening: Option<(usize, usize)> = None;

    for line in text.split_inclusive('\n') {
        line_number += 1;
        let line_end = offset + line.len();

        if line.trim() == "---" {
            match opening {
                None => opening = Some((line_number, line_end)),
                Some((fence_line, content_start)) => {
                    return Ok(vec![EmbeddedScriptBlock {
                        starting_line: fence_line + 1,
                        language: ScriptLanguage::Ts,
                        content: &text[content_start..offset],
                    }]);
                }
            }
        } else if opening.is_none() && !line.trim().is_empty() {
            // Markup before any fence means the file has no frontmatter.
            return Ok(Vec::new());
        }

        offset = line_end;
    }

    if opening.is_some() {
        return Err(ExtractError::parse("unterminated frontmatter fence"));
    }

    Ok(Vec::new())
}

/// 1-indexed line number of a byte offset.
fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].bytes().filter(|b| *b == b'\n').count() + 1
}
