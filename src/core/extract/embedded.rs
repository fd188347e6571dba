//! Import extraction for component formats (Vue, Svelte, Astro).
//!
//! The outer markup is decomposed by the format's engine into embedded
//! script blocks; each block is handed to an [`EcmaExtractor`] and the
//! returned line numbers are remapped into outer-file coordinates.
//!
//! When a file exposes more than one eligible region (a legacy `<script>`
//! next to `<script setup>`, or Svelte's instance and module scripts), every
//! region is analyzed and the remapped lines are merged in source order.

use super::{EcmaExtractor, ImportExtractor};
use crate::core::dialect::{ComponentFormat, SourceMode};
use crate::core::engine;
use crate::core::error::ExtractError;

/// Extractor for markup files embedding a script region.
///
/// The delegate is the concrete [`EcmaExtractor`], not the dialect-wide
/// handle: a component format structurally cannot delegate to another
/// component format.
pub struct EmbeddedExtractor {
    format: ComponentFormat,
}

impl EmbeddedExtractor {
    pub fn new(format: ComponentFormat) -> Self {
        EmbeddedExtractor { format }
    }
}

impl ImportExtractor for EmbeddedExtractor {
    fn extract(&self, text: &str, dependency: &str) -> Result<Vec<usize>, ExtractError> {
        let engine = engine::engine(self.format)?;
        let blocks = engine.decompose(text)?;

        let mut lines = Vec::new();
        for block in blocks {
            // Embedded scripts are always modules, whatever the CLI forces
            // for standalone files.
            let delegate = EcmaExtractor::new(block.language, SourceMode::Module);
            let inner = delegate.extract(block.content, dependency)?;

            lines.extend(
                inner
                    .into_iter()
                    .map(|line| line + block.starting_line - 1),
            );
        }

        lines.sort_unstable();
        lines.dedup();
        Ok(lines)
    }
}
