//! Batch analysis over a set of project files.
//!
//! Files are processed independently on the rayon thread pool. Every worker
//! result is tagged with its input index and the batch is reordered before
//! the fault-tolerance policy runs, so output order always equals input
//! order no matter which file finishes first.

use colored::Colorize;
use rayon::prelude::*;

use super::dialect::{Dialect, SourceMode};
use super::error::FileError;
use super::extract::ImportExtractor;
use super::{MatchResult, SourceFile};

/// Options controlling one aggregation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Skip files that fail to parse instead of aborting the batch.
    pub tolerant: bool,
    /// Force module or script parsing for every ECMAScript-family file.
    pub force_mode: Option<SourceMode>,
}

/// Find every file in `files` that imports `dependency`.
///
/// Strict runs (`tolerant == false`) abort on the first failing file in
/// input order and name its path; nothing is returned for the batch.
/// Tolerant runs report each failure as a single diagnostic line on stderr
/// and keep going. Files with zero matches are dropped.
pub fn find_dependants(
    files: &[SourceFile],
    dependency: &str,
    options: ScanOptions,
) -> Result<Vec<MatchResult>, FileError> {
    let mut indexed: Vec<(usize, Result<Option<MatchResult>, FileError>)> = files
        .par_iter()
        .enumerate()
        .map(|(index, file)| (index, analyze_file(file, dependency, options)))
        .collect();

    // Completion order is scheduler-dependent; put results back into input
    // order before applying the failure policy.
    indexed.sort_unstable_by_key(|(index, _)| *index);

    let mut matches = Vec::new();
    for (_, outcome) in indexed {
        match outcome {
            Ok(Some(result)) => matches.push(result),
            Ok(None) => {}
            Err(error) if options.tolerant => {
                eprintln!("{} {}", "warning:".bold().yellow(), error);
            }
            Err(error) => return Err(error),
        }
    }

    Ok(matches)
}

/// Run the stateless per-file pipeline: dialect → extractor → matches.
fn analyze_file(
    file: &SourceFile,
    dependency: &str,
    options: ScanOptions,
) -> Result<Option<MatchResult>, FileError> {
    let dialect = Dialect::from_file_name(&file.name)
        .map_err(|source| FileError::new(&file.path, source))?;

    let line_numbers = dialect
        .extractor(options.force_mode)
        .extract(&file.content, dependency)
        .map_err(|source| FileError::new(&file.path, source))?;

    if line_numbers.is_empty() {
        return Ok(None);
    }

    Ok(Some(MatchResult {
        name: file.name.clone(),
        path: file.path.clone(),
        line_numbers,
    }))
}
