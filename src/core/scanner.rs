//! Project file discovery.
//!
//! Filesystem plumbing around the core: expand the user's glob patterns (or
//! walk the project tree when none are given) and read the survivors into
//! [`SourceFile`]s. `node_modules` and dot-directories are always pruned
//! from walks; unreadable files follow the same strict/tolerant policy as
//! the analysis itself.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use super::dialect::Dialect;
use super::SourceFile;

/// Collect the files to analyze under `root`.
///
/// With `patterns` empty the whole tree is walked and every file of a
/// registered dialect is taken; otherwise each pattern is expanded relative
/// to `root` and the matches are taken verbatim, letting unsupported
/// extensions surface through the per-file policy later.
pub fn discover_files(
    root: &Path,
    patterns: &[String],
    ignores: &[String],
    tolerant: bool,
    verbose: bool,
) -> Result<Vec<SourceFile>> {
    let paths = if patterns.is_empty() {
        walk_project(root, ignores, verbose)
    } else {
        expand_patterns(root, patterns, verbose)
    };

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(error) if tolerant => {
                if verbose {
                    eprintln!(
                        "{} skipping unreadable file {}: {}",
                        "warning:".bold().yellow(),
                        path.display(),
                        error
                    );
                }
                continue;
            }
            Err(error) => {
                return Err(error).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        let relative = path.strip_prefix(root).unwrap_or(&path);
        let name = relative
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        files.push(SourceFile {
            name,
            path: relative.to_string_lossy().to_string(),
            content,
        });
    }

    Ok(files)
}

fn walk_project(root: &Path, ignores: &[String], verbose: bool) -> BTreeSet<PathBuf> {
    let ignore_patterns = compile_patterns(ignores, verbose);

    WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !name.starts_with('.') && name != "node_modules"
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            let relative = path.strip_prefix(root).unwrap_or(path);
            Dialect::supports(&path.file_name().unwrap_or_default().to_string_lossy())
                && !ignore_patterns
                    .iter()
                    .any(|pattern| pattern.matches_path(relative))
        })
        .collect()
}

fn expand_patterns(root: &Path, patterns: &[String], verbose: bool) -> BTreeSet<PathBuf> {
    let mut paths = BTreeSet::new();

    for pattern in patterns {
        let full_pattern = root.join(pattern);
        match glob(&full_pattern.to_string_lossy()) {
            Ok(entries) => {
                paths.extend(
                    entries
                        .filter_map(|entry| entry.ok())
                        .filter(|path| path.is_file()),
                );
            }
            Err(error) => {
                if verbose {
                    eprintln!(
                        "{} Invalid glob pattern '{}': {}",
                        "warning:".bold().yellow(),
                        pattern,
                        error
                    );
                }
            }
        }
    }

    paths
}

fn compile_patterns(patterns: &[String], verbose: bool) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|pattern| match Pattern::new(pattern) {
            Ok(compiled) => Some(compiled),
            Err(error) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        pattern,
                        error
                    );
                }
                None
            }
        })
        .collect()
}
