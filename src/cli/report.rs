//! Report formatting and printing utilities.
//!
//! Matches are grouped by file type and rendered either line-per-line or as
//! a box-drawn table. Separate from core logic so depscan can be used as a
//! library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::run::{RunResult, ScanOutcome};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{Dialect, MatchResult};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Rendering order of the file-type groups.
const GROUP_ORDER: &[Dialect] = &[
    Dialect::Script,
    Dialect::Module,
    Dialect::Jsx,
    Dialect::Tsx,
    Dialect::Vue,
    Dialect::Svelte,
    Dialect::Astro,
];

/// Print a run's outcome to stdout.
pub fn print(result: &RunResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a run's outcome to a custom writer. Useful for testing.
pub fn print_to<W: Write>(result: &RunResult, verbose: bool, writer: &mut W) {
    match result {
        RunResult::Init { .. } => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        }
        RunResult::Scan(outcome) => print_scan(outcome, verbose, writer),
    }
}

fn print_scan<W: Write>(outcome: &ScanOutcome, verbose: bool, writer: &mut W) {
    if verbose {
        let _ = writeln!(
            writer,
            "Checked {} source file(s)",
            outcome.files_scanned
        );
    }

    let dependency = match &outcome.declared_version {
        Some(version) => format!("{}@{}", outcome.dependency, version),
        None => outcome.dependency.clone(),
    };
    let _ = writeln!(
        writer,
        "\n{}",
        format!(
            "📦 There are {} files in this project that depend on '{}'",
            outcome.results.len(),
            dependency
        )
        .bright_cyan()
    );

    if outcome.results.is_empty() {
        return;
    }
    let _ = writeln!(writer);

    for dialect in GROUP_ORDER {
        let mut group: Vec<&MatchResult> = outcome
            .results
            .iter()
            .filter(|result| Dialect::from_file_name(&result.name) == Ok(*dialect))
            .collect();

        if group.is_empty() {
            continue;
        }

        // Shallow files first, then lexicographic by name.
        group.sort_by_key(|result| (result.path.split('/').count(), result.name.clone()));

        let _ = writeln!(writer, "📁 {}", dialect.description());
        if outcome.table {
            print_table(&group, writer);
        } else {
            print_lines(&group, writer);
        }
        let _ = writeln!(writer);
    }
}

fn print_lines<W: Write>(group: &[&MatchResult], writer: &mut W) {
    for result in group {
        let _ = writeln!(
            writer,
            "{}",
            format!(
                "└── {}:{} → {}",
                result.name,
                join_lines(&result.line_numbers),
                result.path
            )
            .cyan()
        );
    }
}

fn print_table<W: Write>(group: &[&MatchResult], writer: &mut W) {
    let headers = ["File name", "File path", "Lines"];
    let rows: Vec<[String; 3]> = group
        .iter()
        .map(|result| {
            [
                result.name.clone(),
                result.path.clone(),
                join_lines(&result.line_numbers),
            ]
        })
        .collect();

    let mut widths = headers.map(UnicodeWidthStr::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let border = |writer: &mut W| {
        let _ = writeln!(
            writer,
            "+-{}-+-{}-+-{}-+",
            "-".repeat(widths[0]),
            "-".repeat(widths[1]),
            "-".repeat(widths[2])
        );
    };

    let print_row = |writer: &mut W, cells: [&str; 3]| {
        let _ = writeln!(
            writer,
            "| {} | {} | {} |",
            pad(cells[0], widths[0]),
            pad(cells[1], widths[1]),
            pad(cells[2], widths[2])
        );
    };

    border(writer);
    print_row(writer, headers);
    border(writer);
    for row in &rows {
        print_row(writer, [&row[0], &row[1], &row[2]]);
    }
    border(writer);
}

fn join_lines(lines: &[usize]) -> String {
    lines
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Pad a cell to a display width, accounting for wide characters.
fn pad(cell: &str, width: usize) -> String {
    let padding = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(padding))
}
