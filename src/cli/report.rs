//! Report formatting and printing utilities.
//!
//! Findings go to stdout as `path:line: text`, one per line, so the output
//! stays greppable and clickable in editors. Read failures and the optional
//! verbose summary go to stderr.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, ScanSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::FileScan;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command's trailing report.
///
/// Findings are streamed while scanning, so for `scan` only the summary is
/// left; it is printed in verbose mode.
pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Scan(summary) if verbose => {
            print_summary_to(summary, &mut io::stderr().lock())
        }
        CommandSummary::Scan(_) => {}
        CommandSummary::Init(summary) => print_init_to(summary, &mut io::stdout().lock()),
    }
}

/// Confirm a newly written config file.
pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

/// Print the outcome of one file: its findings, or why it could not be read.
pub fn print_file_scan_to<O: Write, E: Write>(scan: &FileScan, out: &mut O, err: &mut E) {
    match scan {
        FileScan::Scanned { findings, .. } => {
            for finding in findings {
                let _ = writeln!(out, "{}", finding);
            }
        }
        FileScan::Unreadable { path, error } => {
            let _ = writeln!(err, "Error reading {}: {}", path.display(), error);
        }
    }
}

/// Print the end-of-run summary to a custom writer.
pub fn print_summary_to<W: Write>(summary: &ScanSummary, writer: &mut W) {
    let files = plural(summary.files_scanned, "file", "files");

    let msg = if summary.finding_count == 0 {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Scanned {} {} - no Turkish text found",
                summary.files_scanned, files
            )
            .green()
        )
    } else {
        format!(
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "Found Turkish text on {} {} in {} {} ({} {} scanned)",
                summary.finding_count,
                plural(summary.finding_count, "line", "lines"),
                summary.files_with_findings,
                plural(summary.files_with_findings, "file", "files"),
                summary.files_scanned,
                files
            )
            .red()
        )
    };
    let _ = writeln!(writer, "{}", msg);

    if !summary.rule_counts.is_empty() {
        let breakdown = summary
            .rule_counts
            .iter()
            .map(|(rule, count)| format!("{} {}", count, rule))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(writer, "{} {}", "note:".bold(), breakdown);
    }

    if summary.unreadable_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} could not be read",
            "warning:".bold().yellow(),
            summary.unreadable_count,
            plural(summary.unreadable_count, "file", "files")
        );
    }
}

/// Note which config file is in effect.
pub fn print_config_note_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} using configuration from {}",
        "note:".bold(),
        path.display()
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
