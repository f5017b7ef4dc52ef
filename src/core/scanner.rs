//! Line-by-line Turkish text detection.
//!
//! Two heuristics run on every non-empty trimmed line:
//!
//! - Comment lines (`//`, `/*` or a leading `*`) are flagged when the whole
//!   line contains a Turkish letter. A flagged comment line is not checked
//!   again by the string heuristic.
//! - Output lines (`console.`, `throw new Error`, `echo`) are flagged when one
//!   of their quoted spans contains a Turkish letter.
//!
//! Quote pairing is loose: any of `"`, `'` or `` ` `` closes a span opened by
//! any of them.

use std::{fs, path::Path, sync::LazyLock};

use regex::Regex;

use crate::issues::{FileScan, Finding, Rule};
use crate::utils::contains_turkish;

static QUOTED_SPAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["'`](.*?)["'`]"#).unwrap());

const COMMENT_MARKERS: &[&str] = &["//", "/*"];

const OUTPUT_MARKERS: &[&str] = &["console.", "throw new Error", "echo"];

/// Read a file as UTF-8 and scan it.
///
/// Any read failure (missing file, permissions, invalid UTF-8) is returned as
/// [`FileScan::Unreadable`] rather than an error so the walk can continue.
pub fn scan_file(path: &Path) -> FileScan {
    match fs::read_to_string(path) {
        Ok(content) => FileScan::Scanned {
            findings: scan_source(&path.display().to_string(), &content),
            path: path.to_path_buf(),
        },
        Err(error) => FileScan::Unreadable {
            path: path.to_path_buf(),
            error,
        },
    }
}

/// Scan already-loaded file content. `path` is only used to label findings.
pub fn scan_source(path: &str, content: &str) -> Vec<Finding> {
    lines(content)
        .enumerate()
        .filter_map(|(idx, raw)| {
            let line = trim_line(raw);
            check_line(line).map(|rule| Finding {
                path: path.to_string(),
                line: idx + 1,
                text: line.to_string(),
                rule,
            })
        })
        .collect()
}

/// Decide whether a trimmed line should be reported, and by which heuristic.
pub fn check_line(line: &str) -> Option<Rule> {
    if line.is_empty() {
        return None;
    }

    if is_comment_line(line) && contains_turkish(line) {
        return Some(Rule::Comment);
    }

    if is_output_line(line) && quoted_spans(line).any(contains_turkish) {
        return Some(Rule::OutputString);
    }

    None
}

/// Trim surrounding whitespace, counting the ASCII information separators
/// U+001C..=U+001F as whitespace too.
fn trim_line(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

fn is_comment_line(line: &str) -> bool {
    COMMENT_MARKERS.iter().any(|m| line.contains(m)) || line.starts_with('*')
}

fn is_output_line(line: &str) -> bool {
    OUTPUT_MARKERS.iter().any(|m| line.contains(m))
}

/// Contents of every quoted span, left to right, non-overlapping.
fn quoted_spans(line: &str) -> impl Iterator<Item = &str> {
    QUOTED_SPAN_REGEX
        .captures_iter(line)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

/// Split on `\n`, `\r\n` and lone `\r`. A trailing terminator does not
/// produce an extra empty line.
fn lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(idx) => {
                let line = &rest[..idx];
                let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + terminator..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}
