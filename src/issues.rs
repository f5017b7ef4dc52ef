//! Result types produced by the line scanner.
//!
//! A [`Finding`] is one line believed to contain Turkish text. A [`FileScan`]
//! is the outcome of scanning one file: its findings, or the read failure that
//! made it unscannable.

use std::{fmt, io, path::PathBuf};

/// Which heuristic flagged a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    /// Line looks like a comment (`//`, `/*`, leading `*`).
    Comment,
    /// Quoted text on a console, throw or echo line.
    OutputString,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Comment => write!(f, "comment"),
            Rule::OutputString => write!(f, "output-string"),
        }
    }
}

/// A line flagged as containing Turkish text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Path as produced by the walker (root joined with the relative path).
    pub path: String,
    /// 1-based line number.
    pub line: usize,
    /// The line with surrounding whitespace trimmed.
    pub text: String,
    pub rule: Rule,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.path, self.line, self.text)
    }
}

/// Outcome of scanning a single file.
#[derive(Debug)]
pub enum FileScan {
    Scanned {
        path: PathBuf,
        findings: Vec<Finding>,
    },
    Unreadable {
        path: PathBuf,
        error: io::Error,
    },
}

impl FileScan {
    /// Whether at least one finding was produced for this file.
    pub fn found(&self) -> bool {
        matches!(self, FileScan::Scanned { findings, .. } if !findings.is_empty())
    }

    pub fn findings(&self) -> &[Finding] {
        match self {
            FileScan::Scanned { findings, .. } => findings,
            FileScan::Unreadable { .. } => &[],
        }
    }
}
