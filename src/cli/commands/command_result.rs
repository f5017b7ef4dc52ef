use std::collections::BTreeMap;

use super::super::exit_status::ExitStatus;
use crate::issues::{FileScan, Rule};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Init(InitSummary),
}

/// Totals accumulated over one scan run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub files_with_findings: usize,
    pub finding_count: usize,
    pub unreadable_count: usize,
    /// Findings per heuristic.
    pub rule_counts: BTreeMap<Rule, usize>,
}

impl ScanSummary {
    pub fn record(&mut self, scan: &FileScan) {
        match scan {
            FileScan::Scanned { .. } => self.files_scanned += 1,
            FileScan::Unreadable { .. } => self.unreadable_count += 1,
        }

        if scan.found() {
            self.files_with_findings += 1;
        }
        for finding in scan.findings() {
            self.finding_count += 1;
            *self.rule_counts.entry(finding.rule).or_default() += 1;
        }
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running turkscan commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}
