use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Result;

use super::super::{args::ScanArgs, exit_status::ExitStatus, report};
use super::{CommandResult, CommandSummary, ScanSummary};
use crate::{
    config::{ConfigLoadResult, load_config},
    core::{TreeWalker, scan_file},
};

pub fn scan(args: &ScanArgs) -> Result<CommandResult> {
    scan_to(args, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Walk the tree and print each file's findings as soon as it is scanned.
///
/// An unreadable file is reported and skipped. An unreadable directory aborts
/// the run with an error; findings printed before that point stay printed.
pub fn scan_to<O: Write, E: Write>(
    args: &ScanArgs,
    out: &mut O,
    err: &mut E,
) -> Result<CommandResult> {
    let root = args.path.clone().unwrap_or_else(|| PathBuf::from("."));

    let ConfigLoadResult { mut config, source } = load_config(&root)?;
    config.exclude_dirs.extend(args.exclude_dirs.iter().cloned());

    if args.common.verbose
        && let Some(path) = &source
    {
        report::print_config_note_to(path, err);
    }

    let walker = TreeWalker::new(&root, &config)?;
    let mut summary = ScanSummary::default();

    for target in walker.targets() {
        let file_scan = scan_file(&target?);
        report::print_file_scan_to(&file_scan, out, err);
        summary.record(&file_scan);
    }

    let exit_status = if args.strict && summary.finding_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    };

    Ok(CommandResult {
        summary: CommandSummary::Scan(summary),
        exit_status,
    })
}
