//! Command-line interface layer.
//!
//! Parses arguments, dispatches to the `scan` and `init` commands and maps
//! their results to a process exit code. Printing lives here rather than in
//! `core` so the scanner can be used as a library without side effects.

use std::process::ExitCode;

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs, ScanArgs};
pub use commands::{CommandResult, CommandSummary, InitSummary, ScanSummary};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(result.exit_status.into())
}
