use anyhow::Result;

use super::{
    args::{Arguments, Command, ScanArgs},
    commands::{CommandResult, init::init, scan::scan},
};

/// Dispatch to the command handler. No command means a default scan of `.`.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Scan(args)) => scan(&args),
        Some(Command::Init) => init(),
        None => scan(&ScanArgs::default()),
    }
}
