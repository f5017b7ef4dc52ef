//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Scan a source tree for Turkish text (default when no command is given)
//! - `init`: Write a default `.turkscanrc.json`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(args)) => args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Root directory to scan [default: .]
    pub path: Option<PathBuf>,

    /// Additional directory to skip, by name or root-relative path
    /// Can be specified multiple times: --exclude-dir vendor --exclude-dir src/gen
    #[arg(long = "exclude-dir", value_name = "DIR")]
    pub exclude_dirs: Vec<String>,

    /// Exit with status 1 when Turkish text is found
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan source files for Turkish text in comments and output strings
    Scan(ScanArgs),
    /// Initialize a new .turkscanrc.json configuration file
    Init,
}
