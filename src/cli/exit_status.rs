use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed. A plain scan always ends here, even
///   when Turkish text was found.
/// - `Failure` (1): `--strict` scan found Turkish text, or `init` found an
///   existing config file.
/// - `Error` (2): Command failed (unreadable directory, invalid config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but reported a failure condition.
    Failure,
    /// Command failed due to internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
