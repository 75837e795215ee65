use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status for the destyle CLI, following linter conventions: 0 for a
/// clean run, 1 when error-severity issues were found, 2 for internal
/// failures (invalid config, unusable arguments).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Exit status for a finished command. Warnings never affect the exit
    /// code; only error-severity issues do.
    pub fn from_result(result: &CommandResult) -> Self {
        if result.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
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
