use serde::Serialize;
use std::process::Command;
use tracing::{info, warn};

/// How an external command ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    Succeeded,
    /// Exited non-zero, or was killed by a signal (`code` is `None`)
    Failed { code: Option<i32> },
    /// The process could not be started at all
    SpawnFailed { reason: String },
    /// Not run (dry run)
    Skipped,
}

impl RunOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. } | RunOutcome::SpawnFailed { .. })
    }
}

/// Runs external commands to completion
///
/// Implementations block until the command exits. Failures are reported
/// through the outcome, never as an error.
pub trait CommandRunner {
    fn run(&mut self, program: &str, args: &[String]) -> RunOutcome;
}

/// Spawns real processes, inheriting stdio
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&mut self, program: &str, args: &[String]) -> RunOutcome {
        match Command::new(program).args(args).status() {
            Ok(status) if status.success() => RunOutcome::Succeeded,
            Ok(status) => {
                warn!(program, ?args, code = ?status.code(), "command exited with failure");
                RunOutcome::Failed {
                    code: status.code(),
                }
            }
            Err(e) => {
                warn!(program, ?args, error = %e, "failed to spawn command");
                RunOutcome::SpawnFailed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Logs what would be run and runs nothing
#[derive(Debug, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&mut self, program: &str, args: &[String]) -> RunOutcome {
        info!(program, ?args, "dry run, not executing");
        RunOutcome::Skipped
    }
}
