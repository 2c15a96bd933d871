use super::runner::{CommandRunner, RunOutcome};
use crate::config::DispatchConfig;
use crate::script::GeneratedScript;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Result of handing one job script to the batch system
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    pub job: usize,
    pub script: PathBuf,
    pub files: usize,
    pub outcome: RunOutcome,
}

/// Drives the batch system's setup and submission commands
pub struct Submitter<R: CommandRunner> {
    setup_command: String,
    submit_command: String,
    wrapper: String,
    runner: R,
}

impl<R: CommandRunner> Submitter<R> {
    pub fn new(
        setup_command: impl Into<String>,
        submit_command: impl Into<String>,
        wrapper: impl Into<String>,
        runner: R,
    ) -> Self {
        Self {
            setup_command: setup_command.into(),
            submit_command: submit_command.into(),
            wrapper: wrapper.into(),
            runner,
        }
    }

    pub fn from_config(config: &DispatchConfig, runner: R) -> Self {
        Self::new(
            config.setup_command.clone(),
            config.submit_command.clone(),
            config.wrapper.clone(),
            runner,
        )
    }

    /// Prepare the batch environment; run once before any submission
    pub fn setup(&mut self) -> RunOutcome {
        info!(command = %self.setup_command, "running batch setup");
        self.runner.run(&self.setup_command, &[])
    }

    /// Submit a closed job script through the wrapper
    pub fn submit(&mut self, script: &GeneratedScript) -> SubmissionRecord {
        let args = [self.wrapper.clone(), script.submission_path()];
        info!(job = script.index, script = %args[1], "submitting job");

        let outcome = self.runner.run(&self.submit_command, &args);
        SubmissionRecord {
            job: script.index,
            script: script.path.clone(),
            files: script.file_count(),
            outcome,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn into_runner(self) -> R {
        self.runner
    }
}
