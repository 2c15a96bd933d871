use crate::error::DispatchError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;


/// Directory holding the signal workspaces
pub const DEFAULT_INPUT_DIR: &str = "/net/cms2/cms2r0/babymaker/wspaces/";

/// Only workspaces built with the nominal cross section are scanned
pub const DEFAULT_FILTER: &str = "xsecNom";

pub const DEFAULT_RUN_DIR: &str = "batch_jobs/";
pub const DEFAULT_SCRIPT_PREFIX: &str = "wspace_sig_";
pub const DEFAULT_JOB_COUNT: usize = 60;
pub const DEFAULT_EXECUTABLE: &str = "./run/scan_point.exe";
pub const DEFAULT_WRAPPER: &str = "./run/wrapper.sh";
pub const DEFAULT_SETUP_COMMAND: &str = "JobSetup.csh";
pub const DEFAULT_SUBMIT_COMMAND: &str = "JobSubmit.csh";
pub const DEFAULT_LOG_PREFIX: &str = "limits_";

/// Everything a dispatch run needs to know up front
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Directory whose entries become job inputs
    pub input_dir: PathBuf,
    /// Substring an entry name must contain to be picked up
    pub filter: String,
    /// Where generated job scripts are written
    pub run_dir: PathBuf,
    pub script_prefix: String,
    /// Target number of batch jobs
    pub job_count: usize,
    /// Analysis executable invoked once per input file
    pub executable: String,
    /// Wrapper handed to the submission command
    pub wrapper: String,
    pub setup_command: String,
    pub submit_command: String,
    /// Per-job log files are `<log_prefix><job>.txt`
    pub log_prefix: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            filter: DEFAULT_FILTER.to_string(),
            run_dir: PathBuf::from(DEFAULT_RUN_DIR),
            script_prefix: DEFAULT_SCRIPT_PREFIX.to_string(),
            job_count: DEFAULT_JOB_COUNT,
            executable: DEFAULT_EXECUTABLE.to_string(),
            wrapper: DEFAULT_WRAPPER.to_string(),
            setup_command: DEFAULT_SETUP_COMMAND.to_string(),
            submit_command: DEFAULT_SUBMIT_COMMAND.to_string(),
            log_prefix: DEFAULT_LOG_PREFIX.to_string(),
        }
    }
}

impl DispatchConfig {
    /// Reject settings that cannot produce a job layout
    pub fn validate(&self) -> Result<(), DispatchError> {
        if self.job_count == 0 {
            return Err(DispatchError::InvalidConfig(
                "job count must be at least 1".to_string(),
            ));
        }

        for (name, value) in [
            ("executable", &self.executable),
            ("wrapper", &self.wrapper),
            ("setup command", &self.setup_command),
            ("submit command", &self.submit_command),
            ("script prefix", &self.script_prefix),
        ] {
            if value.trim().is_empty() {
                return Err(DispatchError::InvalidConfig(format!(
                    "{} must not be empty",
                    name
                )));
            }
        }

        Ok(())
    }
}
