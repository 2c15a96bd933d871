use crate::config::DispatchConfig;

/// Interpreter line every job script starts with
pub const SCRIPT_HEADER: &str = "#!/bin/bash";

/// Renders the lines of a job script
#[derive(Debug, Clone)]
pub struct ScriptTemplate {
    executable: String,
    input_dir: String,
    log_prefix: String,
}

impl ScriptTemplate {
    pub fn new(
        executable: impl Into<String>,
        input_dir: impl Into<String>,
        log_prefix: impl Into<String>,
    ) -> Self {
        Self {
            executable: executable.into(),
            input_dir: input_dir.into(),
            log_prefix: log_prefix.into(),
        }
    }

    pub fn from_config(config: &DispatchConfig) -> Self {
        Self::new(
            config.executable.clone(),
            config.input_dir.to_string_lossy().into_owned(),
            config.log_prefix.clone(),
        )
    }

    /// Full path of an input file as seen from the batch node
    pub fn input_path(&self, file: &str) -> String {
        let dir = self.input_dir.trim_end_matches('/');
        if dir.is_empty() && self.input_dir.starts_with('/') {
            format!("/{}", file)
        } else if dir.is_empty() {
            file.to_string()
        } else {
            format!("{}/{}", dir, file)
        }
    }

    /// Log file the job appends its scan results to
    pub fn log_name(&self, job_index: usize) -> String {
        format!("{}{}.txt", self.log_prefix, job_index)
    }

    /// One scan invocation, without trailing newline
    pub fn command_line(&self, file: &str, job_index: usize) -> String {
        format!(
            "{} -f {} >> {}",
            self.executable,
            self.input_path(file),
            self.log_name(job_index)
        )
    }
}
