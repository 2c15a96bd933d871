mod report;


pub use report::{DispatchReport, JobEntry, MANIFEST_FILE, Manifest};

use crate::bucket::BucketPlan;
use crate::config::DispatchConfig;
use crate::enumerate::list_inputs;
use crate::error::DispatchError;
use crate::script::{ScriptTemplate, ScriptWriter};
use crate::submit::{CommandRunner, Submitter};
use chrono::Utc;
use std::fs;
use tracing::{info, warn};

/// Turns the input directory into submitted batch jobs
pub struct Dispatcher<R: CommandRunner> {
    config: DispatchConfig,
    submitter: Submitter<R>,
}

impl<R: CommandRunner> Dispatcher<R> {
    pub fn new(config: DispatchConfig, runner: R) -> Self {
        let submitter = Submitter::from_config(&config, runner);
        Self { config, submitter }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Create the run directory, then list, bucket, write and submit
    ///
    /// Each script is submitted as soon as it is closed. Listing and
    /// script-writing failures abort the run; command failures are
    /// recorded in the report and the run carries on.
    pub fn run(&mut self) -> Result<DispatchReport, DispatchError> {
        self.config.validate()?;
        let started_at = Utc::now();

        fs::create_dir_all(&self.config.run_dir).map_err(|source| {
            DispatchError::CreateRunDir {
                dir: self.config.run_dir.clone(),
                source,
            }
        })?;

        let files = list_inputs(&self.config.input_dir, &self.config.filter)?;
        info!(
            count = files.len(),
            dir = %self.config.input_dir.display(),
            "found input files"
        );

        let setup = self.submitter.setup();
        if setup.is_failure() {
            warn!(outcome = ?setup, "batch setup failed, submitting anyway");
        }

        let plan = BucketPlan::new(files.len(), self.config.job_count);
        let mut writer = ScriptWriter::new(
            &self.config.run_dir,
            self.config.script_prefix.clone(),
            ScriptTemplate::from_config(&self.config),
        );

        let mut jobs = Vec::with_capacity(plan.bucket_count());
        let mut first = 0;

        for (offset, file) in files.iter().enumerate() {
            let position = offset + 1;

            if let (true, Some(index)) = (plan.opens_at(position), plan.bucket_of(position)) {
                writer.open_new(index)?;
                first = offset;
            }

            writer.append_line(file)?;

            if plan.closes_at(position) {
                let script = writer.close()?;
                let submission = self.submitter.submit(&script);
                jobs.push(JobEntry {
                    submission,
                    inputs: files[first..=offset].to_vec(),
                });
            }
        }

        Ok(DispatchReport {
            run_id: uuid::Uuid::new_v4(),
            started_at,
            total_files: files.len(),
            bucket_size: plan.size,
            setup,
            jobs,
        })
    }

    pub fn into_runner(self) -> R {
        self.submitter.into_runner()
    }
}
