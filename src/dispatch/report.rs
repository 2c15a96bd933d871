use crate::config::DispatchConfig;
use crate::error::DispatchError;
use crate::submit::{RunOutcome, SubmissionRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use uuid::Uuid;

/// Name of the run manifest inside the run directory
pub const MANIFEST_FILE: &str = "dispatch.json";

/// A submitted job and the inputs it scans
#[derive(Debug, Clone, Serialize)]
pub struct JobEntry {
    #[serde(flatten)]
    pub submission: SubmissionRecord,
    pub inputs: Vec<String>,
}

/// What a dispatch run did
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub total_files: usize,
    pub bucket_size: usize,
    pub setup: RunOutcome,
    pub jobs: Vec<JobEntry>,
}

impl DispatchReport {
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Jobs whose submission command failed or could not start
    pub fn failed_jobs(&self) -> Vec<&JobEntry> {
        self.jobs
            .iter()
            .filter(|job| job.submission.outcome.is_failure())
            .collect()
    }

    /// True if setup or any submission failed
    pub fn has_failures(&self) -> bool {
        self.setup.is_failure() || !self.failed_jobs().is_empty()
    }

    /// One-line summary printed at the end of a run
    pub fn summary(&self) -> String {
        format!(
            "Submitted {} files in {} jobs",
            self.total_files,
            self.job_count()
        )
    }

    /// Write `dispatch.json` into the run directory
    ///
    /// Returns `None` without touching the filesystem when no job was
    /// produced.
    pub fn write_manifest(
        &self,
        config: &DispatchConfig,
    ) -> Result<Option<PathBuf>, DispatchError> {
        if self.jobs.is_empty() {
            return Ok(None);
        }

        let manifest = Manifest {
            generator: format!("send-limits v{}", env!("CARGO_PKG_VERSION")),
            written_at: Utc::now().to_rfc3339(),
            config,
            report: self,
        };
        let json = serde_json::to_string_pretty(&manifest)?;

        let path = config.run_dir.join(MANIFEST_FILE);
        fs::write(&path, json).map_err(|source| DispatchError::WriteManifest {
            path: path.clone(),
            source,
        })?;

        Ok(Some(path))
    }

    /// Write the manifest, logging instead of failing
    ///
    /// The jobs are already submitted by the time the manifest is written,
    /// so a failure here must not change the outcome of the run.
    pub fn record_manifest(&self, config: &DispatchConfig) -> Option<PathBuf> {
        match self.write_manifest(config) {
            Ok(Some(path)) => {
                info!(path = %path.display(), "wrote run manifest");
                Some(path)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "could not record run manifest");
                None
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub generator: String,
    pub written_at: String,
    pub config: &'a DispatchConfig,
    #[serde(flatten)]
    pub report: &'a DispatchReport,
}
