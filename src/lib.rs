// Public API exports
pub mod bucket;
pub mod config;
pub mod dispatch;
pub mod enumerate;
pub mod error;
pub mod script;
pub mod submit;

// Re-export main types for convenience
pub use bucket::{Bucket, BucketPlan, bucket_size, plan_buckets};
pub use config::DispatchConfig;
pub use dispatch::{DispatchReport, Dispatcher, JobEntry};
pub use enumerate::list_inputs;
pub use error::DispatchError;
pub use script::{GeneratedScript, ScriptTemplate, ScriptWriter};
pub use submit::{
    CommandRunner, DryRunRunner, ProcessRunner, RunOutcome, SubmissionRecord, Submitter,
};
