mod runner;
mod submitter;


pub use runner::{CommandRunner, DryRunRunner, ProcessRunner, RunOutcome};
pub use submitter::{SubmissionRecord, Submitter};
