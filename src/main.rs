use anyhow::{Context, Result, bail};
use clap::Parser;
use send_limits::config::{
    DEFAULT_EXECUTABLE, DEFAULT_FILTER, DEFAULT_INPUT_DIR, DEFAULT_JOB_COUNT, DEFAULT_LOG_PREFIX,
    DEFAULT_RUN_DIR, DEFAULT_SCRIPT_PREFIX, DEFAULT_SETUP_COMMAND, DEFAULT_SUBMIT_COMMAND,
    DEFAULT_WRAPPER,
};
use send_limits::{
    CommandRunner, DispatchConfig, DispatchReport, Dispatcher, DryRunRunner, ProcessRunner,
};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

// CLI
#[derive(Parser, Debug)]
#[command(name = "send-limits")]
#[command(version)]
#[command(
    about = "Split signal workspaces into batch jobs that scan for limits, and submit them",
    long_about = None
)]
struct Cli {
    /// Directory holding the input workspaces
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Only entries whose name contains this are used
    #[arg(long, default_value = DEFAULT_FILTER)]
    filter: String,

    /// Directory the job scripts are written to
    #[arg(long, default_value = DEFAULT_RUN_DIR)]
    run_dir: PathBuf,

    #[arg(long, default_value = DEFAULT_SCRIPT_PREFIX)]
    script_prefix: String,

    /// Target number of batch jobs
    #[arg(short = 'j', long, default_value_t = DEFAULT_JOB_COUNT)]
    jobs: usize,

    /// Executable run once per input file
    #[arg(long, default_value = DEFAULT_EXECUTABLE)]
    executable: String,

    /// Wrapper script passed to the submission command
    #[arg(long, default_value = DEFAULT_WRAPPER)]
    wrapper: String,

    #[arg(long, default_value = DEFAULT_SETUP_COMMAND)]
    setup_command: String,

    #[arg(long, default_value = DEFAULT_SUBMIT_COMMAND)]
    submit_command: String,

    #[arg(long, default_value = DEFAULT_LOG_PREFIX)]
    log_prefix: String,

    /// Write the job scripts but do not run setup or submit anything
    #[arg(long, action)]
    dry_run: bool,

    /// Exit non-zero if setup or any submission fails
    #[arg(long, action)]
    strict: bool,
}

impl Cli {
    fn config(&self) -> DispatchConfig {
        DispatchConfig {
            input_dir: self.input_dir.clone(),
            filter: self.filter.clone(),
            run_dir: self.run_dir.clone(),
            script_prefix: self.script_prefix.clone(),
            job_count: self.jobs,
            executable: self.executable.clone(),
            wrapper: self.wrapper.clone(),
            setup_command: self.setup_command.clone(),
            submit_command: self.submit_command.clone(),
            log_prefix: self.log_prefix.clone(),
        }
    }
}

fn dispatch<R: CommandRunner>(config: DispatchConfig, runner: R) -> Result<DispatchReport> {
    let mut dispatcher = Dispatcher::new(config, runner);
    let report = dispatcher.run().context("Dispatch failed")?;
    report.record_manifest(dispatcher.config());
    Ok(report)
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    let cli = Cli::parse();
    let config = cli.config();

    let report = if cli.dry_run {
        dispatch(config, DryRunRunner)?
    } else {
        dispatch(config, ProcessRunner)?
    };

    for job in report.failed_jobs() {
        warn!(job = job.submission.job, outcome = ?job.submission.outcome, "job was not submitted");
    }

    println!("\n{}\n", report.summary());

    if cli.strict && report.has_failures() {
        bail!(
            "{} of {} submissions failed (setup: {:?})",
            report.failed_jobs().len(),
            report.job_count(),
            report.setup
        );
    }

    Ok(())
}
