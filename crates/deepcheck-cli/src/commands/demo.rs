//! Demo command
//!
//! Usage: deepcheck demo [--output <FILE>] [--format text|json]

use super::{finish, CliResult, Outcome, ReportFormat};
use clap::Args;
use deepcheck_core::harness::demo::demo_cases;
use deepcheck_core::{run_all, CompareOptions};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Execute demo command
pub fn execute(args: DemoArgs, options: &CompareOptions) -> CliResult<Outcome> {
    let report = run_all(&demo_cases(), options);
    finish(&report, args.format, args.output.as_deref())
}
