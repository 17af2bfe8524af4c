//! Run command
//!
//! Usage: deepcheck run <CASES> [--output <FILE>] [--format text|json]

use super::{finish, CliResult, Outcome, ReportFormat};
use clap::Args;
use deepcheck_core::harness::cases::load_cases;
use deepcheck_core::{run_all, CompareOptions};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Case file (.yaml, .yml or .json)
    pub cases: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Execute run command
pub fn execute(args: RunArgs, options: &CompareOptions) -> CliResult<Outcome> {
    let cases = load_cases(&args.cases)?;
    let report = run_all(&cases, options);
    finish(&report, args.format, args.output.as_deref())
}
