pub mod compare;
pub mod demo;
pub mod run;

use clap::ValueEnum;
use deepcheck_core::{CompareOptions, HarnessReport};
use std::path::Path;

pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Whether the command's assertions held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

impl Outcome {
    fn of(report: &HarnessReport) -> Self {
        if report.all_passed() {
            Outcome::Passed
        } else {
            Outcome::Failed
        }
    }
}

/// Report rendering for `run` and `demo`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One failure line per failing case
    Text,
    /// The whole report as JSON
    Json,
}

/// Options from `--config`, or the defaults.
pub fn load_options(config: Option<&Path>) -> CliResult<CompareOptions> {
    match config {
        Some(path) => Ok(CompareOptions::from_path(path)?),
        None => Ok(CompareOptions::default()),
    }
}

fn render_report(report: &HarnessReport, format: ReportFormat) -> CliResult<String> {
    match format {
        ReportFormat::Text => Ok(report
            .failures
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()),
        ReportFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(report)?)),
    }
}

/// Write a rendered report to `output`, or stdout when absent.
fn emit(rendered: &str, output: Option<&Path>) -> CliResult<()> {
    if let Some(output_path) = output {
        std::fs::write(output_path, rendered)?;
        println!("✓ Report written to {}", output_path.display());
    } else {
        print!("{}", rendered);
    }
    Ok(())
}

/// Render, emit, and classify a finished run.
pub fn finish(
    report: &HarnessReport,
    format: ReportFormat,
    output: Option<&Path>,
) -> CliResult<Outcome> {
    emit(&render_report(report, format)?, output)?;
    Ok(Outcome::of(report))
}
