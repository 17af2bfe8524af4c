//! Compare command
//!
//! Usage: deepcheck compare <EXPECTED> <ACTUAL> [--message <LABEL>]
//!
//! Each file holds one JSON value in the tagged encoding of
//! `deepcheck_core::codec`.

use super::{CliResult, Outcome};
use clap::Args;
use deepcheck_core::codec::value_from_json;
use deepcheck_core::{assert_equal_with, CompareOptions, ExError, ExErrorKind, Value};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// JSON file holding the expected value
    pub expected: PathBuf,

    /// JSON file holding the actual value
    pub actual: PathBuf,

    /// Label prefixed to the failure line
    #[arg(short, long, default_value = "compare")]
    pub message: String,
}

/// Execute compare command
pub fn execute(args: CompareArgs, options: &CompareOptions) -> CliResult<Outcome> {
    let expected = read_value(&args.expected)?;
    let actual = read_value(&args.actual)?;

    match assert_equal_with(&args.message, &expected, &actual, options) {
        Ok(()) => {
            println!("ok");
            Ok(Outcome::Passed)
        }
        Err(failure) => {
            println!("{}", failure);
            Ok(Outcome::Failed)
        }
    }
}

fn read_value(path: &Path) -> Result<Value, ExError> {
    let file = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("read_value")
            .with_path(file.clone())
            .with_message(format!("Failed to read value file: {}", e))
    })?;
    let json: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| ExError::from(e).with_op("read_value").with_path(file.clone()))?;

    value_from_json(&json).map_err(|e| {
        ExError::new(ExErrorKind::InvalidValue)
            .with_op("read_value")
            .with_path(file)
            .with_message("value file holds an invalid tagged value")
            .with_source(e)
    })
}
