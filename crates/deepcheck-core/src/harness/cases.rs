//! Case file loading.
//!
//! A case file is a YAML (`.yaml`/`.yml`) or JSON document:
//!
//! ```yaml
//! cases:
//!   - message: Test 01
//!     expected: abc
//!     actual: abc
//!   - message: Test 13
//!     expected: { $date: "2020-02-01" }
//!     actual: { $date: "2021-03-01" }
//! ```
//!
//! `expected`/`actual` use the tagged encoding from [`crate::codec`].

use crate::codec::value_from_json;
use crate::errors::{ExError, ExErrorKind, Result};
use crate::harness::TestCase;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CaseFile {
    cases: Vec<RawCase>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCase {
    message: String,
    expected: serde_json::Value,
    actual: serde_json::Value,
}

/// Document syntax of a case file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFormat {
    Json,
    Yaml,
}

impl CaseFormat {
    /// Pick the format from a file extension; anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CaseFormat::Json,
            _ => CaseFormat::Yaml,
        }
    }
}

/// Load cases from a file
pub fn load_cases(path: &Path) -> Result<Vec<TestCase>> {
    let content = fs::read_to_string(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("load_cases")
            .with_path(path.display().to_string())
            .with_message(format!("Failed to read case file: {}", e))
    })?;

    parse_cases(&content, CaseFormat::from_path(path))
        .map_err(|e| e.with_path(path.display().to_string()))
}

/// Parse cases from a string
pub fn parse_cases(content: &str, format: CaseFormat) -> Result<Vec<TestCase>> {
    let file: CaseFile = match format {
        CaseFormat::Json => serde_json::from_str(content)
            .map_err(|e| invalid_case(format!("JSON parse error: {}", e)))?,
        CaseFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| invalid_case(format!("YAML parse error: {}", e)))?,
    };

    file.cases
        .into_iter()
        .enumerate()
        .map(|(i, raw)| -> Result<TestCase> {
            let decode = |json: &serde_json::Value, side: &str| {
                value_from_json(json).map_err(|e| {
                    invalid_case(format!("case {} ({}): invalid {}", i, raw.message, side))
                        .with_source(e)
                })
            };
            let expected = decode(&raw.expected, "expected")?;
            let actual = decode(&raw.actual, "actual")?;
            Ok(TestCase::new(raw.message.clone(), expected, actual))
        })
        .collect()
}

fn invalid_case(reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::InvalidCase)
        .with_op("load_cases")
        .with_message(reason)
}
