//! Test-case harness.
//!
//! Runs `{message, expected, actual}` triples through [`assert_equal_with`]
//! and collects the failure lines instead of propagating them. Each case is
//! an independent comparison.

pub mod cases;
pub mod demo;

use crate::assert::assert_equal_with;
use crate::model::Value;
use crate::options::CompareOptions;
use crate::{log_op_end, log_op_start};
use deepcheck_core_types::RunId;
use serde::Serialize;

/// One assertion to run.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub message: String,
    pub expected: Value,
    pub actual: Value,
}

impl TestCase {
    pub fn new(message: impl Into<String>, expected: Value, actual: Value) -> Self {
        Self {
            message: message.into(),
            expected,
            actual,
        }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarnessReport {
    pub run_id: RunId,
    /// Number of cases executed
    pub total: usize,
    /// Failure lines, in case order
    pub failures: Vec<String>,
}

impl HarnessReport {
    pub fn passed(&self) -> usize {
        self.total - self.failures.len()
    }

    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run one case, returning its failure line if the values differ.
pub fn run_case(case: &TestCase, options: &CompareOptions) -> Option<String> {
    assert_equal_with(&case.message, &case.expected, &case.actual, options)
        .err()
        .map(|failure| failure.into_message())
}

/// Run every case and collect the failure lines.
pub fn run_all(cases: &[TestCase], options: &CompareOptions) -> HarnessReport {
    let run_id = RunId::new();
    log_op_start!("run_cases", run_id = run_id.as_str(), case_count = cases.len());
    let start = std::time::Instant::now();

    let failures: Vec<String> = cases
        .iter()
        .filter_map(|case| run_case(case, options))
        .collect();

    log_op_end!(
        "run_cases",
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = run_id.as_str(),
        case_count = cases.len(),
        failure_count = failures.len()
    );

    HarnessReport {
        run_id,
        total: cases.len(),
        failures,
    }
}
