//! Assertion entry point with boundary logging.
//!
//! ## Logging Ownership
//!
//! `assert_equal_with` owns lifecycle logging for one assertion:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The comparison engine below it uses only `tracing::debug!()`.

use crate::compare::{compare_with, format_message_with, reconstruct_path, Comparison};
use crate::errors::AssertionFailure;
use crate::model::Value;
use crate::options::CompareOptions;
use crate::{log_op_end, log_op_error, log_op_start};

/// Assert that `actual` is structurally equal to `expected`.
///
/// Returns `Ok(())` when the values are equal; otherwise an
/// [`AssertionFailure`] carrying `"{message}: {detail}"`.
///
/// # Example
///
/// ```
/// use deepcheck_core::{assert_equal, Value};
///
/// let err = assert_equal(
///     "Test 04",
///     &Value::array([Value::from("a"), Value::from("b")]),
///     &Value::array([Value::from("a"), Value::from("b"), Value::from("c")]),
/// )
/// .unwrap_err();
/// assert_eq!(err.to_string(), "Test 04: Expected array length 2 but found 3");
/// ```
pub fn assert_equal(
    message: &str,
    expected: &Value,
    actual: &Value,
) -> Result<(), AssertionFailure> {
    assert_equal_with(message, expected, actual, &CompareOptions::default())
}

/// [`assert_equal`] with explicit options.
pub fn assert_equal_with(
    message: &str,
    expected: &Value,
    actual: &Value,
    options: &CompareOptions,
) -> Result<(), AssertionFailure> {
    log_op_start!("assert_equal", label = message);
    let start = std::time::Instant::now();

    let result = match compare_with(expected, actual, options) {
        Comparison::Equal => Ok(()),
        Comparison::Diverged { divergence, trail } => {
            let path = reconstruct_path(&trail);
            Err(AssertionFailure::mismatch(format_message_with(
                message,
                &divergence,
                &path,
                &options.date_format,
            )))
        }
        Comparison::DepthLimitExceeded { limit, trail } => {
            let path = reconstruct_path(&trail);
            Err(AssertionFailure::depth_limit(format!(
                "{}: Nesting depth limit of {} exceeded at {}",
                message, limit, path
            )))
        }
    };

    match &result {
        Ok(()) => {
            log_op_end!(
                "assert_equal",
                duration_ms = start.elapsed().as_millis() as u64,
                label = message
            );
        }
        Err(failure) => {
            log_op_error!(
                "assert_equal",
                failure.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                label = message
            );
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    #[test]
    fn test_equal_values_pass() {
        let v = Value::array([Value::from("a"), Value::from("b"), Value::from("c")]);
        assert!(assert_equal("Test 05", &v, &v.clone()).is_ok());
    }

    #[test]
    fn test_failure_message_is_prefixed() {
        let err = assert_equal("Test 15", &Value::from(12), &Value::from(23)).unwrap_err();
        assert_eq!(err.message(), "Test 15: Expected 12 but found 23");
        assert_eq!(err.kind(), ExErrorKind::AssertionFailed);
    }

    #[test]
    fn test_depth_limit_is_reported_as_failure() {
        let deep = Value::array([Value::array([Value::array([Value::from(1)])])]);
        let options = CompareOptions::default().with_max_depth(1);
        let err = assert_equal_with("deep", &deep, &deep.clone(), &options).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::DepthLimitExceeded);
        assert_eq!(err.message(), "deep: Nesting depth limit of 1 exceeded at [0][0]");
    }
}
