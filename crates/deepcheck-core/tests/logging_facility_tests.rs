#![allow(clippy::unwrap_used, clippy::expect_used)]

use deepcheck_core::errors::AssertionFailure;
use deepcheck_core::harness::TestCase;
use deepcheck_core::logging_facility::test_capture::init_test_capture;
use deepcheck_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_CASE_COUNT, FIELD_DIVERGENCE,
    FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_FAILURE_COUNT, FIELD_LABEL,
    FIELD_RUN_ID,
};
use deepcheck_core::{assert_equal, log_op_end, log_op_error, log_op_start, run_all};
use deepcheck_core::{CompareOptions, Value};

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_1";

    log_op_end!(op_name, duration_ms = 42);

    let end = capture
        .find(|e| e.is(op_name, EVENT_END))
        .expect("Should have end event");
    assert_eq!(end.field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_records_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_2";

    let err = AssertionFailure::depth_limit("deep: Nesting depth limit of 4 exceeded at [0]");
    log_op_error!(op_name, err, duration_ms = 3);

    let error_event = capture
        .find(|e| e.is(op_name, EVENT_END_ERROR))
        .expect("Should have error event");
    assert_eq!(error_event.field(FIELD_ERR_CODE), Some("ERR_DEPTH_LIMIT"));
    assert_eq!(error_event.field(FIELD_ERR_KIND), Some("DepthLimitExceeded"));
}

#[test]
fn test_passing_assertion_logs_start_and_end() {
    let capture = init_test_capture();
    let label = "logging pass unique_3";

    assert_equal(label, &Value::from("abc"), &Value::from("abc")).unwrap();

    let mine = |event: &str| {
        capture.count_events(|e| e.is("assert_equal", event) && e.field(FIELD_LABEL) == Some(label))
    };
    assert_eq!(mine(EVENT_START), 1);
    assert_eq!(mine(EVENT_END), 1);
    assert_eq!(mine(EVENT_END_ERROR), 0);
}

#[test]
fn test_failing_assertion_logs_error_code() {
    let capture = init_test_capture();
    let label = "logging fail unique_4";

    let _ = assert_equal(label, &Value::from(12), &Value::from(23));

    let error_event = capture
        .find(|e| e.is("assert_equal", EVENT_END_ERROR) && e.field(FIELD_LABEL) == Some(label))
        .expect("Should have error event");
    assert_eq!(error_event.field(FIELD_ERR_CODE), Some("ERR_ASSERTION_FAILED"));
    assert!(capture
        .find(|e| e.is("assert_equal", EVENT_END) && e.field(FIELD_LABEL) == Some(label))
        .is_none());
}

#[test]
fn test_run_cases_reports_counts_under_one_run_id() {
    let capture = init_test_capture();
    let cases = vec![
        TestCase::new("run unique_5 a", Value::from(1), Value::from(1)),
        TestCase::new("run unique_5 b", Value::from(1), Value::from(2)),
    ];

    let report = run_all(&cases, &CompareOptions::default());
    let run_id = report.run_id.as_str();

    let start = capture
        .find(|e| e.is("run_cases", EVENT_START) && e.field(FIELD_RUN_ID) == Some(run_id))
        .expect("Should have run start");
    assert_eq!(start.field(FIELD_CASE_COUNT), Some("2"));

    let end = capture
        .find(|e| e.is("run_cases", EVENT_END) && e.field(FIELD_RUN_ID) == Some(run_id))
        .expect("Should have run end");
    assert_eq!(end.field(FIELD_FAILURE_COUNT), Some("1"));
    assert!(end.field(FIELD_DURATION_MS).is_some());
}

#[test]
fn test_start_macro_with_extra_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_6";

    log_op_start!(op_name, label = "x", case_count = 7);

    let start = capture
        .find(|e| e.is(op_name, EVENT_START))
        .expect("Should have start event");
    assert_eq!(start.field("label"), Some("x"));
    assert_eq!(start.field(FIELD_CASE_COUNT), Some("7"));
    assert!(start
        .component
        .as_deref()
        .is_some_and(|c| c.starts_with("logging_facility_tests")));
}

#[test]
fn test_engine_records_divergence_kind_at_debug() {
    let capture = init_test_capture();

    let _ = assert_equal(
        "engine debug unique_7",
        &Value::BigInt(54740992),
        &Value::BigInt(90071992),
    );

    let debug_event = capture
        .find(|e| e.field(FIELD_DIVERGENCE) == Some("BigInt"))
        .expect("Should have engine divergence event");
    assert_eq!(debug_event.level, tracing::Level::DEBUG);
    assert!(debug_event.op.is_none());
}
