//! deepcheck Core - Deep-equality assertions with divergence paths
//!
//! This crate compares an expected and an actual value structurally and,
//! when they differ, reports the first divergence with the nested path
//! leading to it (e.g. `propB.propA[1].propB`). It provides:
//! - The comparable value model and its category classification
//! - The structural comparison engine and path reconstruction
//! - Message formatting and the `assert_equal` entry point
//! - A case harness, a built-in reference suite and case-file loading
//! - A tagged JSON codec for values JSON cannot express natively
//! - Structured error and logging facilities

pub mod assert;
pub mod codec;
pub mod compare;
pub mod errors;
pub mod harness;
pub mod logging_facility;
pub mod model;
pub mod options;

// Schema constants referenced by the logging macros
pub use deepcheck_core_types::schema;

// Re-export commonly used types
pub use assert::{assert_equal, assert_equal_with};
pub use compare::{compare, compare_with, Comparison};
pub use errors::{AssertionFailure, ExError, ExErrorKind, Result};
pub use harness::{run_all, run_case, HarnessReport, TestCase};
pub use model::{Category, Date, Value};
pub use options::CompareOptions;
