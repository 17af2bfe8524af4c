//! Core types shared across deepcheck facilities
//!
//! This crate provides foundational types used by both the assertion
//! engine and the logging facility:
//!
//! - **Correlation types**: RunId for tagging one harness run
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RunId;
