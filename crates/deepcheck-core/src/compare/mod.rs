//! Structural comparison.
//!
//! Walks two values in lockstep, stops at the first divergence, and turns
//! the divergence plus its traversal trail into a one-line message.
//!
//! ## Entry point
//!
//! ```
//! use deepcheck_core::compare::{compare, format_message, reconstruct_path, Comparison};
//! use deepcheck_core::Value;
//!
//! let expected = Value::object([("a", Value::array([Value::from(1), Value::from(2)]))]);
//! let actual = Value::object([("a", Value::array([Value::from(1), Value::from(3)]))]);
//!
//! if let Comparison::Diverged { divergence, trail } = compare(&expected, &actual) {
//!     let path = reconstruct_path(&trail);
//!     assert_eq!(path, "a[1]");
//!     assert_eq!(
//!         format_message("check", &divergence, &path),
//!         "check: Expected a[1] 2 but found 3"
//!     );
//! }
//! ```
//!
//! ## Guarantees
//!
//! - **First divergence only**: the walk short-circuits; siblings after the
//!   divergence are never visited.
//! - **No shared state**: each call owns its trail.
//! - **Bounded recursion**: nesting deeper than `CompareOptions::max_depth`
//!   ends the walk with `Comparison::DepthLimitExceeded`.

pub mod classify;
pub mod engine;
pub mod model;
pub mod path;
pub mod report;

pub use classify::classify;
pub use engine::{compare, compare_with};
pub use model::{
    Comparison, ContainerKind, Divergence, DivergenceKind, Orientation, Side, Trail, TrailEntry,
    TrailKey,
};
pub use path::reconstruct_path;
pub use report::{format_detail, format_message, format_message_with};
