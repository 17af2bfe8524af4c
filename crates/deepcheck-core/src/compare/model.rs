//! Comparison outcome types.
//!
//! A comparison either finds the two values equal or stops at the first
//! divergence, returning it together with the traversal trail recorded up
//! to that point.

use crate::model::{Category, Value};
use std::fmt;

/// Kind of container a trail step descended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Array,
    Object,
}

/// Index or property name of one trail step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailKey {
    Index(usize),
    Name(String),
}

impl fmt::Display for TrailKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrailKey::Index(i) => write!(f, "{}", i),
            TrailKey::Name(name) => f.write_str(name),
        }
    }
}

/// One step recorded during recursive descent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailEntry {
    /// Nesting depth of the container the step was taken in (root = 0)
    pub depth: usize,
    pub container: ContainerKind,
    pub key: TrailKey,
}

impl TrailEntry {
    pub fn index(depth: usize, index: usize) -> Self {
        Self {
            depth,
            container: ContainerKind::Array,
            key: TrailKey::Index(index),
        }
    }

    pub fn name(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            container: ContainerKind::Object,
            key: TrailKey::Name(name.into()),
        }
    }
}

/// Append-only log of every step taken by one comparison.
///
/// Depths are not monotonic: steps into earlier sibling subtrees stay in
/// the log after the walk moves on, so the failure path has to be filtered
/// out of it rather than read off directly.
pub type Trail = Vec<TrailEntry>;

/// What kind of difference stopped the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivergenceKind {
    /// Categories differ
    Type,
    /// Array lengths differ
    Array,
    /// A key is present on one side only
    Object,
    /// Two scalars of the same category differ
    Scalar(Category),
}

impl fmt::Display for DivergenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivergenceKind::Type => f.write_str("Type"),
            DivergenceKind::Array => f.write_str("Array"),
            DivergenceKind::Object => f.write_str("Object"),
            DivergenceKind::Scalar(category) => write!(f, "{}", category),
        }
    }
}

/// Which side drove object key iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Expected had at least as many keys as actual
    #[default]
    Normal,
    /// Actual had strictly more keys, so its keys were iterated
    Swapped,
}

/// Payload carried by one side of a divergence.
#[derive(Debug, Clone, PartialEq)]
pub enum Side {
    Category(Category),
    Length(usize),
    Value(Value),
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Category(category) => write!(f, "{}", category),
            Side::Length(len) => write!(f, "{}", len),
            Side::Value(value) => write!(f, "{}", value),
        }
    }
}

/// The first detected structural difference.
#[derive(Debug, Clone, PartialEq)]
pub struct Divergence {
    pub kind: DivergenceKind,
    pub expected: Option<Side>,
    pub actual: Option<Side>,
    pub orientation: Orientation,
}

impl Divergence {
    pub fn type_mismatch(expected: Category, actual: Category) -> Self {
        Self {
            kind: DivergenceKind::Type,
            expected: Some(Side::Category(expected)),
            actual: Some(Side::Category(actual)),
            orientation: Orientation::Normal,
        }
    }

    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self {
            kind: DivergenceKind::Array,
            expected: Some(Side::Length(expected)),
            actual: Some(Side::Length(actual)),
            orientation: Orientation::Normal,
        }
    }

    /// A key missing from the side with fewer keys. Carries no values.
    pub fn missing_key(orientation: Orientation) -> Self {
        Self {
            kind: DivergenceKind::Object,
            expected: None,
            actual: None,
            orientation,
        }
    }

    pub fn scalar(category: Category, expected: &Value, actual: &Value) -> Self {
        Self {
            kind: DivergenceKind::Scalar(category),
            expected: Some(Side::Value(expected.clone())),
            actual: Some(Side::Value(actual.clone())),
            orientation: Orientation::Normal,
        }
    }
}

/// Result of one top-level comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    Equal,
    Diverged {
        divergence: Divergence,
        /// Every step taken up to the divergence
        trail: Trail,
    },
    /// The walk was cut off at the configured nesting limit
    DepthLimitExceeded { limit: usize, trail: Trail },
}

impl Comparison {
    pub fn is_equal(&self) -> bool {
        matches!(self, Comparison::Equal)
    }

    pub fn divergence(&self) -> Option<&Divergence> {
        match self {
            Comparison::Diverged { divergence, .. } => Some(divergence),
            _ => None,
        }
    }

    pub fn trail(&self) -> &[TrailEntry] {
        match self {
            Comparison::Equal => &[],
            Comparison::Diverged { trail, .. } | Comparison::DepthLimitExceeded { trail, .. } => {
                trail
            }
        }
    }
}
