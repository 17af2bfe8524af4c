//! Structural comparison engine.
//!
//! The core entry point is [`compare_with`], which walks two values in
//! lockstep and stops at the first divergence.

use crate::compare::classify::classify;
use crate::compare::model::{Comparison, Divergence, Orientation, Trail, TrailEntry};
use crate::model::{Object, Value};
use crate::options::{CompareOptions, MAX_ALLOWED_DEPTH};

/// Remaining stack below which the walk switches to a fresh segment.
const RED_ZONE: usize = 100 * 1024;

/// Size of each additional stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Compare two values with default options.
pub fn compare(expected: &Value, actual: &Value) -> Comparison {
    compare_with(expected, actual, &CompareOptions::default())
}

/// Compare two values.
///
/// Every call owns a fresh trail, so repeated or concurrent calls never
/// observe each other's state. `options.max_depth` is capped at
/// [`MAX_ALLOWED_DEPTH`] even when the options were never validated.
pub fn compare_with(expected: &Value, actual: &Value, options: &CompareOptions) -> Comparison {
    let max_depth = options.max_depth.min(MAX_ALLOWED_DEPTH);
    let mut walker = Walker {
        trail: Trail::new(),
        max_depth,
    };

    match walker.walk(expected, actual, 0) {
        Ok(()) => Comparison::Equal,
        Err(Halt::Diverged(divergence)) => {
            tracing::debug!(
                divergence = %divergence.kind,
                trail_len = walker.trail.len(),
                "comparison diverged"
            );
            Comparison::Diverged {
                divergence,
                trail: walker.trail,
            }
        }
        Err(Halt::DepthLimit) => {
            tracing::debug!(limit = max_depth, "comparison hit depth limit");
            Comparison::DepthLimitExceeded {
                limit: max_depth,
                trail: walker.trail,
            }
        }
    }
}

/// Why a walk stopped early.
enum Halt {
    Diverged(Divergence),
    DepthLimit,
}

impl From<Divergence> for Halt {
    fn from(divergence: Divergence) -> Self {
        Halt::Diverged(divergence)
    }
}

struct Walker {
    trail: Trail,
    max_depth: usize,
}

impl Walker {
    fn walk(&mut self, expected: &Value, actual: &Value, depth: usize) -> Result<(), Halt> {
        if depth > self.max_depth {
            return Err(Halt::DepthLimit);
        }
        stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, || {
            self.walk_value(expected, actual, depth)
        })
    }

    fn walk_value(&mut self, expected: &Value, actual: &Value, depth: usize) -> Result<(), Halt> {
        let category = classify(expected, actual)?;

        match (expected, actual) {
            (Value::Array(e), Value::Array(a)) => self.walk_array(e, a, depth),
            (Value::Object(e), Value::Object(a)) => self.walk_object(e, a, depth),
            _ if scalars_equal(expected, actual) => Ok(()),
            _ => Err(Divergence::scalar(category, expected, actual).into()),
        }
    }

    fn walk_array(&mut self, expected: &[Value], actual: &[Value], depth: usize) -> Result<(), Halt> {
        if expected.len() != actual.len() {
            return Err(Divergence::length_mismatch(expected.len(), actual.len()).into());
        }

        for (i, (e, a)) in expected.iter().zip(actual).enumerate() {
            self.trail.push(TrailEntry::index(depth, i));
            self.walk(e, a, depth + 1)?;
        }
        Ok(())
    }

    /// The side with more keys drives iteration; expected wins ties.
    ///
    /// Children are compared as `(bigger, smaller)`, so a swapped walk
    /// reports nested scalar sides swapped as well.
    fn walk_object(&mut self, expected: &Object, actual: &Object, depth: usize) -> Result<(), Halt> {
        let (bigger, smaller, orientation) = if expected.len() >= actual.len() {
            (expected, actual, Orientation::Normal)
        } else {
            (actual, expected, Orientation::Swapped)
        };

        for (key, value) in bigger.iter() {
            self.trail.push(TrailEntry::name(depth, key));
            let other = match smaller.get(key) {
                Some(other) if !key.is_empty() => other,
                _ => return Err(Divergence::missing_key(orientation).into()),
            };
            self.walk(value, other, depth + 1)?;
        }
        Ok(())
    }
}

/// Scalar equality. Numbers use SameValueZero so NaN equals itself.
fn scalars_equal(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(e), Value::Number(a)) => e == a || (e.is_nan() && a.is_nan()),
        _ => expected == actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::model::{ContainerKind, DivergenceKind, Side, TrailKey};
    use crate::model::{Category, Date};

    fn s(v: &str) -> Value {
        Value::from(v)
    }

    #[test]
    fn test_equal_scalars() {
        assert!(compare(&s("abc"), &s("abc")).is_equal());
        assert!(compare(&Value::Undefined, &Value::Undefined).is_equal());
        assert!(compare(&Value::from(f64::NAN), &Value::from(f64::NAN)).is_equal());
        assert!(compare(&Value::from(0.0), &Value::from(-0.0)).is_equal());
    }

    #[test]
    fn test_length_checked_before_elements() {
        let e = Value::array([s("x"), s("b")]);
        let a = Value::array([s("a"), s("b"), s("c")]);
        let result = compare(&e, &a);

        let divergence = result.divergence().unwrap();
        assert_eq!(divergence.kind, DivergenceKind::Array);
        assert_eq!(divergence.expected, Some(Side::Length(2)));
        assert_eq!(divergence.actual, Some(Side::Length(3)));
        assert!(result.trail().is_empty());
    }

    #[test]
    fn test_array_walk_short_circuits() {
        let e = Value::array([s("a"), s("b"), s("c")]);
        let a = Value::array([s("a"), s("x"), s("y")]);
        let result = compare(&e, &a);

        assert_eq!(
            result.divergence().unwrap().kind,
            DivergenceKind::Scalar(Category::String)
        );
        assert_eq!(
            result.trail(),
            &[TrailEntry::index(0, 0), TrailEntry::index(0, 1)]
        );
    }

    #[test]
    fn test_missing_key_normal_orientation() {
        let e = Value::object([("a", Value::from(1)), ("b", Value::from(2))]);
        let a = Value::object([("a", Value::from(1))]);
        let divergence = compare(&e, &a).divergence().cloned().unwrap();

        assert_eq!(divergence.kind, DivergenceKind::Object);
        assert_eq!(divergence.orientation, Orientation::Normal);
        assert!(divergence.expected.is_none());
        assert!(divergence.actual.is_none());
    }

    #[test]
    fn test_extra_key_swaps_orientation() {
        let e = Value::object([("a", Value::from(1))]);
        let a = Value::object([("a", Value::from(1)), ("b", Value::from(2))]);
        let result = compare(&e, &a);

        assert_eq!(result.divergence().unwrap().orientation, Orientation::Swapped);
        let last = result.trail().last().unwrap();
        assert_eq!(last.container, ContainerKind::Object);
        assert_eq!(last.key, TrailKey::Name("b".to_string()));
    }

    #[test]
    fn test_swapped_walk_passes_sides_in_iteration_order() {
        let e = Value::object([("a", Value::from(1))]);
        let a = Value::object([("a", Value::from(2)), ("b", Value::from(3))]);
        let divergence = compare(&e, &a).divergence().cloned().unwrap();

        // actual drives iteration, so its value lands on the expected side
        assert_eq!(divergence.expected, Some(Side::Value(Value::from(2))));
        assert_eq!(divergence.actual, Some(Side::Value(Value::from(1))));
    }

    #[test]
    fn test_empty_key_always_diverges() {
        let e = Value::object([("", Value::from(1))]);
        let a = Value::object([("", Value::from(1))]);
        assert_eq!(
            compare(&e, &a).divergence().unwrap().kind,
            DivergenceKind::Object
        );
    }

    #[test]
    fn test_dates_compare_by_instant() {
        let d1 = Value::Date(Date::from_ymd(2020, 2, 1).unwrap());
        let d2 = Value::Date(Date::from_epoch_millis(1_580_515_200_000));
        let d3 = Value::Date(Date::from_ymd(2021, 3, 1).unwrap());

        assert!(compare(&d1, &d2).is_equal());
        assert_eq!(
            compare(&d1, &d3).divergence().unwrap().kind,
            DivergenceKind::Scalar(Category::Date)
        );
    }

    #[test]
    fn test_bigint_vs_number_is_type() {
        let result = compare(&Value::from(10), &Value::BigInt(10));
        assert_eq!(result.divergence().unwrap().kind, DivergenceKind::Type);
    }

    #[test]
    fn test_depth_limit_stops_walk() {
        let mut nested = Value::from(1);
        for _ in 0..10 {
            nested = Value::array([nested]);
        }
        let options = CompareOptions::default().with_max_depth(4);
        let result = compare_with(&nested, &nested.clone(), &options);

        match result {
            Comparison::DepthLimitExceeded { limit, trail } => {
                assert_eq!(limit, 4);
                assert_eq!(trail.len(), 5);
            }
            other => panic!("expected depth limit, got {:?}", other),
        }
    }

    fn nest_arrays(depth: usize) -> Value {
        let mut v = Value::from(1);
        for _ in 0..depth {
            v = Value::array([v]);
        }
        v
    }

    #[test]
    fn test_deep_walk_grows_small_stack() {
        let expected = nest_arrays(3_000);
        let actual = nest_arrays(3_000);
        let options = CompareOptions::default().with_max_depth(5_000);

        let result = std::thread::scope(|scope| {
            std::thread::Builder::new()
                .stack_size(128 * 1024)
                .spawn_scoped(scope, || compare_with(&expected, &actual, &options))
                .unwrap()
                .join()
                .unwrap()
        });

        assert!(result.is_equal());
    }

    #[test]
    fn test_unvalidated_depth_is_capped() {
        // Building and dropping the values recurses too, so give it room.
        let limit = std::thread::Builder::new()
            .stack_size(64 * 1024 * 1024)
            .spawn(|| {
                let expected = nest_arrays(MAX_ALLOWED_DEPTH + 5);
                let actual = nest_arrays(MAX_ALLOWED_DEPTH + 5);
                let options = CompareOptions::default().with_max_depth(usize::MAX);
                match compare_with(&expected, &actual, &options) {
                    Comparison::DepthLimitExceeded { limit, trail } => {
                        assert_eq!(trail.len(), MAX_ALLOWED_DEPTH + 1);
                        limit
                    }
                    _ => panic!("expected depth limit"),
                }
            })
            .unwrap()
            .join()
            .unwrap();

        assert_eq!(limit, MAX_ALLOWED_DEPTH);
    }

    #[test]
    fn test_depth_limit_not_hit_at_exact_depth() {
        let nested = Value::array([Value::array([Value::from(1)])]);
        let options = CompareOptions::default().with_max_depth(2);
        assert!(compare_with(&nested, &nested.clone(), &options).is_equal());
    }
}
