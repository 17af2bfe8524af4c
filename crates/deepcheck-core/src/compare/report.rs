//! Human-readable divergence messages.
//!
//! Combines a divergence with its reconstructed path into a single line:
//! `"{message}: {detail}"`. Every variant drops the path clause when the
//! divergence sits at the root.

use crate::compare::model::{Divergence, DivergenceKind, Orientation, Side};
use crate::model::{Category, Value};
use crate::options::DEFAULT_DATE_FORMAT;

/// Format the full failure line using the default date pattern.
pub fn format_message(user_message: &str, divergence: &Divergence, path: &str) -> String {
    format_message_with(user_message, divergence, path, DEFAULT_DATE_FORMAT)
}

/// Format the full failure line, rendering dates with `date_format`.
pub fn format_message_with(
    user_message: &str,
    divergence: &Divergence,
    path: &str,
    date_format: &str,
) -> String {
    format!(
        "{}: {}",
        user_message,
        format_detail(divergence, path, date_format)
    )
}

/// Format the detail part of a failure line.
pub fn format_detail(divergence: &Divergence, path: &str, date_format: &str) -> String {
    let expected = render_side(divergence.expected.as_ref(), date_format);
    let actual = render_side(divergence.actual.as_ref(), date_format);

    match (divergence.kind, path.is_empty()) {
        (DivergenceKind::Array, false) => {
            format!("Expected {} array length {} but found {}", path, expected, actual)
        }
        (DivergenceKind::Array, true) => {
            format!("Expected array length {} but found {}", expected, actual)
        }
        (DivergenceKind::Object, _) => {
            let subject = if path.is_empty() { "property" } else { path };
            match divergence.orientation {
                Orientation::Normal => format!("Expected {} but was not found", subject),
                Orientation::Swapped => format!("Found {} but was not expected", subject),
            }
        }
        (DivergenceKind::Type, false) => {
            format!("Expected {} type {} but found type {}", path, expected, actual)
        }
        (DivergenceKind::Type, true) => {
            format!("Expected type {} but found type {}", expected, actual)
        }
        (DivergenceKind::Scalar(Category::Date), false) => {
            format!("Expected {} date {} but found {}", path, expected, actual)
        }
        (DivergenceKind::Scalar(Category::Date), true) => {
            format!("Expected date {} but found {}", expected, actual)
        }
        (DivergenceKind::Scalar(Category::String), false) => {
            format!("Expected {} \"{}\" but found \"{}\"", path, expected, actual)
        }
        (DivergenceKind::Scalar(Category::String), true) => {
            format!("Expected \"{}\" but found \"{}\"", expected, actual)
        }
        (DivergenceKind::Scalar(_), false) => {
            format!("Expected {} {} but found {}", path, expected, actual)
        }
        (DivergenceKind::Scalar(_), true) => format!("Expected {} but found {}", expected, actual),
    }
}

fn render_side(side: Option<&Side>, date_format: &str) -> String {
    match side {
        Some(Side::Value(Value::Date(date))) => date.format(date_format),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Date;

    #[test]
    fn test_array_length_with_and_without_path() {
        let d = Divergence::length_mismatch(2, 3);
        assert_eq!(
            format_message("Test 04", &d, ""),
            "Test 04: Expected array length 2 but found 3"
        );
        assert_eq!(
            format_message("T", &d, "a.b"),
            "T: Expected a.b array length 2 but found 3"
        );
    }

    #[test]
    fn test_object_orientation_wording() {
        let normal = Divergence::missing_key(Orientation::Normal);
        let swapped = Divergence::missing_key(Orientation::Swapped);
        assert_eq!(
            format_message("Test 08", &normal, "propB.propC"),
            "Test 08: Expected propB.propC but was not found"
        );
        assert_eq!(
            format_message("Test 14", &swapped, "propB.propC"),
            "Test 14: Found propB.propC but was not expected"
        );
        assert_eq!(
            format_message("T", &normal, ""),
            "T: Expected property but was not found"
        );
    }

    #[test]
    fn test_type_wording() {
        let d = Divergence::type_mismatch(Category::Null, Category::Object);
        assert_eq!(
            format_message("Test 09", &d, ""),
            "Test 09: Expected type Null but found type Object"
        );
        assert_eq!(
            format_message("T", &d, "x[2]"),
            "T: Expected x[2] type Null but found type Object"
        );
    }

    #[test]
    fn test_string_values_are_quoted() {
        let d = Divergence::scalar(Category::String, &Value::from("b"), &Value::from("c"));
        assert_eq!(
            format_message("Test 07", &d, "propB.propA[1].propB"),
            "Test 07: Expected propB.propA[1].propB \"b\" but found \"c\""
        );
        assert_eq!(
            format_message("Test 02", &d, ""),
            "Test 02: Expected \"b\" but found \"c\""
        );
    }

    #[test]
    fn test_dates_use_pattern() {
        let d = Divergence::scalar(
            Category::Date,
            &Value::Date(Date::from_ymd(2020, 2, 1).unwrap()),
            &Value::Date(Date::from_ymd(2021, 3, 1).unwrap()),
        );
        assert_eq!(
            format_message("Test 13", &d, ""),
            "Test 13: Expected date 2/1/2020 but found 3/1/2021"
        );
        assert_eq!(
            format_message_with("T", &d, "when", "%Y-%m-%d"),
            "T: Expected when date 2020-02-01 but found 2021-03-01"
        );
    }

    #[test]
    fn test_other_scalars_render_plainly() {
        let nums = Divergence::scalar(Category::Number, &Value::from(f64::NAN), &Value::from(f64::INFINITY));
        assert_eq!(format_message("Test 20", &nums, ""), "Test 20: Expected NaN but found Infinity");

        let bools = Divergence::scalar(Category::Boolean, &Value::from(false), &Value::from(true));
        assert_eq!(
            format_message("Test 16", &bools, "flag"),
            "Test 16: Expected flag false but found true"
        );
    }
}
