use crate::compare::model::Divergence;
use crate::model::{Category, Value};

/// Classify two values, failing with a `Type` divergence when their
/// categories differ.
pub fn classify(a: &Value, b: &Value) -> Result<Category, Divergence> {
    let a_category = Category::of(a);
    let b_category = Category::of(b);
    if a_category == b_category {
        Ok(a_category)
    } else {
        Err(Divergence::type_mismatch(a_category, b_category))
    }
}
