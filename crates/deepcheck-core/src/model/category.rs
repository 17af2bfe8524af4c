use crate::model::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed classification of a value's structural kind.
///
/// Two values are only comparable beyond their kind when their categories
/// match exactly; an `Array` never matches an `Object`, and `Number` never
/// matches `BigInt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Array,
    Object,
    Date,
    String,
    Number,
    Boolean,
    Undefined,
    Null,
    BigInt,
    Function,
    Error,
}

impl Category {
    /// Derive the category of a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Undefined => Category::Undefined,
            Value::Null => Category::Null,
            Value::Boolean(_) => Category::Boolean,
            Value::Number(_) => Category::Number,
            Value::BigInt(_) => Category::BigInt,
            Value::String(_) => Category::String,
            Value::Date(_) => Category::Date,
            Value::Array(_) => Category::Array,
            Value::Object(_) => Category::Object,
            Value::Function(_) => Category::Function,
            Value::Error(_) => Category::Error,
        }
    }

    /// The tag name used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Array => "Array",
            Category::Object => "Object",
            Category::Date => "Date",
            Category::String => "String",
            Category::Number => "Number",
            Category::Boolean => "Boolean",
            Category::Undefined => "Undefined",
            Category::Null => "Null",
            Category::BigInt => "BigInt",
            Category::Function => "Function",
            Category::Error => "Error",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
