//! Comparable value model.
//!
//! [`Value`] covers the data kinds the comparator understands: primitives,
//! dates, arrays, insertion-ordered objects, and two opaque kinds (function
//! references and error values) that only ever compare as scalars.

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use std::fmt::{self, Write as _};

/// Any comparable datum.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Date(Date),
    Array(Vec<Value>),
    Object(Object),
    Function(FunctionRef),
    Error(ErrorValue),
}

impl Value {
    /// Build an object value from `(key, value)` pairs, preserving order.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build an array value.
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(items.into_iter().collect())
    }

    /// Build a function reference value.
    pub fn function(name: impl Into<String>) -> Self {
        Value::Function(FunctionRef::new(name))
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::BigInt(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Date> for Value {
    fn from(d: Date) -> Self {
        Value::Date(d)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

/// Renders a value the way it reads inside an assertion message.
///
/// Scalars render like their source-level literal (`NaN`, `Infinity`,
/// `12`, `undefined`); containers render in their coerced string form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::BigInt(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{}", d),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    match item {
                        Value::Undefined | Value::Null => {}
                        other => write!(f, "{}", other)?,
                    }
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
            Value::Function(func) => write!(f, "{}", func),
            Value::Error(err) => write!(f, "{}", err),
        }
    }
}

/// Render a float with source-level number formatting.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{:e}", n);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }
    format!("{}", n)
}

/// An instant in time with millisecond precision.
///
/// Equality is by represented instant, never by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    epoch_ms: i64,
}

impl Date {
    pub fn from_epoch_millis(epoch_ms: i64) -> Self {
        Self { epoch_ms }
    }

    /// Midnight UTC on the given calendar day. `month` is 1-based.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
        Some(Self::from_epoch_millis(naive.and_utc().timestamp_millis()))
    }

    pub fn epoch_millis(&self) -> i64 {
        self.epoch_ms
    }

    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.epoch_ms)
    }

    /// Render with a strftime pattern in UTC.
    ///
    /// Falls back to RFC 3339 if the pattern cannot be rendered, and to the
    /// raw millisecond count if the instant is outside chrono's range.
    pub fn format(&self, pattern: &str) -> String {
        let Some(dt) = self.to_datetime() else {
            return format!("{}ms", self.epoch_ms);
        };
        let mut out = String::new();
        if write!(out, "{}", dt.format(pattern)).is_err() {
            return dt.to_rfc3339();
        }
        out
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
            None => write!(f, "Invalid Date"),
        }
    }
}

/// Ordered mapping from string keys to values.
///
/// Keys keep their insertion order, which is the order the comparator
/// enumerates them in. Re-inserting a key replaces the value in place.
/// Lookups and inserts are O(1), so wide objects stay linear to build,
/// decode and compare.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    entries: IndexMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; returns the previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A named callable (function or class constructor).
///
/// Two references are the same callable when their names match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionRef {
    name: String,
}

impl FunctionRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str("[Function (anonymous)]")
        } else {
            write!(f, "[Function: {}]", self.name)
        }
    }
}

/// An error object: a name plus a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorValue {
    name: String,
    message: String,
}

impl ErrorValue {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}
