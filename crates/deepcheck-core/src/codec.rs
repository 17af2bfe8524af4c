//! JSON encoding of comparable values.
//!
//! Plain JSON maps onto the natural variants; object keys keep document
//! order. Values JSON cannot express use single-key tagged objects:
//!
//! | Value | Encoding |
//! |---|---|
//! | undefined | `{"$undefined": null}` |
//! | date | `{"$date": "2020-02-01T00:00:00Z"}`, `{"$date": "2020-02-01"}` or `{"$date": 1580515200000}` |
//! | bigint | `{"$bigint": "90071992"}` |
//! | NaN / ±Infinity / -0 | `{"$number": "NaN"}` |
//! | function | `{"$function": "CustomClass"}` |
//! | error | `{"$error": {"name": "TypeError", "message": "boom"}}` or `{"$error": "boom"}` |
//! | object whose only key starts with `$` | `{"$object": {"$key": 1}}` |
//!
//! BigInt values are held as `i128`; a `$bigint` outside
//! `-2^127 ..= 2^127 - 1` is rejected as `InvalidValue` rather than compared.

use crate::errors::{ExError, ExErrorKind, Result};
use crate::model::{Date, ErrorValue, FunctionRef, Object, Value};
use chrono::{DateTime, NaiveDate, SecondsFormat};
use serde_json::{Map, Number, Value as Json};

const TAG_UNDEFINED: &str = "$undefined";
const TAG_DATE: &str = "$date";
const TAG_BIGINT: &str = "$bigint";
const TAG_NUMBER: &str = "$number";
const TAG_FUNCTION: &str = "$function";
const TAG_ERROR: &str = "$error";
const TAG_OBJECT: &str = "$object";

/// Decode a JSON document into a [`Value`].
///
/// # Errors
///
/// - `InvalidValue`: an unknown `$` tag, or a tag with a malformed payload.
///   The error's path points at the offending node.
pub fn value_from_json(json: &Json) -> Result<Value> {
    decode(json, "")
}

/// Encode a [`Value`] as JSON, using tags where plain JSON falls short.
pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Undefined => tagged(TAG_UNDEFINED, Json::Null),
        Value::Null => Json::Null,
        Value::Boolean(b) => Json::Bool(*b),
        Value::Number(n) => encode_number(*n),
        Value::BigInt(n) => tagged(TAG_BIGINT, Json::String(n.to_string())),
        Value::String(s) => Json::String(s.clone()),
        Value::Date(d) => match d.to_datetime() {
            Some(dt) => tagged(
                TAG_DATE,
                Json::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            ),
            None => tagged(TAG_DATE, Json::from(d.epoch_millis())),
        },
        Value::Array(items) => Json::Array(items.iter().map(value_to_json).collect()),
        Value::Object(object) => {
            let map: Map<String, Json> = object
                .iter()
                .map(|(k, v)| (k.to_string(), value_to_json(v)))
                .collect();
            let needs_escape = object.len() == 1 && object.keys().all(|k| k.starts_with('$'));
            if needs_escape {
                tagged(TAG_OBJECT, Json::Object(map))
            } else {
                Json::Object(map)
            }
        }
        Value::Function(func) => tagged(TAG_FUNCTION, Json::String(func.name().to_string())),
        Value::Error(err) => {
            let mut payload = Map::new();
            payload.insert("name".to_string(), Json::String(err.name().to_string()));
            payload.insert("message".to_string(), Json::String(err.message().to_string()));
            tagged(TAG_ERROR, Json::Object(payload))
        }
    }
}

fn tagged(tag: &str, payload: Json) -> Json {
    let mut map = Map::new();
    map.insert(tag.to_string(), payload);
    Json::Object(map)
}

fn encode_number(n: f64) -> Json {
    if n.is_nan() {
        return tagged(TAG_NUMBER, Json::String("NaN".to_string()));
    }
    if n.is_infinite() {
        let name = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return tagged(TAG_NUMBER, Json::String(name.to_string()));
    }
    if n == 0.0 && n.is_sign_negative() {
        return tagged(TAG_NUMBER, Json::String("-0".to_string()));
    }
    if n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 {
        return Json::from(n as i64);
    }
    Number::from_f64(n).map(Json::Number).unwrap_or(Json::Null)
}

fn decode(json: &Json, path: &str) -> Result<Value> {
    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Boolean(*b)),
        Json::Number(n) => n
            .as_f64()
            .map(Value::Number)
            .ok_or_else(|| invalid(path, format!("number out of range: {}", n))),
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| decode(item, &format!("{}[{}]", path, i)))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Json::Object(map) => match single_tag(map) {
            Some((tag, payload)) => decode_tagged(tag, payload, path),
            None => decode_object(map, path),
        },
    }
}

fn single_tag(map: &Map<String, Json>) -> Option<(&str, &Json)> {
    if map.len() != 1 {
        return None;
    }
    map.iter()
        .next()
        .filter(|(k, _)| k.starts_with('$'))
        .map(|(k, v)| (k.as_str(), v))
}

fn decode_object(map: &Map<String, Json>, path: &str) -> Result<Value> {
    let mut object = Object::new();
    for (key, item) in map {
        let child_path = if path.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", path, key)
        };
        object.insert(key.clone(), decode(item, &child_path)?);
    }
    Ok(Value::Object(object))
}

fn decode_tagged(tag: &str, payload: &Json, path: &str) -> Result<Value> {
    match tag {
        TAG_UNDEFINED => Ok(Value::Undefined),
        TAG_DATE => decode_date(payload, path).map(Value::Date),
        TAG_BIGINT => decode_bigint(payload, path).map(Value::BigInt),
        TAG_NUMBER => decode_special_number(payload, path).map(Value::Number),
        TAG_FUNCTION => match payload {
            Json::String(name) => Ok(Value::Function(FunctionRef::new(name.clone()))),
            _ => Err(invalid(path, "$function payload must be a string name")),
        },
        TAG_ERROR => decode_error(payload, path).map(Value::Error),
        TAG_OBJECT => match payload {
            Json::Object(map) => decode_object(map, path),
            _ => Err(invalid(path, "$object payload must be an object")),
        },
        other => Err(invalid(
            path,
            format!("unknown tag {} (wrap literal keys in {})", other, TAG_OBJECT),
        )),
    }
}

fn decode_date(payload: &Json, path: &str) -> Result<Date> {
    match payload {
        Json::Number(n) => n
            .as_i64()
            .map(Date::from_epoch_millis)
            .ok_or_else(|| invalid(path, "$date epoch milliseconds must be an integer")),
        Json::String(s) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Ok(Date::from_epoch_millis(dt.timestamp_millis()));
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| Date::from_epoch_millis(dt.and_utc().timestamp_millis()))
                .ok_or_else(|| invalid(path, format!("$date is not RFC 3339 or YYYY-MM-DD: {}", s)))
        }
        _ => Err(invalid(path, "$date payload must be a string or integer")),
    }
}

fn decode_bigint(payload: &Json, path: &str) -> Result<i128> {
    match payload {
        Json::String(s) => s
            .trim()
            .parse::<i128>()
            .map_err(|e| invalid(path, format!("$bigint is not an integer: {}", e))),
        Json::Number(n) => n
            .as_i64()
            .map(i128::from)
            .ok_or_else(|| invalid(path, "$bigint number must be an integer")),
        _ => Err(invalid(path, "$bigint payload must be a string or integer")),
    }
}

fn decode_special_number(payload: &Json, path: &str) -> Result<f64> {
    match payload.as_str() {
        Some("NaN") => Ok(f64::NAN),
        Some("Infinity") => Ok(f64::INFINITY),
        Some("-Infinity") => Ok(f64::NEG_INFINITY),
        Some("-0") => Ok(-0.0),
        _ => Err(invalid(
            path,
            "$number must be one of \"NaN\", \"Infinity\", \"-Infinity\", \"-0\"",
        )),
    }
}

fn decode_error(payload: &Json, path: &str) -> Result<ErrorValue> {
    match payload {
        Json::String(message) => Ok(ErrorValue::new("Error", message.clone())),
        Json::Object(map) => {
            let field = |key: &str| -> Result<Option<String>> {
                match map.get(key) {
                    None | Some(Json::Null) => Ok(None),
                    Some(Json::String(s)) => Ok(Some(s.clone())),
                    Some(_) => Err(invalid(path, format!("$error.{} must be a string", key))),
                }
            };
            let name = field("name")?.unwrap_or_else(|| "Error".to_string());
            let message = field("message")?.unwrap_or_default();
            Ok(ErrorValue::new(name, message))
        }
        _ => Err(invalid(path, "$error payload must be a string or object")),
    }
}

fn invalid(path: &str, reason: impl Into<String>) -> ExError {
    let err = ExError::new(ExErrorKind::InvalidValue)
        .with_op("value_from_json")
        .with_message(reason);
    if path.is_empty() {
        err
    } else {
        err.with_path(path)
    }
}
