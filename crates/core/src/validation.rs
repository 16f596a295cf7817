//! Presence and shape checks for create request bodies.
//!
//! Request bodies arrive as loosely-shaped JSON. A field counts as present
//! only when it is truthy in the JavaScript sense, so `0`, `""`, `false` and
//! `null` are all reported as missing. Once every required field is present,
//! individual fields are pulled out into typed values with [`field`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CoreError;

/// Return `true` unless `value` is `null`, `false`, numeric zero or `""`.
///
/// Empty arrays and empty objects are truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Check `fields` in order and fail on the first one that is absent or falsy.
///
/// Later fields are not inspected once a failure is found. A body that is
/// not a JSON object has no fields, so the first required field is reported.
pub fn require_fields(
    body: &Value,
    fields: &[&'static str],
    expected_format: &'static str,
) -> Result<(), CoreError> {
    for &field in fields {
        let present = body.get(field).is_some_and(is_truthy);
        if !present {
            return Err(CoreError::MissingField {
                field,
                expected_format,
            });
        }
    }
    Ok(())
}

/// Deserialize a single named field of `body` into `T`.
///
/// A missing field or one whose JSON type does not fit `T` yields
/// [`CoreError::InvalidField`].
pub fn field<T: DeserializeOwned>(
    body: &Value,
    name: &'static str,
    expected_format: &'static str,
) -> Result<T, CoreError> {
    let raw = body.get(name).cloned().unwrap_or(Value::Null);
    serde_json::from_value(raw).map_err(|_| CoreError::InvalidField {
        field: name,
        expected_format,
    })
}

/// Read a named field as an integer id.
///
/// Accepts a JSON integer or a string holding one (surrounding whitespace
/// allowed), the same values a Postgres integer column would take.
pub fn integer_field(
    body: &Value,
    name: &'static str,
    expected_format: &'static str,
) -> Result<i64, CoreError> {
    let parsed = match body.get(name) {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or(CoreError::InvalidField {
        field: name,
        expected_format,
    })
}

/// Read a named field as text.
///
/// Strings pass through; numbers and booleans are stored in their printed
/// form. Arrays, objects and a missing field are invalid.
pub fn text_field(
    body: &Value,
    name: &'static str,
    expected_format: &'static str,
) -> Result<String, CoreError> {
    match body.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(scalar @ (Value::Number(_) | Value::Bool(_))) => Ok(scalar.to_string()),
        _ => Err(CoreError::InvalidField {
            field: name,
            expected_format,
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
