//! JSON bridging for the external input boundary
//!
//! The layers above this crate speak `serde_json::Value` at their edges:
//! request bodies, query parameters, SDK payloads. This module maps between
//! that space and the engine's [`Value`] space.
//!
//! The inbound direction is structural: JSON numbers become integers when
//! exactly representable as `i64` and floats otherwise, and objects have no
//! value-space counterpart. Typed coercion happens afterwards through `cast`.
//! The outbound direction renders storage-friendly spellings: bytes as number
//! arrays, decimals as strings, calendar values as ISO-8601 strings.

use serde_json::{Number, Value as JsonValue};

use crate::conversions::cast;
use crate::errors::{ConversionError, ConversionResult};
use crate::models::datatypes::FieldType;
use crate::models::values::Value;

/// Wrap a JSON value into the engine's value space without coercion.
///
/// Objects and numbers outside the `i64`/`f64` range fail.
pub fn value_from_json(json: &JsonValue) -> ConversionResult<Value> {
    match json {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(flag) => Ok(Value::Boolean(*flag)),
        JsonValue::Number(num) => {
            if let Some(int) = num.as_i64() {
                Ok(Value::Integer(int))
            } else if let Some(float) = num.as_f64() {
                Ok(Value::Float(float))
            } else {
                Err(ConversionError)
            }
        }
        JsonValue::String(text) => Ok(Value::String(text.clone())),
        JsonValue::Array(items) => items
            .iter()
            .map(value_from_json)
            .collect::<ConversionResult<Vec<_>>>()
            .map(Value::Array),
        JsonValue::Object(_) => Err(ConversionError),
    }
}

/// Cast a JSON value straight to the canonical representation for `ty`.
pub fn cast_json(ty: &FieldType, json: &JsonValue) -> ConversionResult<Value> {
    cast(ty, value_from_json(json)?)
}

/// Render a value as JSON for a response payload.
///
/// Non-finite floats and invalid calendar tuples fail; everything else has a
/// deterministic spelling.
pub fn value_to_json(value: &Value) -> ConversionResult<JsonValue> {
    let json = match value {
        Value::Null => JsonValue::Null,
        Value::Boolean(flag) => JsonValue::Bool(*flag),
        Value::Integer(n) => JsonValue::Number(Number::from(*n)),
        Value::Float(n) => {
            JsonValue::Number(Number::from_f64(*n).ok_or(ConversionError)?)
        }
        Value::String(text) => JsonValue::String(text.clone()),
        Value::Bytes(bytes) => {
            JsonValue::Array(bytes.iter().map(|b| JsonValue::Number(Number::from(*b))).collect())
        }
        Value::Uuid(id) => JsonValue::String(id.to_string()),
        Value::Decimal(decimal) => JsonValue::String(decimal.to_string()),
        Value::Date(date) => JsonValue::String(date.format("%Y-%m-%d").to_string()),
        Value::Time(time) => JsonValue::String(time.format("%H:%M:%S%.6f").to_string()),
        Value::DateTime(datetime) => {
            JsonValue::String(datetime.format("%Y-%m-%dT%H:%M:%S%.6f").to_string())
        }
        Value::DateParts(parts) => {
            let date = parts.to_date().ok_or(ConversionError)?;
            JsonValue::String(date.format("%Y-%m-%d").to_string())
        }
        Value::TimeParts(parts) => {
            let time = parts.to_time().ok_or(ConversionError)?;
            JsonValue::String(time.format("%H:%M:%S%.6f").to_string())
        }
        Value::DateTimeParts(parts) => {
            let datetime = parts.to_datetime().ok_or(ConversionError)?;
            JsonValue::String(datetime.format("%Y-%m-%dT%H:%M:%S%.6f").to_string())
        }
        Value::Array(items) => JsonValue::Array(
            items
                .iter()
                .map(value_to_json)
                .collect::<ConversionResult<Vec<_>>>()?,
        ),
    };

    Ok(json)
}
