//! Casting external input to canonical values
//!
//! `cast` is the untrusted boundary: values arrive from forms, APIs, and
//! query parameters, and text spellings of numeric and boolean values are
//! coerced. Every coercion consumes its entire input; a partial parse is a
//! failure, never a truncation.

use crate::conversions::{array, has_host_repr};
use crate::errors::{ConversionError, ConversionResult};
use crate::models::datatypes::{FieldType, ScalarType};
use crate::models::values::{Decimal, Value};

/// Convert an external value into the canonical representation for `ty`.
///
/// Null casts to null for every type, custom types included. Array
/// descriptors cast element-wise and fail fast; custom descriptors delegate
/// wholesale to the type's own `cast`.
///
/// For scalars, a value already in the host representation passes through
/// unchanged. The only coercions the engine performs are from text:
/// full-text integer, float, and decimal parses, and the boolean literals
/// `"true"`/`"1"`/`"false"`/`"0"`. Every other combination fails.
pub fn cast(ty: &FieldType, value: Value) -> ConversionResult<Value> {
    if value.is_null() {
        return Ok(Value::Null);
    }

    match ty {
        FieldType::Scalar(scalar) => cast_scalar(*scalar, value),
        FieldType::Array(elem) => {
            let elem_ty = FieldType::Scalar(*elem);
            match value {
                Value::Array(items) => {
                    array::convert_elements(items, |item| cast(&elem_ty, item)).map(Value::Array)
                }
                _ => Err(ConversionError),
            }
        }
        FieldType::Custom(custom) => custom.cast(value),
    }
}

fn cast_scalar(scalar: ScalarType, value: Value) -> ConversionResult<Value> {
    if has_host_repr(scalar, &value) {
        return Ok(value);
    }

    match (scalar, value) {
        (ScalarType::Integer, Value::String(text)) => text
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| ConversionError),
        (ScalarType::Float, Value::String(text)) => text
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| ConversionError),
        (ScalarType::Boolean, Value::String(text)) => match text.as_str() {
            "true" | "1" => Ok(Value::Boolean(true)),
            "false" | "0" => Ok(Value::Boolean(false)),
            _ => Err(ConversionError),
        },
        (ScalarType::Decimal, Value::String(text)) => {
            text.parse::<Decimal>().map(Value::Decimal)
        }
        _ => Err(ConversionError),
    }
}
