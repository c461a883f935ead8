//! Loading storage-native values into canonical form
//!
//! `load` sits at the trusted storage boundary. Representations are assumed
//! already correct, so no coercion is attempted: an integer column must
//! produce an actual integer value. The only conversions performed are for
//! the calendar types, whose storage-native tuples are rebuilt into their
//! canonical chrono wrappers.

use crate::conversions::{array, has_host_repr};
use crate::errors::{ConversionError, ConversionResult};
use crate::models::datatypes::{FieldType, ScalarType};
use crate::models::values::Value;

/// Convert a storage-native value into the canonical representation for `ty`.
///
/// Null loads as null for every type. Array descriptors load element-wise and
/// fail fast; custom descriptors delegate to the type's own `load`, which is
/// not assumed symmetric with its `cast`.
pub fn load(ty: &FieldType, value: Value) -> ConversionResult<Value> {
    if value.is_null() {
        return Ok(Value::Null);
    }

    match ty {
        FieldType::Scalar(scalar) => load_scalar(*scalar, value),
        FieldType::Array(elem) => {
            let elem_ty = FieldType::Scalar(*elem);
            match value {
                Value::Array(items) => {
                    array::convert_elements(items, |item| load(&elem_ty, item)).map(Value::Array)
                }
                _ => Err(ConversionError),
            }
        }
        FieldType::Custom(custom) => custom.load(value),
    }
}

fn load_scalar(scalar: ScalarType, value: Value) -> ConversionResult<Value> {
    match (scalar, value) {
        // Calendar types arrive as component tuples; out-of-range components
        // fail the conversion.
        (ScalarType::Date, Value::DateParts(parts)) => {
            parts.to_date().map(Value::Date).ok_or(ConversionError)
        }
        (ScalarType::Time, Value::TimeParts(parts)) => {
            parts.to_time().map(Value::Time).ok_or(ConversionError)
        }
        (ScalarType::DateTime, Value::DateTimeParts(parts)) => {
            parts.to_datetime().map(Value::DateTime).ok_or(ConversionError)
        }
        (ScalarType::Date | ScalarType::Time | ScalarType::DateTime, _) => Err(ConversionError),
        (scalar, value) if has_host_repr(scalar, &value) => Ok(value),
        _ => Err(ConversionError),
    }
}
