//! Dumping canonical values into storage-native form
//!
//! The mirror of `load`: canonical chrono wrappers become component tuples,
//! every other scalar keeps its representation, and nothing is coerced. A
//! value that is not already canonical for its type is a conversion failure.

use crate::conversions::{array, has_host_repr};
use crate::errors::{ConversionError, ConversionResult};
use crate::models::datatypes::{FieldType, ScalarType};
use crate::models::values::{DateParts, DateTimeParts, TimeParts, Value};

/// Convert a canonical value into the storage-native representation for `ty`.
///
/// Null dumps as null for every type. Array descriptors dump element-wise and
/// fail fast; custom descriptors delegate to the type's own `dump`.
pub fn dump(ty: &FieldType, value: Value) -> ConversionResult<Value> {
    if value.is_null() {
        return Ok(Value::Null);
    }

    match ty {
        FieldType::Scalar(scalar) => dump_scalar(*scalar, value),
        FieldType::Array(elem) => {
            let elem_ty = FieldType::Scalar(*elem);
            match value {
                Value::Array(items) => {
                    array::convert_elements(items, |item| dump(&elem_ty, item)).map(Value::Array)
                }
                _ => Err(ConversionError),
            }
        }
        FieldType::Custom(custom) => custom.dump(value),
    }
}

fn dump_scalar(scalar: ScalarType, value: Value) -> ConversionResult<Value> {
    match (scalar, value) {
        (ScalarType::Date, Value::Date(date)) => {
            Ok(Value::DateParts(DateParts::from_date(date)))
        }
        (ScalarType::Time, Value::Time(time)) => {
            Ok(Value::TimeParts(TimeParts::from_time(time)))
        }
        (ScalarType::DateTime, Value::DateTime(datetime)) => {
            Ok(Value::DateTimeParts(DateTimeParts::from_datetime(datetime)))
        }
        (ScalarType::Date | ScalarType::Time | ScalarType::DateTime, _) => Err(ConversionError),
        (scalar, value) if has_host_repr(scalar, &value) => Ok(value),
        _ => Err(ConversionError),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversions::load;
    use chrono::NaiveDate;

    fn scalar(ty: ScalarType) -> FieldType {
        FieldType::Scalar(ty)
    }

    #[test]
    fn test_null_passes_through() {
        assert_eq!(dump(&scalar(ScalarType::DateTime), Value::Null), Ok(Value::Null));
    }

    #[test]
    fn test_exact_representation_passes_through() {
        assert_eq!(
            dump(&scalar(ScalarType::Integer), Value::Integer(42)),
            Ok(Value::Integer(42))
        );
        assert!(dump(&scalar(ScalarType::Integer), Value::String("42".into())).is_err());
    }

    #[test]
    fn test_date_to_parts() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(
            dump(&scalar(ScalarType::Date), Value::Date(date)),
            Ok(Value::DateParts(DateParts::new(2025, 3, 14)))
        );
    }

    #[test]
    fn test_parts_are_not_canonical_input() {
        assert!(dump(
            &scalar(ScalarType::Date),
            Value::DateParts(DateParts::new(2025, 3, 14))
        )
        .is_err());
    }

    #[test]
    fn test_datetime_round_trip_through_parts() {
        let datetime = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_micro_opt(9, 45, 30, 123_456)
            .unwrap();

        let ty = scalar(ScalarType::DateTime);
        let dumped = dump(&ty, Value::DateTime(datetime)).unwrap();
        assert!(matches!(dumped, Value::DateTimeParts(_)));

        let reloaded = load(&ty, dumped).unwrap();
        assert_eq!(reloaded, Value::DateTime(datetime));
    }

    #[test]
    fn test_time_round_trip_through_parts() {
        let time = chrono::NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).unwrap();
        let ty = scalar(ScalarType::Time);

        let dumped = dump(&ty, Value::Time(time)).unwrap();
        let reloaded = load(&ty, dumped).unwrap();
        assert_eq!(reloaded, Value::Time(time));
    }

    #[test]
    fn test_array_dumps_element_wise() {
        let dates = FieldType::Array(ScalarType::Date);
        let input = Value::Array(vec![
            Value::Date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
            Value::Date(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()),
        ]);

        assert_eq!(
            dump(&dates, input),
            Ok(Value::Array(vec![
                Value::DateParts(DateParts::new(2025, 1, 1)),
                Value::DateParts(DateParts::new(2025, 1, 2)),
            ]))
        );
    }

    #[test]
    fn test_array_fails_fast() {
        let dates = FieldType::Array(ScalarType::Date);
        let input = Value::Array(vec![
            Value::Date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
            Value::Integer(0),
        ]);

        assert_eq!(dump(&dates, input), Err(ConversionError));
    }
}
