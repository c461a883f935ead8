//! Blankness checks for presence validation
//!
//! Blank is domain-level emptiness, distinct from null: a whitespace-only
//! string is blank, an empty array is blank, the integer zero is not. The
//! changeset layer uses this to decide whether a required field was actually
//! provided.

use crate::models::datatypes::FieldType;
use crate::models::values::Value;

/// True when `value` counts as empty for presence validation under `ty`.
///
/// Null is blank for every type. Arrays are blank iff the sequence is empty;
/// elements are never inspected. Custom descriptors delegate to the type's
/// own check. For scalars, text is blank when stripping leading whitespace
/// leaves nothing, and every non-text value is present by definition.
pub fn is_blank(ty: &FieldType, value: &Value) -> bool {
    if value.is_null() {
        return true;
    }

    match ty {
        FieldType::Array(_) => matches!(value, Value::Array(items) if items.is_empty()),
        FieldType::Custom(custom) => custom.is_blank(value),
        FieldType::Scalar(_) => match value {
            Value::String(text) => text.trim_start().is_empty(),
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::datatypes::ScalarType;

    fn scalar(ty: ScalarType) -> FieldType {
        FieldType::Scalar(ty)
    }

    #[test]
    fn test_null_is_blank_for_every_type() {
        assert!(is_blank(&scalar(ScalarType::Integer), &Value::Null));
        assert!(is_blank(&scalar(ScalarType::Any), &Value::Null));
        assert!(is_blank(&FieldType::Array(ScalarType::String), &Value::Null));
    }

    #[test]
    fn test_string_blankness() {
        let string = scalar(ScalarType::String);
        assert!(is_blank(&string, &Value::String("".into())));
        assert!(is_blank(&string, &Value::String("  ".into())));
        assert!(is_blank(&string, &Value::String("\t\n".into())));
        assert!(!is_blank(&string, &Value::String("hello".into())));
        assert!(!is_blank(&string, &Value::String("  hello  ".into())));
    }

    #[test]
    fn test_non_text_scalars_are_never_blank() {
        assert!(!is_blank(&scalar(ScalarType::Integer), &Value::Integer(0)));
        assert!(!is_blank(&scalar(ScalarType::Boolean), &Value::Boolean(false)));
        assert!(!is_blank(&scalar(ScalarType::Binary), &Value::Bytes(vec![])));
    }

    #[test]
    fn test_array_blank_iff_empty() {
        let ints = FieldType::Array(ScalarType::Integer);
        assert!(is_blank(&ints, &Value::Array(vec![])));
        assert!(!is_blank(
            &ints,
            &Value::Array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)])
        ));
    }

    #[test]
    fn test_array_blankness_ignores_element_content() {
        let strings = FieldType::Array(ScalarType::String);
        // A sequence of blank strings is still a non-empty sequence.
        assert!(!is_blank(
            &strings,
            &Value::Array(vec![Value::String("".into())])
        ));
    }
}
