//! Centralized value conversion for the Loam type engine
//!
//! This module is the single source of truth for moving values between the
//! three representations the engine knows about:
//!
//! - `cast` - untrusted external input to the canonical in-memory form
//! - `load` - storage-native values to the canonical in-memory form
//! - `dump` - canonical values to the storage-native form
//! - `is_blank` - domain-level emptiness of an already-cast value
//!
//! All four dispatch the same way: scalar and array descriptors use the
//! built-in logic here, custom descriptors delegate to their [`CustomType`]
//! implementation. Null passes through everything untouched.
//!
//! # Usage Examples
//!
//! ```rust,ignore
//! use loam_types::{cast, dump, load, FieldType, ScalarType, Value};
//!
//! let integer = FieldType::Scalar(ScalarType::Integer);
//!
//! // Form input arrives as text
//! let canonical = cast(&integer, Value::String("10".into()))?;
//! assert_eq!(canonical, Value::Integer(10));
//!
//! // The storage boundary is trusted and strict
//! assert!(load(&integer, Value::String("10".into())).is_err());
//! ```
//!
//! [`CustomType`]: crate::models::datatypes::CustomType

pub mod array;
pub mod blank;
pub mod cast;
pub mod dump;
pub mod json;
pub mod load;

pub use blank::is_blank;
pub use cast::cast;
pub use dump::dump;
pub use json::{cast_json, value_from_json, value_to_json};
pub use load::load;

use crate::models::datatypes::ScalarType;
use crate::models::values::Value;

/// True when `value` already carries the canonical host representation of
/// `scalar`. Shared by the pass-through rule of `cast` and the strict
/// representation checks of `load` and `dump`.
pub(crate) fn has_host_repr(scalar: ScalarType, value: &Value) -> bool {
    match scalar {
        ScalarType::Any => true,
        ScalarType::Integer => matches!(value, Value::Integer(_)),
        ScalarType::Float => matches!(value, Value::Float(_)),
        ScalarType::Boolean => matches!(value, Value::Boolean(_)),
        ScalarType::String => matches!(value, Value::String(_)),
        ScalarType::Binary => matches!(value, Value::Bytes(_)),
        ScalarType::Uuid => matches!(value, Value::Uuid(_)),
        ScalarType::Decimal => matches!(value, Value::Decimal(_)),
        ScalarType::DateTime => matches!(value, Value::DateTime(_)),
        ScalarType::Time => matches!(value, Value::Time(_)),
        ScalarType::Date => matches!(value, Value::Date(_)),
    }
}
