//! Custom type capability set
//!
//! External components extend the type engine by implementing [`CustomType`]
//! and wrapping the implementation in [`FieldType::custom`]. The engine
//! delegates casting, loading, dumping, and blankness checks to the
//! implementation wholesale and never inspects its internals.
//!
//! [`FieldType::custom`]: crate::models::datatypes::FieldType::custom

use std::fmt;

use crate::errors::ConversionResult;
use crate::models::datatypes::ScalarType;
use crate::models::values::Value;

/// The five-operation contract an external type must satisfy.
///
/// No other contract is assumed. In particular the engine does not validate
/// that the operations are mutually consistent (for instance that `load`
/// output is acceptable to `dump`); that is the implementor's responsibility.
///
/// Null never reaches an implementation: the engine resolves null values for
/// every operation before delegating.
pub trait CustomType: fmt::Debug + Send + Sync {
    /// The built-in scalar this type is backed by.
    ///
    /// Used by type matching and by callers that need the underlying storage
    /// shape of a column.
    fn backing(&self) -> ScalarType;

    /// Presence check, called only on already-cast values.
    fn is_blank(&self, value: &Value) -> bool;

    /// Convert an external value into this type's canonical representation.
    fn cast(&self, value: Value) -> ConversionResult<Value>;

    /// Convert a storage-native value into this type's canonical
    /// representation. Not assumed to be symmetric with `cast`.
    fn load(&self, value: Value) -> ConversionResult<Value>;

    /// Convert a canonical value into this type's storage-native
    /// representation.
    fn dump(&self, value: Value) -> ConversionResult<Value>;
}
